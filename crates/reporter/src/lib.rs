//! Paperless document tool for host applications.
//!
//! Wraps document retrieval in the status/citation event protocol a host
//! expects: one progress event, one citation per document, and exactly one
//! terminal `success` or `error` event per call.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** The tool sequences calls between the [`documents`]
//! engine and the host's [`documents::EventSink`]. It contains no domain rules
//! of its own; every failure is caught here and rendered into the returned
//! string.

pub mod settings;
pub mod sink;
pub mod status;
pub mod tool;

pub use settings::ToolSettings;
pub use sink::ChannelSink;
pub use status::{ReportState, StatusReporter};
pub use tool::PaperlessTool;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use documents::{EventSink, ToolEvent};

    /// Sink that keeps every event for later assertions.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        events: Mutex<Vec<ToolEvent>>,
    }

    impl RecordingSink {
        pub(crate) fn events(&self) -> Vec<ToolEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventSink for RecordingSink {
        async fn emit(&self, event: ToolEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
