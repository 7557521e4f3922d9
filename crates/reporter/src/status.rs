//! Status reporting state machine.
//!
//! `Idle -> InProgress -> {Succeeded | Failed}`. Exactly one terminal status
//! is emitted per reporter; anything emitted after it is dropped.

use documents::{CitationEvent, EventSink, NormalizedDocument, StatusEvent, ToolEvent};
use tracing::warn;

/// Where a [`StatusReporter`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportState {
    /// Nothing emitted yet.
    Idle,
    /// Progress reported, no terminal status yet.
    InProgress,
    /// Terminal `success` emitted.
    Succeeded,
    /// Terminal `error` emitted.
    Failed,
}

impl ReportState {
    /// Returns `true` once a terminal status has been emitted.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Emits status and citation events to an optional host sink.
///
/// State is tracked even without a sink, so every call path still ends in a
/// terminal state.
pub struct StatusReporter<'a> {
    sink: Option<&'a dyn EventSink>,
    state: ReportState,
}

impl<'a> StatusReporter<'a> {
    /// Creates a reporter in [`ReportState::Idle`].
    pub fn new(sink: Option<&'a dyn EventSink>) -> Self {
        Self {
            sink,
            state: ReportState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ReportState {
        self.state
    }

    /// Emits a non-terminal `in_progress` status.
    pub async fn progress_update(&mut self, description: impl Into<String>) {
        self.emit_status(StatusEvent::in_progress(description), ReportState::InProgress)
            .await;
    }

    /// Emits the terminal `success` status.
    pub async fn success_update(&mut self, description: impl Into<String>) {
        self.emit_status(StatusEvent::success(description), ReportState::Succeeded)
            .await;
    }

    /// Emits the terminal `error` status.
    pub async fn error_update(&mut self, description: impl Into<String>) {
        self.emit_status(StatusEvent::error(description), ReportState::Failed)
            .await;
    }

    /// Emits one citation for `document`. No-op without a sink.
    pub async fn citation(&mut self, document: &NormalizedDocument) {
        if self.state.is_terminal() {
            warn!(state = ?self.state, "Dropping citation emitted after terminal status");
            return;
        }
        if let Some(sink) = self.sink {
            sink.emit(ToolEvent::Citation(CitationEvent::for_document(document)))
                .await;
        }
    }

    async fn emit_status(&mut self, event: StatusEvent, next: ReportState) {
        if self.state.is_terminal() {
            warn!(
                state = ?self.state,
                status = ?event.status,
                "Dropping status emitted after terminal status"
            );
            return;
        }
        self.state = next;
        if let Some(sink) = self.sink {
            sink.emit(ToolEvent::Status(event)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use documents::StatusKind;

    use super::*;
    use crate::testing::RecordingSink;

    #[tokio::test]
    async fn walks_idle_progress_success() {
        let sink = RecordingSink::default();
        let mut reporter = StatusReporter::new(Some(&sink));
        assert_eq!(reporter.state(), ReportState::Idle);

        reporter.progress_update("Getting documents for Kassenbon").await;
        assert_eq!(reporter.state(), ReportState::InProgress);

        reporter
            .citation(&NormalizedDocument::new("x", BTreeMap::new()))
            .await;
        reporter.success_update("done").await;
        assert_eq!(reporter.state(), ReportState::Succeeded);

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[1], ToolEvent::Citation(_)));
        assert!(events[2].is_terminal());
    }

    #[tokio::test]
    async fn nothing_is_emitted_after_terminal() {
        let sink = RecordingSink::default();
        let mut reporter = StatusReporter::new(Some(&sink));

        reporter.progress_update("working").await;
        reporter.error_update("Error: boom").await;
        reporter.success_update("late").await;
        reporter.progress_update("late").await;
        reporter
            .citation(&NormalizedDocument::new("x", BTreeMap::new()))
            .await;

        assert_eq!(reporter.state(), ReportState::Failed);
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            ToolEvent::Status(StatusEvent {
                status: StatusKind::Error,
                description: "Error: boom".into(),
                done: true,
            })
        );
    }

    #[tokio::test]
    async fn tracks_state_without_sink() {
        let mut reporter = StatusReporter::new(None);
        reporter.progress_update("working").await;
        reporter
            .citation(&NormalizedDocument::new("x", BTreeMap::new()))
            .await;
        reporter.success_update("done").await;
        assert!(reporter.state().is_terminal());
    }
}
