//! Event sink that prints each event as one JSON line on stderr.

use async_trait::async_trait;
use documents::{EventSink, ToolEvent};
use tracing::warn;

/// Writes events to stderr, one JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

#[async_trait]
impl EventSink for StderrSink {
    async fn emit(&self, event: ToolEvent) {
        match event.to_value() {
            Ok(value) => eprintln!("{value}"),
            Err(e) => warn!(error = %e, "Failed to render event"),
        }
    }
}
