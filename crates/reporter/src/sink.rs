//! [`EventSink`] implementations shipped with the tool.

use async_trait::async_trait;
use documents::{EventSink, ToolEvent};
use tokio::sync::mpsc;
use tracing::warn;

/// Forwards events into a bounded channel, waiting for capacity.
///
/// Lets a host consume events from another task while the retrieval waits on
/// each emission.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::Sender<ToolEvent>,
}

impl ChannelSink {
    /// Wraps an existing sender.
    pub fn new(sender: mpsc::Sender<ToolEvent>) -> Self {
        Self { sender }
    }

    /// Creates a sink and the receiver for its events.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ToolEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl EventSink for ChannelSink {
    async fn emit(&self, event: ToolEvent) {
        if self.sender.send(event).await.is_err() {
            warn!("Event receiver dropped; discarding event");
        }
    }
}

#[cfg(test)]
mod tests {
    use documents::StatusEvent;

    use super::*;

    #[tokio::test]
    async fn delivers_events_in_order() {
        let (sink, mut rx) = ChannelSink::channel(4);
        sink.emit(StatusEvent::in_progress("a").into()).await;
        sink.emit(StatusEvent::success("b").into()).await;

        assert_eq!(rx.recv().await, Some(ToolEvent::from(StatusEvent::in_progress("a"))));
        assert_eq!(rx.recv().await, Some(ToolEvent::from(StatusEvent::success("b"))));
    }

    #[tokio::test]
    async fn closed_receiver_does_not_fail_emission() {
        let (sink, rx) = ChannelSink::channel(1);
        drop(rx);
        sink.emit(StatusEvent::error("ignored").into()).await;
    }
}
