//! Status and citation events reported to the host while a retrieval runs.
//!
//! The host's event callback accepts exactly two payload shapes. Both are
//! modelled here as tagged variants with fixed fields, and
//! [`ToolEvent::from_value`] rejects anything else at the boundary.
//!
//! Wire format:
//!
//! ```json
//! {"type": "status", "data": {"status": "in_progress", "description": "..", "done": false}}
//! {"type": "citation", "data": {"document": [".."], "metadata": [{"source": ".."}], "source": {"name": ".."}}}
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::NormalizedDocument;

/// Lifecycle status of one retrieval call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// The call is running.
    InProgress,
    /// Terminal: documents were returned.
    Success,
    /// Terminal: a failure or an empty result.
    Error,
}

impl StatusKind {
    /// Returns `true` for [`StatusKind::Success`] and [`StatusKind::Error`].
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A progress or terminal status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusEvent {
    /// Current status.
    pub status: StatusKind,
    /// Human-readable description.
    pub description: String,
    /// `false` while in progress, `true` once terminal.
    pub done: bool,
}

impl StatusEvent {
    fn with_kind(status: StatusKind, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
            done: status.is_terminal(),
        }
    }

    /// A non-terminal progress update.
    pub fn in_progress(description: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::InProgress, description)
    }

    /// A terminal success update.
    pub fn success(description: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Success, description)
    }

    /// A terminal error update.
    pub fn error(description: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Error, description)
    }
}

/// Label entry of a citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CitationMetadata {
    /// Display label (the document title).
    pub source: String,
}

/// Link entry of a citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CitationSource {
    /// Dereferenceable document link.
    pub name: String,
}

/// Links one retrieved document back to its origin for the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CitationEvent {
    /// Single-element list holding the document content.
    pub document: Vec<String>,
    /// Single-element list holding the display label.
    pub metadata: Vec<CitationMetadata>,
    /// The document link.
    pub source: CitationSource,
}

impl CitationEvent {
    /// Builds the citation for `document`.
    ///
    /// The label is the document's `title`; documents without one are
    /// labelled with their source link instead.
    pub fn for_document(document: &NormalizedDocument) -> Self {
        let source = document.source().unwrap_or_default().to_string();
        let label = document.title().map_or_else(|| source.clone(), str::to_string);
        Self {
            document: vec![document.content().to_string()],
            metadata: vec![CitationMetadata { source: label }],
            source: CitationSource { name: source },
        }
    }
}

/// Any event the host callback accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ToolEvent {
    /// `{"type": "status", ..}`
    Status(StatusEvent),
    /// `{"type": "citation", ..}`
    Citation(CitationEvent),
}

impl ToolEvent {
    /// Parses a host-side JSON payload, rejecting unknown shapes.
    ///
    /// # Errors
    ///
    /// Returns the decode error if `value` is not one of the two known payloads.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Renders this event as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the encode error; unreachable for the fixed payload shapes.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns `true` for a status event with `done == true`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Status(status) if status.done)
    }
}

impl From<StatusEvent> for ToolEvent {
    fn from(event: StatusEvent) -> Self {
        Self::Status(event)
    }
}

impl From<CitationEvent> for ToolEvent {
    fn from(event: CitationEvent) -> Self {
        Self::Citation(event)
    }
}

/// Host-provided receiver for [`ToolEvent`]s.
///
/// Each emission is awaited before the retrieval proceeds, so the sink sees
/// events in production order.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Delivers one event.
    async fn emit(&self, event: ToolEvent);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::MetadataValue;

    #[test]
    fn status_constructors_set_done() {
        assert!(!StatusEvent::in_progress("x").done);
        assert!(StatusEvent::success("x").done);
        assert!(StatusEvent::error("x").done);
    }

    #[test]
    fn status_event_wire_shape() {
        let value = ToolEvent::from(StatusEvent::in_progress("Getting documents for Kassenbon"))
            .to_value()
            .unwrap();
        assert_eq!(
            value,
            json!({
                "type": "status",
                "data": {
                    "status": "in_progress",
                    "description": "Getting documents for Kassenbon",
                    "done": false,
                }
            })
        );
    }

    #[test]
    fn citation_uses_title_as_label_and_source_as_name() {
        let mut metadata = BTreeMap::new();
        metadata.insert("title".into(), MetadataValue::Text("Receipt 7".into()));
        metadata.insert(
            "source".into(),
            MetadataValue::Text("https://p.example/documents/7".into()),
        );
        let doc = NormalizedDocument::new("total 12,99", metadata);

        let value = ToolEvent::from(CitationEvent::for_document(&doc))
            .to_value()
            .unwrap();
        assert_eq!(
            value,
            json!({
                "type": "citation",
                "data": {
                    "document": ["total 12,99"],
                    "metadata": [{"source": "Receipt 7"}],
                    "source": {"name": "https://p.example/documents/7"},
                }
            })
        );
    }

    #[test]
    fn citation_without_title_falls_back_to_source() {
        let mut metadata = BTreeMap::new();
        metadata.insert(
            "source".into(),
            MetadataValue::Text("https://p.example/documents/9".into()),
        );
        let citation = CitationEvent::for_document(&NormalizedDocument::new("", metadata));
        assert_eq!(citation.metadata[0].source, "https://p.example/documents/9");
    }

    #[test]
    fn unknown_shapes_are_rejected() {
        assert!(ToolEvent::from_value(json!({"type": "progress", "data": {}})).is_err());
        assert!(ToolEvent::from_value(json!({
            "type": "status",
            "data": {"status": "success", "description": "", "done": true, "extra": 1}
        }))
        .is_err());
        assert!(ToolEvent::from_value(json!({
            "type": "status",
            "data": {"status": "paused", "description": "", "done": false}
        }))
        .is_err());
    }

    #[test]
    fn known_shape_parses() {
        let event = ToolEvent::from_value(json!({
            "type": "status",
            "data": {"status": "error", "description": "boom", "done": true}
        }))
        .unwrap();
        assert!(event.is_terminal());
        assert_eq!(event, ToolEvent::Status(StatusEvent::error("boom")));
    }
}
