//! Newtype domain identifiers.
//!
//! Every domain concept that has an identity is represented as a distinct newtype
//! wrapping a primitive, so a Paperless record id can never be confused with a
//! month number or a tag name with a document type name.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one Paperless document record.
///
/// Wraps the numeric `id` assigned by the Paperless server. Combined with
/// the public documents URL it forms the document's `source` link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(u64);

impl DocumentId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The document type a query searches for (e.g. `"Kassenbon"`).
///
/// Matched case-insensitively as a substring by the remote service. Never
/// blank; whitespace-only names are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentTypeName(String);

impl DocumentTypeName {
    /// Returns `None` if `name` is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.trim().is_empty()).then_some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentTypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a single retrieval invocation.
///
/// Generated fresh for every tool call and recorded on tracing spans so all
/// log lines from one call can be correlated. Never sent to Paperless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(Uuid);

impl InvocationId {
    /// Generates a new random invocation identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
