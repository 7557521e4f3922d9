//! Shared value types for the document retrieval domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! meaningful values with invariants (months are in `1..=12`, metadata holds
//! only scalars) and participate in domain computations.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{DocumentTypeName, RetrievalError};

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Calendar year of this timestamp.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Calendar month of this timestamp, `1..=12`.
    pub fn month(self) -> u32 {
        self.0.month()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Source of "now" for filter defaulting.
///
/// Injected into the engine so that the current-period defaults are
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// [`Clock`] that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    /// Creates a clock frozen at `at`.
    pub fn new(at: Timestamp) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Query filter
// ---------------------------------------------------------------------------

/// The caller-supplied filter for one retrieval.
///
/// Year and month are optional and default independently to the current
/// period when the filter is resolved against a [`Clock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Document type, matched as a case-insensitive substring.
    pub document_type_name: String,
    /// Optional tag, matched as a case-insensitive substring.
    pub document_tag_name: Option<String>,
    /// Creation year; the current year when absent.
    pub created_year: Option<i32>,
    /// Creation month (`1..=12`); the current month when absent.
    pub created_month: Option<u32>,
}

impl QueryFilter {
    /// Creates a filter for `document_type_name` with no tag and default period.
    pub fn new(document_type_name: impl Into<String>) -> Self {
        Self {
            document_type_name: document_type_name.into(),
            document_tag_name: None,
            created_year: None,
            created_month: None,
        }
    }

    /// Restricts the filter to documents carrying a matching tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.document_tag_name = Some(tag.into());
        self
    }

    /// Overrides the creation year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.created_year = Some(year);
        self
    }

    /// Overrides the creation month.
    #[must_use]
    pub fn with_month(mut self, month: u32) -> Self {
        self.created_month = Some(month);
        self
    }

    /// Validates the filter and fills in the period defaults from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::InvalidFilter`] if the document type name is
    /// blank or a supplied month lies outside `1..=12`.
    pub fn resolve(&self, clock: &dyn Clock) -> Result<DocumentQuery, RetrievalError> {
        let document_type = DocumentTypeName::new(self.document_type_name.clone()).ok_or_else(
            || RetrievalError::InvalidFilter {
                message: format!("Invalid documentTypeName: {}", self.document_type_name),
            },
        )?;

        if let Some(month) = self.created_month {
            if !(1..=12).contains(&month) {
                return Err(RetrievalError::InvalidFilter {
                    message: format!("Invalid created month: {month}"),
                });
            }
        }

        let now = clock.now();
        Ok(DocumentQuery {
            document_type,
            tag_name: self.document_tag_name.clone().unwrap_or_default(),
            created_year: self.created_year.unwrap_or_else(|| now.year()),
            created_month: self.created_month.unwrap_or_else(|| now.month()),
        })
    }

    /// The filter echoed in the success summary.
    pub fn summary(&self) -> String {
        self.echo_with("documentType")
    }

    fn echo_with(&self, type_label: &str) -> String {
        format!(
            "{type_label} {} documentTag {} month {} year {}",
            self.document_type_name,
            echo(self.document_tag_name.as_ref()),
            echo(self.created_month.as_ref()),
            echo(self.created_year.as_ref()),
        )
    }
}

/// Echoes the filter exactly as supplied, absent values rendered as `None`.
impl std::fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.echo_with("documentTypeName"))
    }
}

fn echo<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "None".to_string(), ToString::to_string)
}

/// A fully resolved query, ready to be sent to a [`crate::DocumentSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    /// Document type substring.
    pub document_type: DocumentTypeName,
    /// Tag substring; empty means "any tag" under substring matching.
    pub tag_name: String,
    /// Creation year.
    pub created_year: i32,
    /// Creation month, `1..=12`.
    pub created_month: u32,
}

impl DocumentQuery {
    /// Query-string parameters in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("document_type__name__icontains", self.document_type.to_string()),
            ("tags__name__icontains", self.tag_name.clone()),
            ("created__month", self.created_month.to_string()),
            ("created_year", self.created_year.to_string()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Normalized documents
// ---------------------------------------------------------------------------

/// A scalar metadata value.
///
/// Numbers keep their exact JSON representation so encode/decode is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON string.
    Text(String),
}

impl MetadataValue {
    /// Converts a JSON value, returning `None` for nulls, lists and objects.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(b)),
            serde_json::Value::Number(n) => Some(Self::Number(n)),
            serde_json::Value::String(s) => Some(Self::Text(s)),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }

    /// Returns the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Metadata key carrying the dereferenceable document link.
pub const SOURCE_KEY: &str = "source";

/// Metadata key carrying the document title.
pub const TITLE_KEY: &str = "title";

/// One retrieved record in uniform `{content, metadata}` form.
///
/// Serialises as `{"page_content": .., "metadata": {..}}`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    #[serde(rename = "page_content")]
    content: String,
    metadata: BTreeMap<String, MetadataValue>,
}

impl NormalizedDocument {
    /// Creates a document from its body text and scalar metadata.
    pub fn new(content: impl Into<String>, metadata: BTreeMap<String, MetadataValue>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Full text body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Scalar metadata fields.
    pub fn metadata(&self) -> &BTreeMap<String, MetadataValue> {
        &self.metadata
    }

    /// The `source` link, if present and textual.
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(SOURCE_KEY).and_then(MetadataValue::as_str)
    }

    /// The `title` field, if present and textual.
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(TITLE_KEY).and_then(MetadataValue::as_str)
    }
}
