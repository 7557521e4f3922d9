//! Core domain for Paperless document retrieval.
//!
//! This crate contains every domain concept, newtype identifier, event payload,
//! and error type used throughout the workspace. Infrastructure crates implement
//! the traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`DocumentId`, `DocumentTypeName`, `InvocationId`) |
//! | [`types`] | Value types (`QueryFilter`, `DocumentQuery`, `NormalizedDocument`, `Clock`, etc.) |
//! | [`errors`] | The [`RetrievalError`] taxonomy |
//! | [`events`] | Status/citation payloads and the [`EventSink`] port |
//! | [`codec`] | JSON encode/decode of document collections |
//! | [`source`] | The [`DocumentSource`] port and the [`retrieve`] engine entry point |

pub mod codec;
pub mod errors;
pub mod events;
pub mod identifiers;
pub mod source;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use codec::{decode_documents, encode_documents, round_trip};
pub use errors::RetrievalError;
pub use events::{
    CitationEvent, CitationMetadata, CitationSource, EventSink, StatusEvent, StatusKind,
    ToolEvent,
};
pub use identifiers::{DocumentId, DocumentTypeName, InvocationId};
pub use source::{retrieve, DocumentSource};
pub use types::{
    Clock, DocumentQuery, FixedClock, MetadataValue, NormalizedDocument, QueryFilter,
    SystemClock, Timestamp, SOURCE_KEY, TITLE_KEY,
};
