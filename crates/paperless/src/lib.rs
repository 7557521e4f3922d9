//! Paperless-ngx REST infrastructure adapter.
//!
//! Implements the [`documents::DocumentSource`] trait for the Paperless
//! `GET /api/documents/` endpoint.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, URL construction, status mapping, and
//! record normalization all live here. The [`documents`] crate sees only
//! [`documents::DocumentSource`].
//!
//! ## Scope
//!
//! One request per query, first page only, static `Token` authentication.
//! A non-200 status is a hard failure; nothing is retried.

pub mod client;
pub mod endpoint;
pub mod normalize;

pub use client::PaperlessClient;
pub use endpoint::PaperlessEndpoint;
pub use normalize::normalize_record;
