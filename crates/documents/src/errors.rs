//! Error taxonomy for document retrieval.
//!
//! [`RetrievalError`] covers every way a retrieval can end without documents.
//! The engine returns these as values; the reporter pattern-matches on them
//! and never lets one escape to the host as a fault.
//!
//! [`RetrievalError::EmptyResult`] is deliberately a variant rather than an
//! empty `Ok`: zero matches is reported to the host differently from a
//! transport failure (see [`RetrievalError::is_empty_result`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::QueryFilter;

/// Errors produced while building, sending, or decoding a document query.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum RetrievalError {
    /// The filter was rejected before any request was made.
    #[error("{message}")]
    InvalidFilter {
        /// Description of the invalid field.
        message: String,
    },

    /// The service endpoint could not be formed from the configured base URL.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// Network failure, or a non-200 response that is not an auth rejection.
    ///
    /// Never retried.
    #[error("{message}")]
    Transport {
        /// Description of the failure, including the HTTP status when known.
        message: String,
    },

    /// The service rejected the API token (HTTP 401 or 403).
    #[error("Authentication rejected by document service (HTTP {status})")]
    Auth {
        /// HTTP status code returned.
        status: u16,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// What was missing or mistyped.
        message: String,
    },

    /// The query matched zero documents.
    ///
    /// Carries the filter as supplied so the caller can see which constraint
    /// was too narrow.
    #[error("Query returned 0 for {filter}")]
    EmptyResult {
        /// The filter exactly as the caller supplied it.
        filter: QueryFilter,
    },

    /// Encoding or decoding the document collection failed.
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Underlying codec message.
        message: String,
    },
}

impl RetrievalError {
    /// Returns `true` for the non-exceptional zero-match outcome.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_message_echoes_filter() {
        let err = RetrievalError::EmptyResult {
            filter: QueryFilter::new("DoesNotExist"),
        };
        assert!(err.is_empty_result());
        assert_eq!(
            err.to_string(),
            "Query returned 0 for documentTypeName DoesNotExist documentTag None month None year None"
        );
    }

    #[test]
    fn transport_and_auth_are_not_empty_results() {
        let transport = RetrievalError::Transport {
            message: "HTTP 500 Internal Server Error".into(),
        };
        assert!(!transport.is_empty_result());
        assert_eq!(transport.to_string(), "HTTP 500 Internal Server Error");
        assert!(RetrievalError::Auth { status: 401 }
            .to_string()
            .contains("401"));
    }
}
