//! reqwest-backed [`DocumentSource`] for the Paperless REST API.

use async_trait::async_trait;
use documents::{DocumentQuery, DocumentSource, NormalizedDocument, RetrievalError};
use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::normalize::normalize_record;
use crate::PaperlessEndpoint;

/// One page of `GET /api/documents/`.
///
/// Only `results` is required. `count` and `next` are read for logging; the
/// client never follows `next`.
#[derive(Debug, Deserialize)]
struct DocumentPage {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<String>,
    results: Vec<Map<String, Value>>,
}

/// Client for one Paperless instance, authenticated with a static API token.
#[derive(Clone)]
pub struct PaperlessClient {
    http: reqwest::Client,
    endpoint: PaperlessEndpoint,
    token: String,
}

impl PaperlessClient {
    /// Creates a client with a default [`reqwest::Client`].
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, token)
    }

    /// Creates a client that sends requests through `http`.
    pub fn with_http_client(http: reqwest::Client, base_url: &str, token: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: PaperlessEndpoint::new(base_url),
            token: token.into(),
        }
    }

    fn request_url(&self, query: &DocumentQuery) -> Result<Url, RetrievalError> {
        let documents_url = self.endpoint.documents_url();
        Url::parse_with_params(&documents_url, query.query_pairs()).map_err(|e| {
            RetrievalError::Configuration {
                message: format!("invalid documents URL '{documents_url}': {e}"),
            }
        })
    }
}

// The token must never reach logs.
impl std::fmt::Debug for PaperlessClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperlessClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentSource for PaperlessClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint.base(), document_type = %query.document_type))]
    async fn fetch(&self, query: &DocumentQuery) -> Result<Vec<NormalizedDocument>, RetrievalError> {
        let url = self.request_url(query)?;

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| RetrievalError::Transport {
                message: format!("Request to document service failed: {e}"),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = status.as_u16(), "Document service rejected the API token");
            return Err(RetrievalError::Auth {
                status: status.as_u16(),
            });
        }
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Document service returned a non-200 status");
            return Err(RetrievalError::Transport {
                message: format!("Document service responded with HTTP {status}"),
            });
        }

        let body = response.bytes().await.map_err(|e| RetrievalError::Transport {
            message: format!("Failed to read document service response: {e}"),
        })?;
        let page: DocumentPage =
            serde_json::from_slice(&body).map_err(|e| RetrievalError::MalformedResponse {
                message: e.to_string(),
            })?;

        if page.next.is_some() {
            debug!(
                total = page.count,
                page_size = page.results.len(),
                "More results available; only the first page is consumed"
            );
        }

        let public_url = self.endpoint.public_url();
        page.results
            .into_iter()
            .map(|record| normalize_record(record, &public_url))
            .collect()
    }
}
