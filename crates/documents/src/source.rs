//! The document source port and the engine entry point built on it.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{Clock, DocumentQuery, NormalizedDocument, QueryFilter, RetrievalError};

/// A remote document store that can answer a resolved [`DocumentQuery`].
///
/// Implementations issue exactly one request and return only the first page
/// of results. An empty page is a valid `Ok`; [`retrieve`] decides what an
/// empty result means.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches and normalizes the documents matching `query`.
    async fn fetch(&self, query: &DocumentQuery) -> Result<Vec<NormalizedDocument>, RetrievalError>;
}

/// Resolves `filter` against `clock`, queries `source`, and returns the
/// matching documents.
///
/// # Errors
///
/// - [`RetrievalError::InvalidFilter`] if the filter does not resolve.
/// - [`RetrievalError::EmptyResult`] if the source returned no documents.
/// - Any error the source itself reports.
#[instrument(skip_all, fields(document_type = %filter.document_type_name))]
pub async fn retrieve(
    source: &dyn DocumentSource,
    filter: &QueryFilter,
    clock: &dyn Clock,
) -> Result<Vec<NormalizedDocument>, RetrievalError> {
    let query = filter.resolve(clock)?;
    debug!(
        tag = %query.tag_name,
        year = query.created_year,
        month = query.created_month,
        "Resolved document query"
    );

    let documents = source.fetch(&query).await?;
    if documents.is_empty() {
        return Err(RetrievalError::EmptyResult {
            filter: filter.clone(),
        });
    }

    debug!(count = documents.len(), "Retrieved documents");
    Ok(documents)
}
