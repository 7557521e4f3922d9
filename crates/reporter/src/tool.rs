//! The host-facing Paperless document tool.

use std::sync::Arc;

use documents::{
    retrieve, round_trip, Clock, DocumentSource, EventSink, InvocationId, NormalizedDocument,
    QueryFilter, RetrievalError, SystemClock,
};
use paperless::PaperlessClient;
use tracing::{info, instrument, warn};

use crate::{StatusReporter, ToolSettings};

/// Retrieves documents and reports progress to the host.
///
/// Each call is independent: no state is shared between calls beyond the
/// injected source and clock.
#[derive(Clone)]
pub struct PaperlessTool {
    source: Arc<dyn DocumentSource>,
    clock: Arc<dyn Clock>,
}

impl PaperlessTool {
    /// Creates a tool over an arbitrary source and clock.
    pub fn new(source: Arc<dyn DocumentSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// Creates a tool talking to the Paperless instance in `settings`,
    /// defaulting the period from the system clock.
    pub fn from_settings(settings: &ToolSettings) -> Self {
        let client = PaperlessClient::new(&settings.paperless_url, settings.paperless_token.clone());
        Self::new(Arc::new(client), Arc::new(SystemClock))
    }

    /// Inbound tool call.
    ///
    /// Returns either a JSON array of `{page_content, metadata}` objects or a
    /// plain-text message; callers tell them apart by trying to decode.
    pub async fn get_paperless_documents(
        &self,
        document_type_name: &str,
        document_tag_name: Option<&str>,
        created_year: Option<i32>,
        created_month: Option<u32>,
        event_sink: Option<&dyn EventSink>,
    ) -> String {
        let filter = QueryFilter {
            document_type_name: document_type_name.to_string(),
            document_tag_name: document_tag_name.map(str::to_string),
            created_year,
            created_month,
        };
        self.get_documents(&filter, event_sink).await
    }

    /// Runs one retrieval, emitting exactly one terminal status.
    ///
    /// Order of events: one `in_progress`, then one citation per document,
    /// then `success`; or one `in_progress` then `error`. No failure escapes
    /// this method; it is rendered into the returned string instead.
    #[instrument(
        skip_all,
        fields(
            invocation = %InvocationId::new_random(),
            document_type = %filter.document_type_name,
        )
    )]
    pub async fn get_documents(&self, filter: &QueryFilter, sink: Option<&dyn EventSink>) -> String {
        let mut reporter = StatusReporter::new(sink);
        reporter
            .progress_update(format!("Getting documents for {}", filter.document_type_name))
            .await;

        match self.collect(filter).await {
            Ok((encoded, documents)) => {
                for document in &documents {
                    reporter.citation(document).await;
                }
                info!(count = documents.len(), "Documents retrieved");
                reporter
                    .success_update(format!(
                        "Received {} documents for {}",
                        documents.len(),
                        filter.summary()
                    ))
                    .await;
                encoded
            }
            Err(err) if err.is_empty_result() => {
                let message = err.to_string();
                info!("Query matched no documents");
                reporter.error_update(message.clone()).await;
                message
            }
            Err(err) => {
                let message = format!("Error: {err}");
                warn!(error = %err, "Document retrieval failed");
                reporter.error_update(message.clone()).await;
                message
            }
        }
    }

    async fn collect(
        &self,
        filter: &QueryFilter,
    ) -> Result<(String, Vec<NormalizedDocument>), RetrievalError> {
        let documents = retrieve(self.source.as_ref(), filter, self.clock.as_ref()).await?;
        round_trip(&documents)
    }
}

impl std::fmt::Debug for PaperlessTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperlessTool").finish_non_exhaustive()
    }
}
