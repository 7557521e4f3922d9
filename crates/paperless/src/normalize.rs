//! Raw Paperless record → [`NormalizedDocument`].

use std::collections::BTreeMap;

use documents::{DocumentId, MetadataValue, NormalizedDocument, RetrievalError, SOURCE_KEY};
use serde_json::{Map, Value};

const ID_FIELD: &str = "id";
const CONTENT_FIELD: &str = "content";

/// Normalizes one entry of the `results` array.
///
/// `content` is lifted into the document body. Every other scalar field is
/// copied into metadata; nulls, lists and nested objects are dropped. A
/// `source` link of `public_url` followed by the record id is inserted last.
///
/// # Errors
///
/// Returns [`RetrievalError::MalformedResponse`] if `id` is not an unsigned
/// integer or `content` is not a string.
pub fn normalize_record(
    mut record: Map<String, Value>,
    public_url: &str,
) -> Result<NormalizedDocument, RetrievalError> {
    let id = record
        .get(ID_FIELD)
        .and_then(Value::as_u64)
        .map(DocumentId::new)
        .ok_or_else(|| RetrievalError::MalformedResponse {
            message: "document record without a numeric 'id'".to_string(),
        })?;

    let content = match record.remove(CONTENT_FIELD) {
        Some(Value::String(content)) => content,
        _ => {
            return Err(RetrievalError::MalformedResponse {
                message: format!("document {id} has no textual 'content'"),
            })
        }
    };

    let mut metadata: BTreeMap<String, MetadataValue> = record
        .into_iter()
        .filter_map(|(key, value)| MetadataValue::from_json(value).map(|value| (key, value)))
        .collect();
    metadata.insert(
        SOURCE_KEY.to_string(),
        MetadataValue::Text(format!("{public_url}{id}")),
    );

    Ok(NormalizedDocument::new(content, metadata))
}
