//! JSON interchange form of a document collection.
//!
//! The collection is a JSON array of `{"page_content", "metadata"}` objects.
//! Non-ASCII text is written literally, not `\u`-escaped.

use crate::{NormalizedDocument, RetrievalError};

/// Encodes `documents` as a JSON array.
///
/// # Errors
///
/// Returns [`RetrievalError::Serialization`] if encoding fails.
pub fn encode_documents(documents: &[NormalizedDocument]) -> Result<String, RetrievalError> {
    Ok(serde_json::to_string(documents)?)
}

/// Decodes a JSON array produced by [`encode_documents`].
///
/// # Errors
///
/// Returns [`RetrievalError::Serialization`] if `encoded` is not a document array.
pub fn decode_documents(encoded: &str) -> Result<Vec<NormalizedDocument>, RetrievalError> {
    Ok(serde_json::from_str(encoded)?)
}

/// Encodes `documents`, then decodes the result again.
///
/// Returns the encoded text together with the decoded copy, so whatever is
/// reported from the decoded copy matches the returned text exactly.
///
/// # Errors
///
/// Returns [`RetrievalError::Serialization`] if either pass fails or the
/// decoded copy differs from the input.
pub fn round_trip(
    documents: &[NormalizedDocument],
) -> Result<(String, Vec<NormalizedDocument>), RetrievalError> {
    let encoded = encode_documents(documents)?;
    let decoded = decode_documents(&encoded)?;
    if decoded.as_slice() != documents {
        return Err(RetrievalError::Serialization {
            message: "decoded documents differ from encoded documents".to_string(),
        });
    }
    Ok((encoded, decoded))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::MetadataValue;

    fn receipt() -> NormalizedDocument {
        let mut metadata = BTreeMap::new();
        metadata.insert("id".into(), MetadataValue::Number(7.into()));
        metadata.insert("title".into(), MetadataValue::Text("Bäckerei Müller".into()));
        metadata.insert(
            "score".into(),
            MetadataValue::Number(serde_json::Number::from_f64(0.125).unwrap()),
        );
        metadata.insert("is_shared_by_requester".into(), MetadataValue::Bool(false));
        metadata.insert(
            "source".into(),
            MetadataValue::Text("https://p.example/documents/7".into()),
        );
        NormalizedDocument::new("Brötchen 2,40 €", metadata)
    }

    #[test]
    fn encoded_shape_uses_page_content_and_metadata() {
        let encoded = encode_documents(&[receipt()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value[0]["page_content"], json!("Brötchen 2,40 €"));
        assert_eq!(value[0]["metadata"]["id"], json!(7));
        assert_eq!(value[0]["metadata"]["is_shared_by_requester"], json!(false));
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let encoded = encode_documents(&[receipt()]).unwrap();
        assert!(encoded.contains("Bäckerei Müller"));
        assert!(encoded.contains('€'));
    }

    #[test]
    fn round_trip_returns_identical_documents() {
        let docs = vec![receipt(), NormalizedDocument::new("", BTreeMap::new())];
        let (encoded, decoded) = round_trip(&docs).unwrap();
        assert_eq!(decoded, docs);
        assert_eq!(decode_documents(&encoded).unwrap(), docs);
    }

    #[test]
    fn decode_rejects_non_document_text() {
        let err = decode_documents("Query returned 0 for documentTypeName X").unwrap_err();
        assert!(matches!(err, RetrievalError::Serialization { .. }));
        assert!(decode_documents(r#"[{"content": "x"}]"#).is_err());
    }
}
