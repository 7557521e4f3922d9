//! URL construction for the Paperless documents collection.

const API_DOCUMENTS_PATH: &str = "api/documents/";
const PUBLIC_DOCUMENTS_PATH: &str = "documents/";

/// The base URL of a Paperless instance, normalized to end in exactly one `/`.
///
/// An empty base URL becomes `/`, which yields the root-relative documents
/// path `/api/documents/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperlessEndpoint {
    base: String,
}

impl PaperlessEndpoint {
    /// Normalizes `base_url`.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base: format!("{trimmed}/"),
        }
    }

    /// The normalized base URL, always ending in `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// REST collection URL: `<base>api/documents/`.
    pub fn documents_url(&self) -> String {
        format!("{}{API_DOCUMENTS_PATH}", self.base)
    }

    /// Public, browser-facing prefix for document links: `<base>documents/`.
    ///
    /// A record's `source` is this prefix followed by its id.
    pub fn public_url(&self) -> String {
        format!("{}{PUBLIC_DOCUMENTS_PATH}", self.base)
    }
}
