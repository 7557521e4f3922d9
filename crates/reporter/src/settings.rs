//! Host-supplied settings for the Paperless tool.

use serde::{Deserialize, Serialize};

/// The two settings a host provides: where Paperless lives and how to
/// authenticate against it.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolSettings {
    /// Base URL of the Paperless service.
    #[serde(default = "default_paperless_url")]
    pub paperless_url: String,

    /// API token sent as `Authorization: Token <token>`.
    #[serde(default)]
    pub paperless_token: String,
}

fn default_paperless_url() -> String {
    "https://paperless.yourdomain.com/".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            paperless_url: default_paperless_url(),
            paperless_token: String::new(),
        }
    }
}

impl std::fmt::Debug for ToolSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSettings")
            .field("paperless_url", &self.paperless_url)
            .field(
                "paperless_token",
                &if self.paperless_token.is_empty() { "<unset>" } else { "<redacted>" },
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_placeholder_domain() {
        let settings = ToolSettings::default();
        assert_eq!(settings.paperless_url, "https://paperless.yourdomain.com/");
        assert!(settings.paperless_token.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: ToolSettings =
            serde_json::from_str(r#"{"paperless_token": "abc"}"#).unwrap();
        assert_eq!(settings.paperless_url, "https://paperless.yourdomain.com/");
        assert_eq!(settings.paperless_token, "abc");
    }

    #[test]
    fn debug_never_prints_token() {
        let settings = ToolSettings {
            paperless_url: "https://p.example".into(),
            paperless_token: "hunter2".into(),
        };
        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
