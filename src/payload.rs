//! Stdin and outbound payload types

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Payload the host writes to the skill's standard input
///
/// Both fields are optional; `input` takes precedence over `query`, and an
/// empty string counts as absent for fallback purposes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SkillInput {
    /// User input as supplied by the host
    #[serde(default)]
    pub input: Option<String>,
    /// Query text, used when `input` is absent
    #[serde(default)]
    pub query: Option<String>,
}

impl SkillInput {
    /// Parse the stdin payload. Malformed JSON is a hard error; the host
    /// contract does not extend the `{"error": ...}` convention to it.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The query to forward: non-empty `input`, else non-empty `query`,
    /// else the empty string
    pub fn effective_query(&self) -> &str {
        for candidate in [&self.input, &self.query] {
            if let Some(value) = candidate {
                if !value.is_empty() {
                    return value;
                }
            }
        }
        ""
    }
}

/// Body of the outbound POST to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    /// Query text forwarded to the workflow
    pub query: String,
}

impl WebhookRequest {
    /// Build the outbound body for a query
    pub fn new(query: impl Into<String>) -> Self {
        WebhookRequest {
            query: query.into(),
        }
    }
}
