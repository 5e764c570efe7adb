//! Skill manifest - metadata a host uses to discover the skill
//!
//! Script skills advertise themselves through a metadata header; a compiled
//! skill prints the same information as JSON via the `--manifest` flag.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Skill manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillManifest {
    /// Skill name (used for identification and invocation)
    pub name: String,
    /// Skill version
    pub version: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Parameter schema (JSON Schema style, keyed by parameter name)
    #[serde(default)]
    pub parameters: Value,
    /// Template the host uses to present the result to the model
    pub prompt: Option<String>,
}

impl SkillManifest {
    /// Create a new manifest
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        SkillManifest {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the parameter schema
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the result prompt template
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Manifest for the webhook relay skill
    pub fn webhook_relay() -> Self {
        SkillManifest::new(crate::NAME, crate::VERSION)
            .with_description("Forwards a query to an n8n webhook and returns the workflow result")
            .with_parameters(serde_json::json!({
                "query": {
                    "type": "string",
                    "description": "Input forwarded to the workflow"
                }
            }))
            .with_prompt("[webhook result]\n{{result}}\n\nSummarize the result for the user.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_builder() {
        let manifest = SkillManifest::new("test-skill", "1.0.0")
            .with_description("A test skill")
            .with_parameters(serde_json::json!({"q": {"type": "string"}}));

        assert_eq!(manifest.name, "test-skill");
        assert_eq!(manifest.description, "A test skill");
        assert!(manifest.prompt.is_none());
    }

    #[test]
    fn test_webhook_relay_manifest_round_trips() {
        let manifest = SkillManifest::webhook_relay();
        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: SkillManifest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, crate::NAME);
        assert!(parsed.parameters.get("query").is_some());
        assert!(parsed.prompt.is_some());
    }
}
