//! Request/response relay
//!
//! Performs exactly one outbound POST per invocation and reports its outcome.
//! Transport failures (connect refused, DNS, timeout, non-2xx status) are a
//! handled [`RelayOutcome::Failure`]; a 2xx response whose body is not valid
//! JSON stays an ordinary error, matching the template contract.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RelayConfig;
use crate::error::Result;
use crate::payload::WebhookRequest;

/// Outcome of a relay dispatch
///
/// Success and handled failure are both printable: the caller pattern-matches
/// (or uses [`RelayOutcome::into_value`]) to get the JSON value to emit.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The webhook answered with a JSON body
    Success(Value),
    /// The request failed at the transport level
    Failure(String),
}

impl RelayOutcome {
    /// Whether the dispatch reached the webhook and got a JSON body back
    pub fn is_success(&self) -> bool {
        matches!(self, RelayOutcome::Success(_))
    }

    /// The JSON value to print: the response itself, or `{"error": <message>}`
    pub fn into_value(self) -> Value {
        match self {
            RelayOutcome::Success(value) => value,
            RelayOutcome::Failure(message) => serde_json::json!({ "error": message }),
        }
    }
}

/// Relay client holding the configured HTTP client
pub struct WebhookRelay {
    client: Client,
    config: RelayConfig,
}

impl WebhookRelay {
    /// Create a new relay for the given configuration
    pub fn new(config: RelayConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(WebhookRelay { client, config })
    }

    /// The configured webhook endpoint
    pub fn webhook_url(&self) -> &str {
        self.config.webhook_url.as_str()
    }

    /// POST the query to the webhook and collect the outcome
    ///
    /// Sends `{"query": <query>}` with `Content-Type: application/json` and
    /// waits up to the configured timeout. No retries: one request per call.
    pub async fn dispatch(&self, query: &str) -> Result<RelayOutcome> {
        let request = WebhookRequest::new(query);

        debug!("Dispatching query to webhook: url={}", self.config.webhook_url);

        let response = match self
            .client
            .post(self.config.webhook_url.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Webhook request failed: {}", e);
                return Ok(RelayOutcome::Failure(e.to_string()));
            }
        };

        // Non-2xx is a transport failure, same handled class as a refused
        // connection or an expired timeout
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!("Webhook returned error status: {}", e);
                return Ok(RelayOutcome::Failure(e.to_string()));
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read webhook response body: {}", e);
                return Ok(RelayOutcome::Failure(e.to_string()));
            }
        };

        // A 2xx body that is not JSON is out of contract; propagate
        let value: Value = serde_json::from_str(&body)?;

        debug!("Webhook responded with JSON body ({} bytes)", body.len());

        Ok(RelayOutcome::Success(value))
    }
}
