//! # webhook-relay
//!
//! An example integration skill for agent hosts: reads a JSON payload from
//! standard input, forwards its query to a configured webhook as a JSON
//! POST, and prints the JSON (or error) response to standard output.
//!
//! ## Contract
//!
//! - **stdin**: one JSON object, `{"input"?: string, "query"?: string}`
//! - **stdout**: one JSON line — the webhook's response, or
//!   `{"error": "<description>"}` on a transport failure
//! - **exit code**: 0 for both success and handled failure; malformed stdin
//!   and non-JSON response bodies abort with a non-zero exit
//!
//! This crate is a template meant to be copied and edited per deployment.

pub mod config;
pub mod error;
pub mod manifest;
pub mod payload;
pub mod relay;

pub use config::RelayConfig;
pub use error::{Error, Result};
pub use manifest::SkillManifest;
pub use payload::{SkillInput, WebhookRequest};
pub use relay::{RelayOutcome, WebhookRelay};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
