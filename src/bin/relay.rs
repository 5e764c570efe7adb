//! Webhook relay skill entry point
//!
//! Reads one JSON object from stdin, forwards its query to the configured
//! webhook, and prints the JSON (or error) response as a single stdout line.
//! All logging goes to stderr so stdout carries nothing but the result.

use std::io::Read;

use clap::Parser;
use webhook_relay::config::DEFAULT_TIMEOUT_SECS;
use webhook_relay::{RelayConfig, Result, SkillInput, SkillManifest, WebhookRelay, VERSION};

use tracing::debug;

#[derive(Parser)]
#[command(
    name = "webhook-relay",
    version = VERSION,
    about = "Forward a stdin query to a webhook and print the JSON response",
    long_about = None
)]
struct Cli {
    /// Webhook endpoint URL
    #[arg(long, env = "WEBHOOK_URL")]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "WEBHOOK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print the skill manifest as JSON and exit
    #[arg(long)]
    manifest: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging goes to stderr; stdout is reserved for the result JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.manifest {
        println!("{}", serde_json::to_string(&SkillManifest::webhook_relay())?);
        return Ok(());
    }

    let config = match cli.url {
        Some(ref url) => RelayConfig::new(url)?,
        None => RelayConfig::from_env()?,
    }
    .with_timeout(cli.timeout_secs);

    if let Some(ref workspace) = config.workspace {
        debug!("Host workspace hint: {}", workspace.display());
    }

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;

    // Malformed stdin aborts with a non-zero exit, per the skill contract
    let input = SkillInput::from_json(&raw)?;

    let relay = WebhookRelay::new(config)?;
    let outcome = relay.dispatch(input.effective_query()).await?;

    println!("{}", serde_json::to_string(&outcome.into_value())?);

    Ok(())
}
