//! NetBox provider plugin binary
//!
//! Prints the handshake line, then serves lifecycle requests as JSON lines
//! on stdin/stdout. Logs go to stderr so they never mix with the protocol.

use netbox_provider::adapter;
use netbox_provider::provider::handshake_line;
use netbox_provider::{Provider, ProviderConfig};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting NetBox provider");

    // Load configuration from environment variables
    let config = ProviderConfig::from_env()?;
    info!("Configuration:");
    info!("  NetBox URL: {}", config.url);
    info!("  Timeout: {}s", config.timeout_secs);

    let provider = Provider::configure(&config).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{}\n", handshake_line()).as_bytes()).await?;
    stdout.flush().await?;

    adapter::serve(&provider, BufReader::new(tokio::io::stdin()), stdout).await?;

    info!("NetBox provider stopped");
    Ok(())
}
