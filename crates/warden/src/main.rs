//! Warden bot binary.
//!
//! Loads configuration, initializes tracing and runs the Discord client
//! until shutdown. Configuration comes from the environment (optionally
//! seeded by a local `.env` file), or from a TOML file when
//! `WARDEN_CONFIG` points at one.

use tracing::info;
use tracing_subscriber::EnvFilter;
use warden_core::WardenConfig;
use warden_social::WardenBot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // RUST_LOG overrides the default info level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::var("WARDEN_CONFIG") {
        Ok(path) => WardenConfig::from_file(path)?,
        Err(_) => WardenConfig::from_env()?,
    };

    let mut bot = WardenBot::new(config).await?;
    info!("Connecting to Discord");
    bot.start().await?;

    Ok(())
}
