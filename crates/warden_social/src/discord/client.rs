//! Discord bot client setup and lifecycle management.

use super::WardenHandler;
use serenity::Client;
use tracing::{info, instrument};
use warden_core::WardenConfig;
use warden_error::{GatewayError, GatewayErrorKind, GatewayResult};

/// Main Discord client for Warden.
///
/// Owns the Serenity client; panel provisioning and interaction routing
/// run inside the registered [`WardenHandler`].
///
/// # Example
/// ```no_run
/// use warden_core::WardenConfig;
/// use warden_social::WardenBot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = WardenConfig::from_env()?;
///     let mut bot = WardenBot::new(config).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct WardenBot {
    client: Client,
}

impl WardenBot {
    /// Create a new bot instance from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the Serenity client fails to initialize, e.g.
    /// when the bot token is malformed.
    #[instrument(skip(config), fields(token_len = config.token.len()))]
    pub async fn new(config: WardenConfig) -> GatewayResult<Self> {
        let handler = WardenHandler::new(config.clone());
        let intents = WardenHandler::intents();
        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(&config.token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {e}"
                )))
            })?;

        Ok(Self { client })
    }

    /// Start the bot.
    ///
    /// Blocks until the bot is shut down.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal
    /// gateway error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> GatewayResult<()> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::ConnectionFailed(format!(
                "Client error: {e}"
            )))
        })
    }
}
