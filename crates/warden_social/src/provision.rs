//! Idempotent panel provisioning.

use crate::ChatGateway;
use serenity::model::id::{ChannelId, UserId};
use tracing::{info, instrument, warn};
use warden_core::PanelConfig;
use warden_error::GatewayResult;

/// How many recent messages to inspect for an existing panel.
///
/// The duplicate check is best-effort: a panel older than the newest
/// `PANEL_SCAN_LIMIT` messages goes undetected and a second panel gets
/// posted. Panel channels are read-only for members in practice, so the
/// window is not expected to scroll.
pub const PANEL_SCAN_LIMIT: u8 = 10;

/// What [`PanelProvisioner::ensure_panel`] did to the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ProvisionOutcome {
    /// No bot-authored message found; a fresh panel was posted.
    Posted,
    /// A bot-authored message already sits in the recent history.
    AlreadyPresent,
}

/// Posts panel messages into their channels exactly once.
///
/// Constructed after the READY event, when the bot's own user id is known;
/// that id is what the duplicate check matches message authors against.
pub struct PanelProvisioner<G> {
    gateway: G,
    bot_user: UserId,
}

impl<G: ChatGateway> PanelProvisioner<G> {
    /// Create a provisioner that recognizes `bot_user` as its own identity.
    pub fn new(gateway: G, bot_user: UserId) -> Self {
        Self { gateway, bot_user }
    }

    /// Ensure `channel` holds a panel, posting one if none is found.
    ///
    /// # Errors
    /// Returns an error if the channel cannot be resolved, its history
    /// cannot be read, or the panel message fails to send.
    #[instrument(skip(self, panel), fields(channel = channel.get(), button = %panel.button_id))]
    pub async fn ensure_panel(
        &self,
        channel: ChannelId,
        panel: &PanelConfig,
    ) -> GatewayResult<ProvisionOutcome> {
        let authors = self
            .gateway
            .recent_author_ids(channel, PANEL_SCAN_LIMIT)
            .await?;

        if authors.contains(&self.bot_user) {
            return Ok(ProvisionOutcome::AlreadyPresent);
        }

        self.gateway.post_panel(channel, panel).await?;
        Ok(ProvisionOutcome::Posted)
    }

    /// Provision every configured panel, skipping unreachable channels.
    ///
    /// A failure on one channel is logged at WARN and never prevents the
    /// remaining panels from being provisioned; startup must survive a
    /// deleted channel or a guild the bot was kicked from.
    pub async fn provision_all(&self, targets: &[(ChannelId, PanelConfig)]) {
        for (channel, panel) in targets {
            match self.ensure_panel(*channel, panel).await {
                Ok(outcome) => {
                    info!(channel = channel.get(), %outcome, "panel provisioned");
                }
                Err(e) => {
                    warn!(channel = channel.get(), "skipping panel channel: {e}");
                }
            }
        }
    }
}
