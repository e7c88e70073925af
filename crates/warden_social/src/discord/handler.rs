//! Gateway event handler.

use super::SerenityGateway;
use crate::{ButtonPress, InteractionRouter, PanelProvisioner, RoleIds};
use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::{Context, EventHandler};
use serenity::model::application::Interaction;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::ChannelId;
use tracing::{info, warn};
use warden_core::{WardenConfig, appeal_panel, verify_panel};

/// Serenity event handler for Warden.
///
/// Holds the loaded configuration and builds a fresh
/// [`SerenityGateway`] per event from the context's HTTP handle; no state
/// is shared between concurrent interaction dispatches.
pub struct WardenHandler {
    config: WardenConfig,
}

impl WardenHandler {
    /// Create a handler for the given configuration.
    pub fn new(config: WardenConfig) -> Self {
        Self { config }
    }

    /// Gateway intents required by the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

#[async_trait]
impl EventHandler for WardenHandler {
    /// Called when the bot successfully connects to Discord.
    ///
    /// Provisioning runs here because the duplicate check needs the bot's
    /// own user id, which is first known at READY.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            "Bot connected to Discord"
        );

        let provisioner =
            PanelProvisioner::new(SerenityGateway::new(ctx.http.clone()), ready.user.id);
        let targets = [
            (ChannelId::new(self.config.channels.verify), verify_panel()),
            (ChannelId::new(self.config.channels.appeals), appeal_panel()),
        ];
        provisioner.provision_all(&targets).await;
    }

    /// Called for every incoming interaction.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        // Only component (button) interactions are ours; slash commands,
        // modals and autocompletes fall through.
        let Interaction::Component(component) = interaction else {
            return;
        };
        // Panels live in guild channels, so a press always carries a member.
        let (Some(guild_id), Some(member)) = (component.guild_id, component.member.as_ref())
        else {
            return;
        };

        let press = ButtonPress {
            custom_id: component.data.custom_id.clone(),
            guild_id,
            user_id: member.user.id,
            roles: member.roles.clone(),
        };

        let router = InteractionRouter::new(
            SerenityGateway::new(ctx.http.clone()),
            RoleIds::from(&self.config.roles),
        );
        let Some(reply) = router.handle_press(&press).await else {
            return;
        };

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(reply.to_string())
                .ephemeral(true),
        );
        if let Err(e) = component.create_response(&ctx.http, response).await {
            warn!(user = press.user_id.get(), "failed to deliver reply: {e}");
        }
    }
}
