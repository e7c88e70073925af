//! `ChatGateway` implementation over Serenity's HTTP client.

use crate::ChatGateway;
use async_trait::async_trait;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateMessage, GetMessages,
};
use serenity::http::Http;
use serenity::model::application::ButtonStyle;
use serenity::model::id::{ChannelId, GuildId, RoleId, UserId};
use std::sync::Arc;
use warden_core::{PanelButtonStyle, PanelConfig};
use warden_error::{GatewayError, GatewayErrorKind, GatewayResult};

/// Production gateway backed by Serenity's HTTP client.
///
/// Cheap to clone per event; every instance shares the one `Http` pool the
/// client was built with.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    /// Wrap the client's HTTP handle.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

fn button_style(style: PanelButtonStyle) -> ButtonStyle {
    match style {
        PanelButtonStyle::Primary => ButtonStyle::Primary,
        PanelButtonStyle::Secondary => ButtonStyle::Secondary,
        PanelButtonStyle::Success => ButtonStyle::Success,
        PanelButtonStyle::Danger => ButtonStyle::Danger,
    }
}

#[async_trait]
impl ChatGateway for SerenityGateway {
    async fn recent_author_ids(
        &self,
        channel: ChannelId,
        limit: u8,
    ) -> GatewayResult<Vec<UserId>> {
        // Resolve the channel first so an absent guild or deleted channel
        // surfaces as ChannelUnavailable rather than a fetch failure.
        self.http.get_channel(channel).await.map_err(|_| {
            GatewayError::new(GatewayErrorKind::ChannelUnavailable(channel.get()))
        })?;

        let messages = channel
            .messages(&self.http, GetMessages::new().limit(limit))
            .await
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::MessageFetchFailed(e.to_string()))
            })?;

        Ok(messages.iter().map(|m| m.author.id).collect())
    }

    async fn post_panel(&self, channel: ChannelId, panel: &PanelConfig) -> GatewayResult<()> {
        let embed = CreateEmbed::new()
            .title(&panel.title)
            .description(&panel.description)
            .color(panel.color);

        let button = CreateButton::new(&panel.button_id)
            .label(&panel.button_label)
            .style(button_style(panel.button_style));

        let message = CreateMessage::new()
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(vec![button])]);

        channel
            .send_message(&self.http, message)
            .await
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::MessageSendFailed(e.to_string()))
            })?;

        Ok(())
    }

    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> GatewayResult<()> {
        self.http
            .add_member_role(guild, user, role, None)
            .await
            .map_err(|e| GatewayError::new(GatewayErrorKind::RoleDenied(e.to_string())))
    }

    async fn remove_role(&self, guild: GuildId, user: UserId, role: RoleId) -> GatewayResult<()> {
        self.http
            .remove_member_role(guild, user, role, None)
            .await
            .map_err(|e| GatewayError::new(GatewayErrorKind::RoleDenied(e.to_string())))
    }
}
