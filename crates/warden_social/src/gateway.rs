//! The platform boundary.

use async_trait::async_trait;
use serenity::model::id::{ChannelId, GuildId, RoleId, UserId};
use warden_core::PanelConfig;
use warden_error::GatewayResult;

/// The Discord API surface Warden depends on.
///
/// Both the panel provisioner and the interaction router take a gateway by
/// value at construction rather than reaching for a global client, so tests
/// can substitute a recording mock and production code passes a
/// [`SerenityGateway`](crate::SerenityGateway).
///
/// Implementations are expected to perform one network round-trip per call
/// and surface every failure as a [`GatewayError`](warden_error::GatewayError);
/// retries and rate-limit pacing are left to the underlying client library.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Author ids of the most recent `limit` messages in `channel`,
    /// newest first.
    async fn recent_author_ids(
        &self,
        channel: ChannelId,
        limit: u8,
    ) -> GatewayResult<Vec<UserId>>;

    /// Post a panel message (embed plus one button) into `channel`.
    async fn post_panel(&self, channel: ChannelId, panel: &PanelConfig) -> GatewayResult<()>;

    /// Grant `role` to `user` in `guild`.
    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> GatewayResult<()>;

    /// Revoke `role` from `user` in `guild`.
    async fn remove_role(&self, guild: GuildId, user: UserId, role: RoleId) -> GatewayResult<()>;
}

// Shared gateways delegate through the Arc, letting callers keep a handle
// to the same instance the components consume.
#[async_trait]
impl<T: ChatGateway> ChatGateway for std::sync::Arc<T> {
    async fn recent_author_ids(
        &self,
        channel: ChannelId,
        limit: u8,
    ) -> GatewayResult<Vec<UserId>> {
        (**self).recent_author_ids(channel, limit).await
    }

    async fn post_panel(&self, channel: ChannelId, panel: &PanelConfig) -> GatewayResult<()> {
        (**self).post_panel(channel, panel).await
    }

    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> GatewayResult<()> {
        (**self).add_role(guild, user, role).await
    }

    async fn remove_role(&self, guild: GuildId, user: UserId, role: RoleId) -> GatewayResult<()> {
        (**self).remove_role(guild, user, role).await
    }
}
