//! Button-press routing.
//!
//! One terminal step per interaction: a press either mutates the pressing
//! member's roles and acknowledges, or rejects, or reports a generic
//! permission failure. Every handled press produces exactly one reply.

use crate::ChatGateway;
use serenity::model::id::{GuildId, RoleId, UserId};
use tracing::error;
use warden_core::{PanelAction, RoleConfig};
use warden_error::GatewayResult;

/// The managed roles, resolved to Serenity ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleIds {
    /// Granted on verify.
    pub verified: RoleId,
    /// Removed after verify when still held.
    pub unverified: RoleId,
    /// Removed on a successful appeal.
    pub quarantine: RoleId,
}

impl From<&RoleConfig> for RoleIds {
    fn from(roles: &RoleConfig) -> Self {
        Self {
            verified: RoleId::new(roles.verified),
            unverified: RoleId::new(roles.unverified),
            quarantine: RoleId::new(roles.quarantine),
        }
    }
}

/// One button press, extracted from a component interaction.
///
/// `roles` is the member's role snapshot at interaction time; conditional
/// removals consult this snapshot, not a re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPress {
    /// Custom id of the pressed button.
    pub custom_id: String,
    /// Guild the press happened in.
    pub guild_id: GuildId,
    /// The pressing member.
    pub user_id: UserId,
    /// Role snapshot of the pressing member.
    pub roles: Vec<RoleId>,
}

/// The ephemeral acknowledgment sent back to the presser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Reply {
    /// Verification succeeded.
    #[display("✅ Verified!")]
    Verified,
    /// Appeal succeeded; the quarantine role is gone.
    #[display("✅ Quarantine role removed!")]
    QuarantineLifted,
    /// Appeal rejected; the presser was never quarantined.
    #[display("❌ You are not quarantined.")]
    NotQuarantined,
    /// A role mutation was denied by permissions or hierarchy.
    #[display("❌ I cannot manage your roles. Check my hierarchy!")]
    RolesUnmanageable,
}

/// Routes button presses into role mutations.
pub struct InteractionRouter<G> {
    gateway: G,
    roles: RoleIds,
}

impl<G: ChatGateway> InteractionRouter<G> {
    /// Create a router that manages the given roles through `gateway`.
    pub fn new(gateway: G, roles: RoleIds) -> Self {
        Self { gateway, roles }
    }

    /// Handle one button press.
    ///
    /// Returns `None` for custom ids Warden does not own; those fall
    /// through to whichever collaborator posted the component. For owned
    /// ids the router always returns a reply: gateway failures are caught
    /// here and collapse into [`Reply::RolesUnmanageable`] so the presser
    /// is never left without an acknowledgment.
    pub async fn handle_press(&self, press: &ButtonPress) -> Option<Reply> {
        let action = PanelAction::from_custom_id(&press.custom_id)?;

        match self.dispatch(action, press).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(user = press.user_id.get(), %action, "role mutation failed: {e}");
                Some(Reply::RolesUnmanageable)
            }
        }
    }

    async fn dispatch(&self, action: PanelAction, press: &ButtonPress) -> GatewayResult<Reply> {
        match action {
            PanelAction::Verify => {
                // Grant first; the unverified removal is conditioned on the
                // snapshot, not a precondition of the grant.
                self.gateway
                    .add_role(press.guild_id, press.user_id, self.roles.verified)
                    .await?;
                if press.roles.contains(&self.roles.unverified) {
                    self.gateway
                        .remove_role(press.guild_id, press.user_id, self.roles.unverified)
                        .await?;
                }
                Ok(Reply::Verified)
            }
            PanelAction::Appeal => {
                if !press.roles.contains(&self.roles.quarantine) {
                    return Ok(Reply::NotQuarantined);
                }
                self.gateway
                    .remove_role(press.guild_id, press.user_id, self.roles.quarantine)
                    .await?;
                Ok(Reply::QuarantineLifted)
            }
        }
    }
}
