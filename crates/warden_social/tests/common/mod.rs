//! Test doubles for the chat gateway.

use async_trait::async_trait;
use serenity::model::id::{ChannelId, GuildId, RoleId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use warden_core::PanelConfig;
use warden_error::{GatewayError, GatewayErrorKind, GatewayResult};

/// One recorded role mutation, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCall {
    Add(RoleId),
    Remove(RoleId),
}

#[derive(Default)]
struct State {
    authors: HashMap<ChannelId, Vec<UserId>>,
    unreachable: HashSet<ChannelId>,
    posted: Vec<(ChannelId, PanelConfig)>,
    role_calls: Vec<RoleCall>,
    deny_roles: bool,
}

/// In-memory gateway recording every call the components make.
pub struct MockGateway {
    bot_user: UserId,
    state: Mutex<State>,
}

#[allow(dead_code)] // not every test file touches every knob
impl MockGateway {
    pub fn new(bot_user: UserId) -> Self {
        Self {
            bot_user,
            state: Mutex::new(State::default()),
        }
    }

    /// Seed a channel's recent message authors.
    pub fn with_authors(self, channel: ChannelId, authors: Vec<UserId>) -> Self {
        self.state.lock().unwrap().authors.insert(channel, authors);
        self
    }

    /// Make channel resolution fail for `channel`.
    pub fn with_unreachable(self, channel: ChannelId) -> Self {
        self.state.lock().unwrap().unreachable.insert(channel);
        self
    }

    /// Make every role mutation fail with a permission error.
    pub fn with_denied_roles(self) -> Self {
        self.state.lock().unwrap().deny_roles = true;
        self
    }

    pub fn posted(&self) -> Vec<(ChannelId, PanelConfig)> {
        self.state.lock().unwrap().posted.clone()
    }

    pub fn role_calls(&self) -> Vec<RoleCall> {
        self.state.lock().unwrap().role_calls.clone()
    }
}

#[async_trait]
impl warden_social::ChatGateway for MockGateway {
    async fn recent_author_ids(
        &self,
        channel: ChannelId,
        _limit: u8,
    ) -> GatewayResult<Vec<UserId>> {
        let state = self.state.lock().unwrap();
        if state.unreachable.contains(&channel) {
            return Err(GatewayError::new(GatewayErrorKind::ChannelUnavailable(
                channel.get(),
            )));
        }
        Ok(state.authors.get(&channel).cloned().unwrap_or_default())
    }

    async fn post_panel(&self, channel: ChannelId, panel: &PanelConfig) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.unreachable.contains(&channel) {
            return Err(GatewayError::new(GatewayErrorKind::MessageSendFailed(
                "channel unreachable".to_string(),
            )));
        }
        state.posted.push((channel, panel.clone()));
        // The posted panel becomes part of the channel's recent history.
        state.authors.entry(channel).or_default().push(self.bot_user);
        Ok(())
    }

    async fn add_role(&self, _guild: GuildId, _user: UserId, role: RoleId) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.deny_roles {
            return Err(GatewayError::new(GatewayErrorKind::RoleDenied(
                "Missing Permissions".to_string(),
            )));
        }
        state.role_calls.push(RoleCall::Add(role));
        Ok(())
    }

    async fn remove_role(&self, _guild: GuildId, _user: UserId, role: RoleId) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.deny_roles {
            return Err(GatewayError::new(GatewayErrorKind::RoleDenied(
                "Missing Permissions".to_string(),
            )));
        }
        state.role_calls.push(RoleCall::Remove(role));
        Ok(())
    }
}
