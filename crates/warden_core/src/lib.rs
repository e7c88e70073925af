//! Core data types for the Warden Discord bot.
//!
//! This crate provides the platform-independent pieces of Warden: panel
//! definitions, button action identifiers, and the runtime configuration
//! surface. Nothing here touches the Discord API directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod config;
mod panel;

pub use action::{APPEAL_BUTTON_ID, PanelAction, VERIFY_BUTTON_ID};
pub use config::{ChannelConfig, RoleConfig, WardenConfig};
pub use panel::{PanelButtonStyle, PanelConfig, appeal_panel, verify_panel};
