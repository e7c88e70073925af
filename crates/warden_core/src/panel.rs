//! Panel definitions.
//!
//! A panel is a single message posted into a fixed channel: one embed
//! (title, description, accent color) plus one action row holding one
//! button. Panels act as persistent UI entry points; pressing the button
//! produces a component interaction routed by the bot.

use crate::{APPEAL_BUTTON_ID, VERIFY_BUTTON_ID};
use serde::{Deserialize, Serialize};

/// Visual style of a panel button.
///
/// Mirrors the Discord button styles that make sense for a panel; link
/// buttons carry a URL instead of a custom id and are deliberately absent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PanelButtonStyle {
    /// Blurple call-to-action button.
    Primary,
    /// Grey neutral button.
    Secondary,
    /// Green confirmation button.
    Success,
    /// Red destructive button.
    Danger,
}

/// Static description of one panel message.
///
/// Built once at startup and passed by reference into the provisioner;
/// nothing mutates a panel after construction.
///
/// # Examples
///
/// ```
/// use warden_core::verify_panel;
///
/// let panel = verify_panel();
/// assert_eq!(panel.button_id, "verify_btn");
/// assert_eq!(panel.color, 0x2ecc71);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Embed title.
    pub title: String,
    /// Embed description shown under the title.
    pub description: String,
    /// Label rendered on the button.
    pub button_label: String,
    /// Custom id the button press is dispatched on.
    pub button_id: String,
    /// Visual style of the button.
    pub button_style: PanelButtonStyle,
    /// Embed accent color.
    pub color: u32,
}

/// The verification panel posted into the verify channel.
pub fn verify_panel() -> PanelConfig {
    PanelConfig {
        title: "🔒 Server Verification".to_string(),
        description: "Click the button below to verify and gain access.".to_string(),
        button_label: "Verify ✅".to_string(),
        button_id: VERIFY_BUTTON_ID.to_string(),
        button_style: PanelButtonStyle::Success,
        color: 0x2ecc71,
    }
}

/// The quarantine-appeal panel posted into the appeals channel.
pub fn appeal_panel() -> PanelConfig {
    PanelConfig {
        title: "📝 Quarantine Appeal Portal".to_string(),
        description: "Click below to appeal your quarantine status.".to_string(),
        button_label: "Appeal".to_string(),
        button_id: APPEAL_BUTTON_ID.to_string(),
        button_style: PanelButtonStyle::Primary,
        color: 0x5865f2,
    }
}
