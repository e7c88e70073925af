//! Button actions routed by the bot.

/// Custom id carried by the verification panel's button.
pub const VERIFY_BUTTON_ID: &str = "verify_btn";

/// Custom id carried by the appeal panel's button.
pub const APPEAL_BUTTON_ID: &str = "appeal_btn";

/// The button presses Warden knows how to handle.
///
/// Any other custom id falls through untouched, so panels owned by other
/// bots or features keep working alongside Warden.
///
/// # Examples
///
/// ```
/// use warden_core::PanelAction;
///
/// assert_eq!(PanelAction::from_custom_id("verify_btn"), Some(PanelAction::Verify));
/// assert_eq!(PanelAction::from_custom_id("giveaway_btn"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PanelAction {
    /// Member asked to be verified.
    Verify,
    /// Member asked for their quarantine to be lifted.
    Appeal,
}

impl PanelAction {
    /// Parse a component custom id into an action, if Warden owns it.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            VERIFY_BUTTON_ID => Some(Self::Verify),
            APPEAL_BUTTON_ID => Some(Self::Appeal),
            _ => None,
        }
    }

    /// The custom id this action is dispatched on.
    pub fn custom_id(&self) -> &'static str {
        match self {
            Self::Verify => VERIFY_BUTTON_ID,
            Self::Appeal => APPEAL_BUTTON_ID,
        }
    }
}
