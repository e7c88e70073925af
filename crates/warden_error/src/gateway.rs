//! Chat gateway error types.
//!
//! Errors raised at the boundary with the Discord API: channel and message
//! lookups, panel posting, role mutation and interaction replies.

/// Gateway error variants.
///
/// Represents the error conditions that can occur while talking to the
/// Discord API on behalf of the provisioner or the interaction router.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// Channel could not be resolved (bot absent from guild, channel
    /// deleted, or read access denied).
    #[display("Channel unavailable: {_0}")]
    ChannelUnavailable(u64),

    /// Recent message history could not be fetched.
    #[display("Message fetch failed: {_0}")]
    MessageFetchFailed(String),

    /// Panel message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Role mutation denied by permissions or role hierarchy.
    #[display("Role mutation denied: {_0}")]
    RoleDenied(String),

    /// Interaction reply could not be delivered.
    #[display("Interaction reply failed: {_0}")]
    ReplyFailed(String),

    /// Connection to the Discord gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,

    /// Any other Discord API error.
    #[display("Discord API error: {_0}")]
    Api(String),
}

/// Gateway error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
///
/// # Examples
///
/// ```
/// use warden_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::ChannelUnavailable(42));
/// assert!(format!("{}", err).contains("Channel unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The error variant
    pub kind: GatewayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

// Convenience From implementations for external error types
#[cfg(feature = "serenity")]
impl From<serenity::Error> for GatewayError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        GatewayError::new(GatewayErrorKind::Api(err.to_string()))
    }
}
