//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError};

/// This is the foundation error enum for the Warden workspace.
///
/// # Examples
///
/// ```
/// use warden_error::{ConfigError, WardenError};
///
/// let config_err = ConfigError::new("Missing DISCORD_TOKEN");
/// let err: WardenError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WardenErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Discord gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
}

/// Warden error with kind discrimination.
///
/// # Examples
///
/// ```
/// use warden_error::{ConfigError, WardenResult};
///
/// fn might_fail() -> WardenResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Warden Error: {}", _0)]
pub struct WardenError(Box<WardenErrorKind>);

impl WardenError {
    /// Create a new error from a kind.
    pub fn new(kind: WardenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WardenErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to WardenErrorKind
impl<T> From<T> for WardenError
where
    T: Into<WardenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Warden operations.
///
/// # Examples
///
/// ```
/// use warden_error::{ConfigError, WardenResult};
///
/// fn load_config() -> WardenResult<String> {
///     Err(ConfigError::new("config file not found"))?
/// }
/// ```
pub type WardenResult<T> = std::result::Result<T, WardenError>;
