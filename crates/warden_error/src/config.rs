//! Configuration error types.

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing required field");
    /// assert!(err.message.contains("Missing required"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a ConfigError for a missing environment variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_error::ConfigError;
    ///
    /// let err = ConfigError::missing_var("DISCORD_TOKEN");
    /// assert!(err.message.contains("DISCORD_TOKEN"));
    /// ```
    #[track_caller]
    pub fn missing_var(name: &str) -> Self {
        Self::new(format!("Environment variable {name} is not set"))
    }

    /// Create a ConfigError for an identifier that failed to parse as a
    /// Discord snowflake.
    #[track_caller]
    pub fn invalid_id(name: &str, value: &str) -> Self {
        Self::new(format!("{name} is not a valid Discord id: {value:?}"))
    }
}
