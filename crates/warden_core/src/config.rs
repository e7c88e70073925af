//! Runtime configuration for the bot.
//!
//! Warden needs one secret (the bot token) and five Discord snowflake ids:
//! the two panel channels and the three roles it manages. These were
//! hard-coded constants in earlier deployments; they now load from the
//! environment or from a TOML file so a deployment can retarget the bot
//! without rebuilding it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use warden_error::{ConfigError, WardenResult};

/// Channels that receive a panel at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel receiving the verification panel.
    pub verify: u64,
    /// Channel receiving the quarantine-appeal panel.
    pub appeals: u64,
}

/// Roles the bot grants and revokes.
///
/// Every other role in the guild is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Granted when a member presses the verify button.
    pub verified: u64,
    /// Removed after verification if the member still holds it.
    pub unverified: u64,
    /// Removed when a quarantined member's appeal goes through.
    pub quarantine: u64,
}

/// Full configuration surface for one bot process.
///
/// # Examples
///
/// ```
/// use warden_core::WardenConfig;
///
/// let config: WardenConfig = toml::from_str(r#"
///     token = "example-token"
///
///     [channels]
///     verify = 1456710533419110564
///     appeals = 1434689294198505552
///
///     [roles]
///     verified = 1457777097127759953
///     unverified = 1457781588640403497
///     quarantine = 1459277459571867720
/// "#).unwrap();
///
/// assert_eq!(config.channels.verify, 1456710533419110564);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardenConfig {
    /// Discord bot token from the developer portal.
    pub token: String,
    /// Panel target channels.
    pub channels: ChannelConfig,
    /// Managed roles.
    pub roles: RoleConfig,
}

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const VERIFY_CHANNEL_VAR: &str = "VERIFY_CHANNEL_ID";
const APPEALS_CHANNEL_VAR: &str = "APPEALS_CHANNEL_ID";
const VERIFIED_ROLE_VAR: &str = "VERIFIED_ROLE_ID";
const UNVERIFIED_ROLE_VAR: &str = "UNVERIFIED_ROLE_ID";
const QUARANTINE_ROLE_VAR: &str = "QUARANTINE_ROLE_ID";

impl WardenConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> WardenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured snowflake is nonzero.
    ///
    /// Discord never issues a zero id, and the id wrappers downstream
    /// panic on zero, so a zero here must fail at load time rather than
    /// inside an event handler.
    fn validate(&self) -> WardenResult<()> {
        let ids = [
            ("channels.verify", self.channels.verify),
            ("channels.appeals", self.channels.appeals),
            ("roles.verified", self.roles.verified),
            ("roles.unverified", self.roles.unverified),
            ("roles.quarantine", self.roles.quarantine),
        ];
        for (name, value) in ids {
            if value == 0 {
                Err(ConfigError::invalid_id(name, "0"))?;
            }
        }
        Ok(())
    }

    /// Load configuration from the process environment.
    ///
    /// Expects `DISCORD_TOKEN` plus the five `*_ID` variables; call
    /// `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> WardenResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Split out from [`WardenConfig::from_env`] so tests can exercise the
    /// parsing without mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> WardenResult<Self> {
        let var = |name: &'static str| -> WardenResult<String> {
            lookup(name).ok_or_else(|| ConfigError::missing_var(name).into())
        };
        let id = |name: &'static str| -> WardenResult<u64> {
            let raw = var(name)?;
            let value = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid_id(name, &raw))?;
            // Zero never denotes a real channel or role.
            if value == 0 {
                Err(ConfigError::invalid_id(name, &raw))?;
            }
            Ok(value)
        };

        Ok(Self {
            token: var(TOKEN_VAR)?,
            channels: ChannelConfig {
                verify: id(VERIFY_CHANNEL_VAR)?,
                appeals: id(APPEALS_CHANNEL_VAR)?,
            },
            roles: RoleConfig {
                verified: id(VERIFIED_ROLE_VAR)?,
                unverified: id(UNVERIFIED_ROLE_VAR)?,
                quarantine: id(QUARANTINE_ROLE_VAR)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DISCORD_TOKEN", "sekrit"),
            ("VERIFY_CHANNEL_ID", "100"),
            ("APPEALS_CHANNEL_ID", "200"),
            ("VERIFIED_ROLE_ID", "300"),
            ("UNVERIFIED_ROLE_ID", "400"),
            ("QUARANTINE_ROLE_ID", "500"),
        ])
    }

    fn lookup_in(
        env: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> {
        move |name| env.get(name).map(|v| v.to_string())
    }

    #[test]
    fn loads_from_complete_environment() {
        let config = WardenConfig::from_lookup(lookup_in(full_env())).unwrap();
        assert_eq!(config.token, "sekrit");
        assert_eq!(config.channels.verify, 100);
        assert_eq!(config.channels.appeals, 200);
        assert_eq!(config.roles.verified, 300);
        assert_eq!(config.roles.unverified, 400);
        assert_eq!(config.roles.quarantine, 500);
    }

    #[test]
    fn missing_token_is_reported_by_name() {
        let mut env = full_env();
        env.remove("DISCORD_TOKEN");
        let err = WardenConfig::from_lookup(lookup_in(env)).unwrap_err();
        assert!(format!("{err}").contains("DISCORD_TOKEN"));
    }

    #[test]
    fn malformed_snowflake_is_rejected() {
        let mut env = full_env();
        env.insert("VERIFIED_ROLE_ID", "not-a-number");
        let err = WardenConfig::from_lookup(lookup_in(env)).unwrap_err();
        assert!(format!("{err}").contains("VERIFIED_ROLE_ID"));
    }

    #[test]
    fn zero_snowflake_is_rejected() {
        let mut env = full_env();
        env.insert("VERIFY_CHANNEL_ID", "0");
        let err = WardenConfig::from_lookup(lookup_in(env)).unwrap_err();
        assert!(format!("{err}").contains("VERIFY_CHANNEL_ID"));
    }

    #[test]
    fn zero_snowflake_in_toml_is_rejected() {
        let config: WardenConfig = toml::from_str(
            r#"
            token = "sekrit"

            [channels]
            verify = 100
            appeals = 200

            [roles]
            verified = 300
            unverified = 400
            quarantine = 0
        "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("roles.quarantine"));
    }

    #[test]
    fn snowflakes_tolerate_surrounding_whitespace() {
        let mut env = full_env();
        env.insert("QUARANTINE_ROLE_ID", " 500\n");
        let config = WardenConfig::from_lookup(lookup_in(env)).unwrap();
        assert_eq!(config.roles.quarantine, 500);
    }

    #[test]
    fn toml_round_trip() {
        let config = WardenConfig::from_lookup(lookup_in(full_env())).unwrap();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: WardenConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
