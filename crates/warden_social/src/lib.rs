//! Discord integration for Warden.
//!
//! This crate wires Warden's two responsibilities to Discord using the
//! Serenity library:
//! - Post the verification and quarantine-appeal panels into their
//!   configured channels at startup, without duplicating them on restart
//! - Route button presses on those panels into role mutations on the
//!   pressing member, answering each press with exactly one ephemeral reply
//!
//! # Architecture
//!
//! The platform boundary is the [`ChatGateway`] trait: the handful of
//! Discord API calls the bot depends on (recent message authors, panel
//! posting, role add/remove). [`PanelProvisioner`] and
//! [`InteractionRouter`] are written against the trait, so their behavior
//! is testable without a live gateway connection; [`SerenityGateway`] is
//! the production implementation over Serenity's HTTP client.
//!
//! [`WardenBot`] owns the Serenity client and [`WardenHandler`] bridges
//! gateway events (READY, interaction dispatch) into the two components.
//!
//! # Usage
//!
//! ```rust,ignore
//! use warden_core::WardenConfig;
//! use warden_social::WardenBot;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WardenConfig::from_env()?;
//!     let mut bot = WardenBot::new(config).await?;
//!     bot.start().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod discord;
mod gateway;
mod provision;
mod router;

pub use discord::{SerenityGateway, WardenBot, WardenHandler};
pub use gateway::ChatGateway;
pub use provision::{PANEL_SCAN_LIMIT, PanelProvisioner, ProvisionOutcome};
pub use router::{ButtonPress, InteractionRouter, Reply, RoleIds};
