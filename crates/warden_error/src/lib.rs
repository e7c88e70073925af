//! Error types for the Warden Discord bot.
//!
//! This crate provides the foundation error types used throughout the Warden
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use warden_error::{ConfigError, WardenResult};
//!
//! fn load_token() -> WardenResult<String> {
//!     Err(ConfigError::new("DISCORD_TOKEN is not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got token of length {}", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gateway;

pub use config::ConfigError;
pub use error::{WardenError, WardenErrorKind, WardenResult};
pub use gateway::{GatewayError, GatewayErrorKind, GatewayResult};
