//! Serenity-backed Discord plumbing.
//!
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: event handler bridging READY and component interactions
//!   into the provisioner and router
//! - **gateway**: [`ChatGateway`](crate::ChatGateway) implementation over
//!   Serenity's HTTP client

mod client;
mod gateway;
mod handler;

pub use client::WardenBot;
pub use gateway::SerenityGateway;
pub use handler::WardenHandler;
