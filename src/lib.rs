//! Foliochat - portfolio assistant chat pipeline
//!
//! This library implements the chat pipeline behind a personal portfolio
//! site: a server-side proxy that injects a curated biographical system
//! prompt and forwards conversation transcripts to an external completion
//! provider, and a client-side widget state machine with its transport.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: wire types shared by the widget and the proxy
//! - `widget`: client-side session state machine and HTTP transport
//! - `server`: axum router and chat request handler
//! - `providers`: completion provider abstraction and Together implementation
//! - `prompts`: system prompt assembly from the curated profile
//! - `profile`: curated portfolio facts
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use foliochat::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml")?;
//!     config.validate()?;
//!     foliochat::server::serve(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod profile;
pub mod prompts;
pub mod providers;
pub mod server;
pub mod widget;

// Re-export commonly used types
pub use api::{ChatRequest, ChatResponse};
pub use config::Config;
pub use error::{Result, FoliochatError};
pub use widget::ChatWidget;

#[cfg(test)]
pub mod test_utils;
