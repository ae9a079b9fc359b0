//! Command handlers for the Foliochat CLI
//!
//! One module per subcommand: `serve` runs the chat proxy, `chat` drives the
//! widget from a readline loop, and `prompt` prints the assembled system
//! prompt for inspection.

pub mod chat;
pub mod prompt;
pub mod serve;
