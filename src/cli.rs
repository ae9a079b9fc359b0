//! Command-line interface definition for Foliochat
//!
//! This module defines the CLI structure using clap's derive API, providing
//! commands for running the chat proxy, chatting from the terminal, and
//! inspecting the assembled system prompt.

use clap::{Parser, Subcommand};

/// Foliochat - portfolio assistant chat proxy and terminal chat client
#[derive(Parser, Debug, Clone)]
#[command(name = "foliochat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Foliochat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the chat proxy server
    Serve {
        /// Override the bind host from config
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port from config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat with the portfolio assistant from the terminal
    Chat {
        /// Override the proxy URL from config
        #[arg(short = 'u', long)]
        proxy_url: Option<String>,
    },

    /// Print the assembled system prompt and exit
    Prompt,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
