//! Foliochat - portfolio assistant chat proxy
//!
//! Main entry point for the Foliochat binary.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use foliochat::cli::{Cli, Commands};
use foliochat::commands;
use foliochat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load and validate configuration
    let config = Config::load(&cli.config)?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!("Starting chat proxy");
            commands::serve::run_serve(config, host, port).await?;
            Ok(())
        }
        Commands::Chat { proxy_url } => {
            tracing::info!("Starting terminal chat");
            commands::chat::run_chat(config, proxy_url).await?;
            Ok(())
        }
        Commands::Prompt => {
            commands::prompt::run_prompt()?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "foliochat=debug"
    } else {
        "foliochat=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
