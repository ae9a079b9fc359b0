//! Serve command handler

use crate::config::Config;
use crate::error::Result;

/// Run the chat proxy server
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `host` - Optional bind host override
/// * `port` - Optional bind port override
pub async fn run_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        tracing::debug!("Using host override: {}", host);
        config.server.host = host;
    }
    if let Some(port) = port {
        tracing::debug!("Using port override: {}", port);
        config.server.port = port;
    }

    crate::server::serve(config).await
}
