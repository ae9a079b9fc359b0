//! Chat proxy HTTP server
//!
//! This module wires the chat handler into an axum router and runs it. Each
//! inbound request is handled independently: the handler assembles its own
//! system prompt and makes at most one provider call, so there is no shared
//! mutable state across requests.

pub mod handler;

use crate::config::Config;
use crate::error::Result;
use crate::profile::Profile;
use crate::providers::{CompletionProvider, TogetherProvider};

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Shared, immutable state handed to every request
#[derive(Clone)]
pub struct AppState {
    /// Completion provider the proxy forwards to
    pub provider: Arc<dyn CompletionProvider>,
    /// Curated facts for the system prompt
    pub profile: Arc<Profile>,
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the shared state
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        profile: Arc<Profile>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            provider,
            profile,
            config,
        }
    }
}

/// Build the proxy router
///
/// `POST /api/chat` is the single write endpoint; any other method on that
/// path is answered with 405 before any provider call is made. `GET /healthz`
/// is a liveness probe.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(crate::api::CHAT_PATH, post(handler::handle_chat))
        .route("/healthz", get(handler::healthz))
        .with_state(state)
}

/// Run the chat proxy until shutdown
///
/// # Arguments
///
/// * `config` - Validated configuration
///
/// # Errors
///
/// Returns error if provider construction, binding, or serving fails
pub async fn serve(config: Config) -> Result<()> {
    let provider = Arc::new(TogetherProvider::new(config.provider.clone())?);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(provider, Arc::new(Profile::default()), Arc::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Chat proxy listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
