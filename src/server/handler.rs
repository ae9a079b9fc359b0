//! Chat request handler
//!
//! Implements the proxy contract: lenient body parsing, defensive filtering
//! of malformed message entries, system prompt injection, one provider call
//! under a wall-clock budget, and normalization of every failure into the
//! fixed fallback payload. A provider error never reaches the caller as a raw
//! error body; the cause is only logged here.

use crate::api::{fallback_response, ChatResponse, IncomingRequest};
use crate::error::{Result, FoliochatError};
use crate::prompts::build_system_prompt;
use crate::providers::Message;
use crate::server::AppState;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use std::time::Duration;

/// Handle `POST /api/chat`
///
/// Returns the provider's first choice message with 200 on success, or the
/// fallback payload with 500 on any failure (parse error, provider failure,
/// deadline exceeded).
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ChatResponse>) {
    match complete_chat(&state, &body).await {
        Ok(reply) => (StatusCode::OK, Json(reply)),
        Err(e) => {
            tracing::error!("Chat request failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(fallback_response(&state.config.chat.fallback_contact)),
            )
        }
    }
}

/// Liveness probe
pub async fn healthz() -> &'static str {
    "ok"
}

/// The fallible part of one chat request
///
/// Every error path funnels through here so [`handle_chat`] can normalize
/// all of them into the single fallback shape.
async fn complete_chat(state: &AppState, body: &[u8]) -> Result<ChatResponse> {
    let incoming: IncomingRequest = serde_json::from_slice(body)?;

    let received = incoming.messages.len();
    let mut messages: Vec<Message> = Vec::with_capacity(received + 1);
    messages.push(Message::system(build_system_prompt(
        &state.profile,
        Utc::now().date_naive(),
    )));
    messages.extend(
        incoming
            .messages
            .into_iter()
            .filter_map(|entry| entry.into_valid()),
    );

    let forwarded = messages.len() - 1;
    if forwarded < received {
        tracing::warn!(
            "Dropped {} malformed message entries",
            received - forwarded
        );
    }

    let budget = Duration::from_secs(state.config.provider.timeout_seconds);
    let reply = tokio::time::timeout(budget, state.provider.complete(&messages))
        .await
        .map_err(|_| {
            FoliochatError::Provider(format!(
                "Provider call exceeded {}s budget",
                state.config.provider.timeout_seconds
            ))
        })??;

    Ok(ChatResponse {
        role: reply.role,
        content: reply.content,
    })
}
