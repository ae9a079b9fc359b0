//! Wire types for the chat endpoint
//!
//! This module defines the JSON shapes exchanged between the widget and the
//! chat proxy, including the lenient incoming message form the proxy uses to
//! drop malformed entries, and the canned fallback payloads for both sides of
//! the pipeline.

use crate::providers::Message;
use serde::{Deserialize, Serialize};

/// Path the chat proxy serves and the widget posts to
pub const CHAT_PATH: &str = "/api/chat";

/// Fallback text the widget appends when the proxy cannot be reached
pub const WIDGET_FALLBACK: &str = "I'm having trouble connecting. Please try again shortly.";

/// Request body sent from the widget to the proxy
///
/// Carries the full visible transcript, role and content only; timestamps
/// never cross the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered conversation turns, oldest first
    pub messages: Vec<Message>,
}

/// Response body returned by the proxy
///
/// On success this is the provider's first choice message verbatim; on any
/// failure it carries the fallback text with an error status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Role of the reply, always "assistant"
    pub role: String,
    /// Reply text
    pub content: String,
}

/// Lenient request body as parsed by the proxy
///
/// Every field is optional so one malformed entry cannot reject the whole
/// request; entries are validated individually by [`IncomingMessage::into_valid`].
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingRequest {
    /// Caller-supplied conversation turns, not yet validated
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
}

/// One caller-supplied message entry, fields unchecked
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl IncomingMessage {
    /// Validate this entry into a forwardable message
    ///
    /// Entries missing a role or content, or carrying an empty string for
    /// either, are dropped rather than forwarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::api::IncomingMessage;
    ///
    /// let entry = IncomingMessage {
    ///     role: Some("user".to_string()),
    ///     content: None,
    /// };
    /// assert!(entry.into_valid().is_none());
    /// ```
    pub fn into_valid(self) -> Option<Message> {
        let role = self.role.filter(|r| !r.is_empty())?;
        let content = self.content.filter(|c| !c.is_empty())?;
        Some(Message { role, content })
    }
}

/// Build the proxy's fallback response
///
/// # Arguments
///
/// * `contact` - Contact address to include in the fallback text
///
/// # Examples
///
/// ```
/// use foliochat::api::fallback_response;
///
/// let fallback = fallback_response("me@example.com");
/// assert_eq!(fallback.role, "assistant");
/// assert!(fallback.content.contains("me@example.com"));
/// ```
pub fn fallback_response(contact: &str) -> ChatResponse {
    ChatResponse {
        role: "assistant".to_string(),
        content: format!(
            "I'm currently unavailable. Please contact {} directly.",
            contact
        ),
    }
}
