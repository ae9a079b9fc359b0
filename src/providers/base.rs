//! Base provider trait and common types for Foliochat
//!
//! This module defines the CompletionProvider trait that all completion
//! providers must implement, along with the message type shared between the
//! chat proxy and the provider wire format.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message structure for conversation
///
/// Represents one turn sent to or returned by the completion provider.
/// Messages can be from the user, the assistant, or the system prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Creates a new user message
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::providers::Message;
    ///
    /// let msg = Message::user("Hello, assistant!");
    /// assert_eq!(msg.role, "user");
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant message
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::providers::Message;
    ///
    /// let msg = Message::assistant("Hello, user!");
    /// assert_eq!(msg.role, "assistant");
    /// ```
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new system message
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::providers::Message;
    ///
    /// let msg = Message::system("You are a portfolio assistant");
    /// assert_eq!(msg.role, "system");
    /// ```
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for completion providers
///
/// A provider receives the fully assembled message list (system prompt first)
/// and returns the assistant's reply. Exactly one upstream call is made per
/// invocation; retries and fallbacks are the caller's concern.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given message list
    ///
    /// # Arguments
    ///
    /// * `messages` - Ordered message list, system prompt included
    ///
    /// # Returns
    ///
    /// The assistant message chosen by the provider
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success upstream status,
    /// a malformed response body, or an empty choice list
    async fn complete(&self, messages: &[Message]) -> Result<Message>;

    /// The model identifier this provider sends upstream
    fn model(&self) -> String;
}
