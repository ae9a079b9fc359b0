//! Transport between the widget and the chat proxy
//!
//! The widget talks to the proxy through the [`ChatTransport`] trait so the
//! session state machine can be exercised without a network. The production
//! implementation posts the transcript to the proxy over HTTP.

use crate::api::{ChatRequest, ChatResponse, CHAT_PATH};
use crate::error::{Result, FoliochatError};

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Channel for one widget request/response exchange
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send the transcript and return the proxy's reply
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success proxy status;
    /// the widget maps every error to its fixed fallback message.
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// HTTP transport posting to the proxy's chat endpoint
///
/// # Examples
///
/// ```
/// use foliochat::widget::HttpChatTransport;
///
/// let transport = HttpChatTransport::new("http://127.0.0.1:8787");
/// assert!(transport.is_ok());
/// ```
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
}

impl HttpChatTransport {
    /// Create a transport pointed at a proxy base URL
    ///
    /// # Arguments
    ///
    /// * `proxy_url` - Base URL of the chat proxy, without the chat path
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(proxy_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent("foliochat/0.2.0")
            .build()
            .map_err(|e| {
                FoliochatError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", proxy_url.trim_end_matches('/'), CHAT_PATH),
        })
    }

    /// The full endpoint URL this transport posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| FoliochatError::Transport(format!("Failed to reach proxy: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                FoliochatError::Transport(format!("Proxy returned status {}", status)).into(),
            );
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            FoliochatError::Transport(format!("Failed to parse proxy response: {}", e))
        })?;
        Ok(reply)
    }
}
