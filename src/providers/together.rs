//! Together AI provider implementation for Foliochat
//!
//! This module implements the CompletionProvider trait against Together's
//! OpenAI-compatible chat completions endpoint. The API key is read from the
//! process environment at request time; a missing key is not validated here
//! and surfaces as an upstream authentication failure.

use crate::config::ProviderConfig;
use crate::error::{Result, FoliochatError};
use crate::providers::{CompletionProvider, Message};

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Together AI completion provider
///
/// Sends the assembled message list to `{api_base}/chat/completions` with
/// fixed sampling parameters and returns the first choice's message. The
/// `api_base` is configurable so tests can point the provider at a mock
/// server.
///
/// # Examples
///
/// ```no_run
/// use foliochat::config::ProviderConfig;
/// use foliochat::providers::{TogetherProvider, CompletionProvider, Message};
///
/// # async fn example() -> foliochat::error::Result<()> {
/// let provider = TogetherProvider::new(ProviderConfig::default())?;
/// let messages = vec![Message::user("Hello!")];
/// let reply = provider.complete(&messages).await?;
/// # Ok(())
/// # }
/// ```
pub struct TogetherProvider {
    client: Client,
    config: ProviderConfig,
}

/// Request structure for the chat completions endpoint
#[derive(Debug, serde::Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

/// Response structure from the chat completions endpoint
#[derive(Debug, serde::Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

/// One choice in a completion response
#[derive(Debug, serde::Deserialize)]
struct CompletionChoice {
    message: Message,
}

impl TogetherProvider {
    /// Create a new Together provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Provider configuration (endpoint, model, sampling)
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::config::ProviderConfig;
    /// use foliochat::providers::TogetherProvider;
    ///
    /// let provider = TogetherProvider::new(ProviderConfig::default());
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("foliochat/0.2.0")
            .build()
            .map_err(|e| {
                FoliochatError::Provider(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            "Initialized Together provider: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Build the chat completions URL from the configured base
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// Read the API key from the environment at request time
    fn api_key(&self) -> String {
        std::env::var(&self.config.api_key_env).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for TogetherProvider {
    async fn complete(&self, messages: &[Message]) -> Result<Message> {
        let url = self.completions_url();
        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        };

        tracing::debug!(
            "Requesting completion: model={}, messages={}",
            self.config.model,
            messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                FoliochatError::Provider(format!("Failed to reach completion endpoint: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Provider returned error {}: {}", status, error_text);
            return Err(FoliochatError::Provider(format!(
                "Provider returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            FoliochatError::Provider(format!("Failed to parse completion response: {}", e))
        })?;

        // An empty choice list is treated the same as an upstream failure.
        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            tracing::error!("Provider returned zero choices");
            FoliochatError::Provider("Provider returned zero choices".to_string())
        })?;

        Ok(choice.message)
    }

    fn model(&self) -> String {
        self.config.model.clone()
    }
}
