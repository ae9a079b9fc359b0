//! Chat widget session engine
//!
//! This module implements the client-side chat session: a collapsible panel
//! state, an ordered transcript of timestamped messages, an input buffer with
//! suggested questions, and the turn-taking protocol with the chat proxy.
//!
//! The submission cycle is split into [`ChatWidget::begin_submit`] and
//! [`ChatWidget::finish_submit`] so the return to `Idle` is structural: the
//! finish step appends exactly one assistant message (reply or fallback) and
//! resets the activity on its single exit path, whatever the transport did.

pub mod transport;

pub use transport::{ChatTransport, HttpChatTransport};

use crate::api::{ChatRequest, ChatResponse, WIDGET_FALLBACK};
use crate::error::Result;
use crate::providers::Message;
use chrono::{DateTime, Utc};

/// Suggested questions offered while the transcript is empty
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "What projects have you worked on?",
    "Tell me about your education background",
    "What technical skills do you have?",
];

/// One transcript entry, timestamped at creation and immutable afterwards
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Role of the sender (user or assistant)
    pub role: String,
    /// Message text
    pub content: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a user message timestamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates an assistant message timestamped now
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Panel visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Initial state, only the launcher is shown
    Collapsed,
    /// Panel is open
    Expanded,
}

/// Turn-taking state within the expanded panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Ready to accept a submission
    Idle,
    /// One request is outstanding; submissions are ignored, not queued
    AwaitingResponse,
}

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was sent and resolved (reply or fallback appended)
    Sent,
    /// Preconditions failed; nothing changed
    Ignored,
}

/// Chat widget state machine
///
/// Owns the transcript, the input buffer, and the visibility and activity
/// axes. All state is private to one widget instance; nothing persists past
/// the instance itself.
///
/// # Examples
///
/// ```
/// use foliochat::widget::{ChatWidget, Visibility};
///
/// let mut widget = ChatWidget::new();
/// assert_eq!(widget.visibility(), Visibility::Collapsed);
/// widget.toggle_visibility();
/// assert_eq!(widget.visibility(), Visibility::Expanded);
/// ```
#[derive(Debug)]
pub struct ChatWidget {
    visibility: Visibility,
    activity: Activity,
    transcript: Vec<ChatMessage>,
    input: String,
    scroll_anchor: Option<usize>,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// Create a widget in its initial state: collapsed, idle, empty
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Collapsed,
            activity: Activity::Idle,
            transcript: Vec::new(),
            input: String::new(),
            scroll_anchor: None,
        }
    }

    /// Current panel visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Current turn-taking state
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// The transcript, oldest message first
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Current input buffer contents
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Index of the message the panel should scroll to, if any
    ///
    /// Updated after every transcript change to point at the newest message.
    pub fn scroll_anchor(&self) -> Option<usize> {
        self.scroll_anchor
    }

    /// Flip between collapsed and expanded
    ///
    /// Always succeeds; has no effect on the transcript or activity.
    pub fn toggle_visibility(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Collapsed => Visibility::Expanded,
            Visibility::Expanded => Visibility::Collapsed,
        };
    }

    /// Replace the input buffer contents
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Pre-fill the input with a suggested question
    ///
    /// Only available while the transcript is empty; never auto-submits.
    ///
    /// # Arguments
    ///
    /// * `index` - Position in [`SUGGESTED_QUESTIONS`]
    ///
    /// # Returns
    ///
    /// `true` if the input was pre-filled
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::widget::{ChatWidget, SUGGESTED_QUESTIONS};
    ///
    /// let mut widget = ChatWidget::new();
    /// assert!(widget.select_suggested_question(0));
    /// assert_eq!(widget.input(), SUGGESTED_QUESTIONS[0]);
    /// ```
    pub fn select_suggested_question(&mut self, index: usize) -> bool {
        if !self.transcript.is_empty() {
            return false;
        }
        match SUGGESTED_QUESTIONS.get(index) {
            Some(question) => {
                self.input = (*question).to_string();
                true
            }
            None => false,
        }
    }

    /// Start a submission cycle
    ///
    /// Preconditions: the trimmed input is non-empty and no request is
    /// outstanding. On violation nothing changes and `None` is returned (the
    /// attempt is ignored, not queued). Otherwise the user message is
    /// appended, the input cleared, the activity set to awaiting, and the
    /// request carrying the full transcript is returned.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if self.activity == Activity::AwaitingResponse {
            tracing::debug!("Submission ignored: request already outstanding");
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }

        self.push_message(ChatMessage::user(text));
        self.input.clear();
        self.activity = Activity::AwaitingResponse;

        Some(ChatRequest {
            messages: self
                .transcript
                .iter()
                .map(|m| Message {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect(),
        })
    }

    /// Finish a submission cycle
    ///
    /// Appends the assistant reply on success or the fixed fallback on any
    /// failure, then returns to idle. Must be called exactly once per
    /// successful [`ChatWidget::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<ChatResponse>) {
        let reply = match result {
            Ok(response) => ChatMessage::assistant(response.content),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                ChatMessage::assistant(WIDGET_FALLBACK)
            }
        };
        self.push_message(reply);
        self.activity = Activity::Idle;
    }

    /// Run one full submission cycle against a transport
    ///
    /// # Arguments
    ///
    /// * `transport` - Channel to the chat proxy
    ///
    /// # Returns
    ///
    /// [`SubmitOutcome::Sent`] when a request was made (the transcript grew
    /// by exactly two messages), [`SubmitOutcome::Ignored`] otherwise.
    pub async fn submit(&mut self, transport: &dyn ChatTransport) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };
        let result = transport.send(&request).await;
        self.finish_submit(result);
        SubmitOutcome::Sent
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.transcript.push(message);
        self.scroll_anchor = Some(self.transcript.len() - 1);
    }
}
