//! Shared test doubles for unit tests
//!
//! Scripted stand-ins for the completion provider and the widget transport,
//! recording calls so tests can assert on call counts and forwarded payloads.

use crate::api::{ChatRequest, ChatResponse};
use crate::error::{Result, FoliochatError};
use crate::providers::{CompletionProvider, Message};
use crate::widget::ChatTransport;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted behavior for a test double
enum Script {
    Reply(String),
    Fail,
    Stall,
}

/// Completion provider double
///
/// Records every call and the message list it was given, and replies
/// according to its script.
pub struct FakeProvider {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl FakeProvider {
    /// A provider that always replies with the given content
    pub fn replying(content: &str) -> Self {
        Self::with_script(Script::Reply(content.to_string()))
    }

    /// A provider whose every call fails
    pub fn failing() -> Self {
        Self::with_script(Script::Fail)
    }

    /// A provider that never resolves within any reasonable budget
    pub fn stalling() -> Self {
        Self::with_script(Script::Stall)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completed calls
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The message list of the most recent call
    pub fn last_request(&self) -> Option<Vec<Message>> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, messages: &[Message]) -> Result<Message> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(messages.to_vec());
        match &self.script {
            Script::Reply(content) => Ok(Message::assistant(content.clone())),
            Script::Fail => Err(FoliochatError::Provider("scripted failure".to_string()).into()),
            Script::Stall => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(FoliochatError::Provider("stall elapsed".to_string()).into())
            }
        }
    }

    fn model(&self) -> String {
        "fake-model".to_string()
    }
}

/// Widget transport double
pub struct ScriptedTransport {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedTransport {
    /// A transport whose proxy always replies with the given content
    pub fn replying(content: &str) -> Self {
        Self {
            script: Script::Reply(content.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport whose every send fails
    pub fn failing() -> Self {
        Self {
            script: Script::Fail,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completed sends
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The request body of the most recent send
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Reply(content) => Ok(ChatResponse {
                role: "assistant".to_string(),
                content: content.clone(),
            }),
            Script::Fail | Script::Stall => {
                Err(FoliochatError::Transport("scripted failure".to_string()).into())
            }
        }
    }
}
