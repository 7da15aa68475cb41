//! "Ask About Suman" chat
//!
//! The chat panel forwards visitor questions to a text generation service.
//! Each question runs on its own worker thread; the reply comes back over a
//! channel that the UI drains once per frame, so the UI thread never waits
//! on the network.

mod backend;
mod persona;

pub use backend::{ChatBackend, GeminiBackend, EMPTY_REPLY};
pub use persona::{build_prompt, SYSTEM_PROMPT};

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use log::{debug, warn};

use crate::error::Result;

/// Greeting shown while the conversation is empty.
pub const GREETING: &str = "Hi! I'm Suman's AI assistant.";
/// Second line of the empty-state greeting.
pub const GREETING_HINT: &str = "Feel free to ask me anything about Suman Mandal!";
/// Reply shown when a request fails for any reason.
pub const ERROR_REPLY: &str =
    "Error: Could not connect to AI service. Please check API Key configuration.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat Session
// ─────────────────────────────────────────────────────────────────────────────

/// Conversation state plus the channel to the in-flight request.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    /// Text currently typed in the input box
    pub input: String,
    loading: bool,
    backend: Arc<dyn ChatBackend>,
    system_prompt: String,
    tx: Sender<Result<String>>,
    rx: Receiver<Result<String>>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        let (tx, rx) = channel();
        Self {
            messages: Vec::new(),
            input: String::new(),
            loading: false,
            backend,
            system_prompt: SYSTEM_PROMPT.to_string(),
            tx,
            rx,
        }
    }

    /// Send the current input.
    ///
    /// Blank input, or a request already in flight, is ignored. `repaint` is
    /// asked to redraw once the reply arrives. Returns `true` if a request
    /// was started.
    pub fn submit(&mut self, repaint: Option<egui::Context>) -> bool {
        let question = self.input.trim().to_string();
        if question.is_empty() || self.loading {
            return false;
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            text: question.clone(),
        });
        self.input.clear();
        self.loading = true;

        let prompt = build_prompt(&self.system_prompt, &question);
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name("chat-request".to_string())
            .spawn(move || {
                let reply = backend.generate(&prompt);
                // The session may be gone by the time the reply lands
                let _ = tx.send(reply);
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });

        if let Err(e) = spawned {
            warn!("Failed to start chat request: {}", e);
            self.finish(ERROR_REPLY.to_string());
            return false;
        }
        debug!("Chat request started");
        true
    }

    /// Apply any reply that has arrived. Returns `true` if one did.
    pub fn poll(&mut self) -> bool {
        let mut received = false;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(text)) => {
                    self.finish(text);
                    received = true;
                }
                Ok(Err(e)) => {
                    warn!("Chat request failed: {}", e);
                    self.finish(ERROR_REPLY.to_string());
                    received = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        received
    }

    fn finish(&mut self, text: String) {
        self.messages.push(ChatMessage {
            role: Role::Model,
            text,
        });
        self.loading = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("messages", &self.messages.len())
            .field("loading", &self.loading)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
