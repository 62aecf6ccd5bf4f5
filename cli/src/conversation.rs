//! Conversation state: the ordered message log, input mode, and loading flag.
//!
//! DESIGN
//! ======
//! The log is append-only. A send is split in two halves so the state can be
//! driven without a network: `begin_send` validates the input, records the
//! user message and yields the request to issue; one of `complete_chat`,
//! `complete_image` or `fail` records the outcome and clears `loading`.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use wire::{ChatReply, ChatRequest, ChatTurn, ImageReply, ImageRequest, Role};

/// Shown when a failure carries no description at all.
pub const FALLBACK_ERROR: &str = "Failed to generate response";

/// Which endpoint the next send targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Text,
    Image,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Text => Self::Image,
            Self::Image => Self::Text,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

/// How a message's `content` should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Error,
}

impl From<Mode> for MessageKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Text => Self::Text,
            Mode::Image => Self::Image,
        }
    }
}

/// A single entry of the conversation log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    /// Text, or the image URL for assistant image replies.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Message {
    fn new(role: Role, content: String, kind: MessageKind) -> Self {
        Self { role, content, kind, revised_prompt: None, timestamp: OffsetDateTime::now_utc() }
    }
}

/// The request produced by [`Conversation::begin_send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    Chat(ChatRequest),
    Image(ImageRequest),
}

#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    mode: Mode,
    loading: bool,
}

impl Conversation {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { messages: Vec::new(), mode, loading: false }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch the input mode. Existing messages are untouched.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Text-typed messages as `{role, content}` turns, oldest first.
    #[must_use]
    pub fn text_history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .filter(|m| m.kind == MessageKind::Text)
            .map(|m| ChatTurn { role: m.role, content: m.content.clone() })
            .collect()
    }

    /// Record the user's input and return the request to send.
    ///
    /// Returns `None` without touching state when the trimmed input is empty
    /// or a previous send has not completed.
    pub fn begin_send(&mut self, input: &str) -> Option<Outbound> {
        if input.trim().is_empty() || self.loading {
            return None;
        }

        let outbound = match self.mode {
            Mode::Text => {
                let mut messages = self.text_history();
                messages.push(ChatTurn::user(input));
                Outbound::Chat(ChatRequest { messages })
            }
            Mode::Image => Outbound::Image(ImageRequest { prompt: input.to_owned() }),
        };

        self.messages
            .push(Message::new(Role::User, input.to_owned(), self.mode.into()));
        self.loading = true;
        Some(outbound)
    }

    pub fn complete_chat(&mut self, reply: ChatReply) {
        self.messages
            .push(Message::new(Role::Assistant, reply.message, MessageKind::Text));
        self.loading = false;
    }

    pub fn complete_image(&mut self, reply: ImageReply) {
        let mut message = Message::new(Role::Assistant, reply.image_url, MessageKind::Image);
        message.revised_prompt = Some(reply.revised_prompt);
        self.messages.push(message);
        self.loading = false;
    }

    /// Record a failed send as an `error` message.
    pub fn fail(&mut self, details: Option<&str>) {
        let details = details
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(FALLBACK_ERROR);
        self.messages.push(Message::new(
            Role::Assistant,
            format!("Error: {details}"),
            MessageKind::Error,
        ));
        self.loading = false;
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
