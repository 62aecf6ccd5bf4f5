//! Shared JSON bodies for the relay HTTP API.
//!
//! This crate owns the wire representation used by both `chat-relay` and
//! `cli`. Field names follow the browser client's camelCase convention.

use serde::{Deserialize, Serialize};

/// `GET` health probe.
pub const HEALTH_PATH: &str = "/api/health";
/// `POST` text generation.
pub const CHAT_PATH: &str = "/api/chat";
/// `POST` image generation.
pub const IMAGE_PATH: &str = "/api/generate-image";

/// Author of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One `{role, content}` entry of the context sent to `/api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Body of `POST /api/chat`. The last turn is the prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

impl ChatRequest {
    /// Content of the final turn, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.messages.last().map(|turn| turn.content.as_str())
    }
}

/// Successful `/api/chat` response: the upstream text, untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

/// Body of `POST /api/generate-image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
}

/// Successful `/api/generate-image` response.
///
/// `revised_prompt` echoes the request prompt; the upstream never rewrites it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReply {
    pub image_url: String,
    pub revised_prompt: String,
}

/// Error payload for every non-2xx relay response.
///
/// Validation failures carry only `error`; upstream failures add `details`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `GET /api/health` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReply {
    pub status: String,
    pub message: String,
}

impl HealthReply {
    #[must_use]
    pub fn ok() -> Self {
        Self { status: "ok".to_owned(), message: "Server is running".to_owned() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
