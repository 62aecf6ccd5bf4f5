//! `POST /api/chat`: forward the latest turn to the text upstream.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde_json::Value;
use tracing::info;
use wire::ChatReply;

use super::RelayError;
use crate::state::AppState;

const MESSAGES_REQUIRED: &str = "Messages array is required";
const LAST_CONTENT_REQUIRED: &str = "Invalid message: last message needs a string content";
const CHAT_FAILED: &str = "Failed to generate response";

/// Relay the last message's content to the text upstream and wrap the raw
/// reply as `{message}`. Earlier turns are accepted as-is and not forwarded.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatReply>, RelayError> {
    let ChatPrompt { turns, prompt } = parse_chat_request(body)?;

    info!(turns, prompt_len = prompt.len(), "chat: prompt received");
    let message = state
        .text
        .generate(&prompt)
        .await
        .map_err(RelayError::upstream(CHAT_FAILED))?;

    Ok(Json(ChatReply { message }))
}

/// The part of a chat request that reaches the upstream.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ChatPrompt {
    pub turns: usize,
    pub prompt: String,
}

/// Require a non-empty `messages` array whose last entry has a string
/// `content`. Other entries are not inspected.
pub(crate) fn parse_chat_request(body: Result<Json<Value>, JsonRejection>) -> Result<ChatPrompt, RelayError> {
    let Ok(Json(Value::Object(mut body))) = body else {
        return Err(RelayError::Validation(MESSAGES_REQUIRED.into()));
    };
    let Some(Value::Array(mut messages)) = body.remove("messages") else {
        return Err(RelayError::Validation(MESSAGES_REQUIRED.into()));
    };

    let turns = messages.len();
    let Some(last) = messages.pop() else {
        return Err(RelayError::Validation(MESSAGES_REQUIRED.into()));
    };
    match last {
        Value::Object(mut last) => match last.remove("content") {
            Some(Value::String(prompt)) => Ok(ChatPrompt { turns, prompt }),
            _ => Err(RelayError::Validation(LAST_CONTENT_REQUIRED.into())),
        },
        _ => Err(RelayError::Validation(LAST_CONTENT_REQUIRED.into())),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
