//! `POST /api/generate-image`: hand back an upstream image URL.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde_json::Value;
use tracing::info;
use wire::ImageReply;

use super::RelayError;
use crate::state::AppState;

const PROMPT_REQUIRED: &str = "Prompt is required";
const IMAGE_FAILED: &str = "Failed to generate image";

pub async fn generate_image(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ImageReply>, RelayError> {
    let prompt = parse_prompt(body)?;

    info!(prompt_len = prompt.len(), "image: prompt received");
    let image = state
        .images
        .generate(&prompt)
        .await
        .map_err(RelayError::upstream(IMAGE_FAILED))?;

    Ok(Json(ImageReply { image_url: image.url, revised_prompt: image.revised_prompt }))
}

/// Extract a non-empty `prompt` string. Whitespace-only prompts pass through.
pub(crate) fn parse_prompt(body: Result<Json<Value>, JsonRejection>) -> Result<String, RelayError> {
    let Ok(Json(Value::Object(mut body))) = body else {
        return Err(RelayError::Validation(PROMPT_REQUIRED.into()));
    };
    match body.remove("prompt") {
        Some(Value::String(prompt)) if !prompt.is_empty() => Ok(prompt),
        _ => Err(RelayError::Validation(PROMPT_REQUIRED.into())),
    }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
