use super::*;
use crate::state::test_helpers::{BrokenImages, MockText, test_app_state};
use axum::http::StatusCode;
use serde_json::json;

fn body(value: Value) -> Result<Json<Value>, JsonRejection> {
    Ok(Json(value))
}

#[test]
fn parse_prompt_accepts_string() {
    assert_eq!(parse_prompt(body(json!({"prompt": "cat"}))).expect("prompt"), "cat");
}

#[test]
fn parse_prompt_rejects_empty_missing_and_non_string() {
    for value in [json!({"prompt": ""}), json!({}), json!({"prompt": 7}), json!({"prompt": null}), json!("cat")] {
        let err = parse_prompt(body(value.clone())).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST, "for {value}");
        assert_eq!(err.to_string(), "Prompt is required");
    }
}

#[test]
fn parse_prompt_keeps_whitespace_prompt() {
    assert_eq!(parse_prompt(body(json!({"prompt": "  "}))).expect("prompt"), "  ");
}

#[tokio::test]
async fn generate_image_for_cat() {
    let state = test_app_state(MockText::replying("unused"));

    let Json(reply) = generate_image(State(state), body(json!({"prompt": "cat"})))
        .await
        .expect("image should succeed");

    assert!(reply.image_url.contains("/prompt/cat?"), "got {}", reply.image_url);
    assert!(reply.image_url.contains("width=1024&height=1024"));
    assert_eq!(reply.revised_prompt, "cat");
}

#[tokio::test]
async fn generate_image_encodes_prompt() {
    let state = test_app_state(MockText::replying("unused"));

    let Json(reply) = generate_image(State(state), body(json!({"prompt": "a cat & a dog"})))
        .await
        .expect("image should succeed");

    assert!(reply.image_url.contains("/prompt/a%20cat%20%26%20a%20dog?"), "got {}", reply.image_url);
    assert_eq!(reply.revised_prompt, "a cat & a dog");
}

#[tokio::test]
async fn generate_image_failure_is_internal_error() {
    let state = AppState::new(MockText::replying("unused"), std::sync::Arc::new(BrokenImages));

    let err = generate_image(State(state), body(json!({"prompt": "cat"})))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().starts_with("Failed to generate image"));
}
