use super::*;
use serde_json::json;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::User).expect("role"), json!("user"));
    assert_eq!(serde_json::to_value(Role::Assistant).expect("role"), json!("assistant"));
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_value::<Role>(json!("system")).is_err());
}

#[test]
fn chat_request_prompt_is_last_turn() {
    let req = ChatRequest {
        messages: vec![ChatTurn::user("first"), ChatTurn::assistant("reply"), ChatTurn::user("second")],
    };
    assert_eq!(req.prompt(), Some("second"));
}

#[test]
fn chat_request_prompt_empty_is_none() {
    let req = ChatRequest { messages: Vec::new() };
    assert_eq!(req.prompt(), None);
}

#[test]
fn image_reply_uses_camel_case_fields() {
    let reply = ImageReply { image_url: "https://img/cat".to_owned(), revised_prompt: "cat".to_owned() };
    let value = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(value, json!({"imageUrl": "https://img/cat", "revisedPrompt": "cat"}));
}

#[test]
fn error_body_omits_missing_details() {
    let body = ErrorBody { error: "Prompt is required".to_owned(), details: None };
    let value = serde_json::to_value(&body).expect("serialize");
    assert_eq!(value, json!({"error": "Prompt is required"}));
}

#[test]
fn error_body_parses_without_details() {
    let body: ErrorBody = serde_json::from_value(json!({"error": "boom"})).expect("parse");
    assert_eq!(body.error, "boom");
    assert!(body.details.is_none());
}

#[test]
fn health_reply_ok_shape() {
    let value = serde_json::to_value(HealthReply::ok()).expect("serialize");
    assert_eq!(value, json!({"status": "ok", "message": "Server is running"}));
}
