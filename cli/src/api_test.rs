use super::*;
use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde_json::json;
use wire::ChatTurn;

/// Serve `router` on an ephemeral local port and return a client for it.
async fn spawn_relay(router: Router) -> RelayClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind relay");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("relay serve");
    });
    RelayClient::new(&format!("http://{addr}/"), None).expect("client")
}

fn echo_relay() -> Router {
    Router::new()
        .route(wire::HEALTH_PATH, get(|| async { Json(HealthReply::ok()) }))
        .route(
            wire::CHAT_PATH,
            post(|Json(req): Json<ChatRequest>| async move {
                let last = req.prompt().unwrap_or_default().to_owned();
                Json(ChatReply { message: format!("{} turns, last: {last}", req.messages.len()) })
            }),
        )
        .route(
            wire::IMAGE_PATH,
            post(|Json(req): Json<ImageRequest>| async move {
                Json(ImageReply { image_url: format!("https://img/{}", req.prompt), revised_prompt: req.prompt })
            }),
        )
}

#[test]
fn new_rejects_non_http_base_url() {
    let err = RelayClient::new("localhost:3001", None).err().expect("should reject");
    assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
}

#[test]
fn new_trims_trailing_slash() {
    let client = RelayClient::new("http://127.0.0.1:3001/", None).expect("client");
    assert_eq!(client.base_url(), "http://127.0.0.1:3001");
}

#[test]
fn details_prefers_server_details() {
    let err = ClientError::Server {
        status: 500,
        error: "Failed to generate response".into(),
        details: Some("Pollinations API error: 500".into()),
    };
    assert_eq!(err.details(), "Pollinations API error: 500");
}

#[test]
fn details_falls_back_to_display() {
    let err = ClientError::Server { status: 400, error: "Prompt is required".into(), details: None };
    assert_eq!(err.details(), "server returned 400: Prompt is required");
}

#[tokio::test]
async fn health_round_trip() {
    let client = spawn_relay(echo_relay()).await;
    assert_eq!(client.health().await.expect("health"), HealthReply::ok());
}

#[tokio::test]
async fn chat_posts_full_history() {
    let client = spawn_relay(echo_relay()).await;
    let request = ChatRequest { messages: vec![ChatTurn::user("hi"), ChatTurn::assistant("yo"), ChatTurn::user("sup")] };
    let reply = client.chat(&request).await.expect("chat");
    assert_eq!(reply.message, "3 turns, last: sup");
}

#[tokio::test]
async fn generate_image_round_trip() {
    let client = spawn_relay(echo_relay()).await;
    let reply = client
        .generate_image(&ImageRequest { prompt: "cat".into() })
        .await
        .expect("image");
    assert_eq!(reply.image_url, "https://img/cat");
    assert_eq!(reply.revised_prompt, "cat");
}

#[tokio::test]
async fn server_error_body_is_decoded() {
    let router = Router::new().route(
        wire::CHAT_PATH,
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to generate response", "details": "Pollinations API error: 503"})),
            )
        }),
    );
    let client = spawn_relay(router).await;

    let err = client
        .chat(&ChatRequest { messages: vec![ChatTurn::user("hi")] })
        .await
        .unwrap_err();
    match &err {
        ClientError::Server { status, error, details } => {
            assert_eq!(*status, 500);
            assert_eq!(error, "Failed to generate response");
            assert_eq!(details.as_deref(), Some("Pollinations API error: 503"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
    assert_eq!(err.details(), "Pollinations API error: 503");
}

#[tokio::test]
async fn non_json_error_body_becomes_error_text() {
    let router = Router::new().route(wire::IMAGE_PATH, post(|| async { (StatusCode::BAD_GATEWAY, "bad gateway") }));
    let client = spawn_relay(router).await;

    let err = client
        .generate_image(&ImageRequest { prompt: "cat".into() })
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ClientError::Server { status: 502, error, details: None } if error == "bad gateway"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unreachable_relay_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = RelayClient::new(&format!("http://{addr}"), None).expect("client");
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}
