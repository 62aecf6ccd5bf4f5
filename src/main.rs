mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use upstream::pollinations::{PollinationsImage, PollinationsText};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::RelayConfig::from_env();

    let text = PollinationsText::new(&config.text_base_url, config.timeouts).expect("text upstream init failed");
    let images = PollinationsImage::new(&config.image_base_url).expect("image upstream init failed");
    tracing::info!(
        text_base_url = %config.text_base_url,
        image_base_url = %config.image_base_url,
        request_timeout_secs = ?config.timeouts.request_secs,
        "upstreams configured"
    );

    let state = state::AppState::new(Arc::new(text), Arc::new(images));

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chat relay listening");
    tracing::info!("text generation: POST {}", wire::CHAT_PATH);
    tracing::info!("image generation: POST {}", wire::IMAGE_PATH);
    axum::serve(listener, app).await.expect("server failed");
}
