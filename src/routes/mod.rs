//! Router assembly and the relay's HTTP error type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three JSON endpoints under `/api`. Every request is validated, forwarded
//! to an upstream generator, and answered once; failures collapse into a
//! single `{error, details}` body.

pub mod chat;
pub mod image;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wire::{ErrorBody, HealthReply};

use crate::state::AppState;
use crate::upstream::UpstreamError;

/// Build the relay router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(wire::HEALTH_PATH, get(health))
        .route(wire::CHAT_PATH, post(chat::chat))
        .route(wire::IMAGE_PATH, post(image::generate_image))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `GET /api/health`: static liveness reply.
pub async fn health() -> Json<HealthReply> {
    Json(HealthReply::ok())
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// The upstream call failed; `context` is the client-facing summary.
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl RelayError {
    pub(crate) fn upstream(context: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| Self::Upstream { context, source }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(error) => ErrorBody { error, details: None },
            Self::Upstream { context, source } => {
                tracing::error!(error = %source, upstream_body = source.body().unwrap_or_default(), "{context}");
                ErrorBody { error: context.to_owned(), details: Some(source.to_string()) }
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
