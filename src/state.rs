//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: every request is handled independently, so the
//! only shared values are the two upstream generators.

use std::sync::Arc;

use crate::upstream::{ImageGenerator, TextGenerator};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; both generators are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub text: Arc<dyn TextGenerator>,
    pub images: Arc<dyn ImageGenerator>,
}

impl AppState {
    #[must_use]
    pub fn new(text: Arc<dyn TextGenerator>, images: Arc<dyn ImageGenerator>) -> Self {
        Self { text, images }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
