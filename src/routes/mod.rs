use std::sync::Arc;

use axum::Router;

use crate::PreferenceStore;

mod error;
mod health;
mod hives;
mod language;

pub use error::ApiError;

// ---

pub fn router(store: Arc<PreferenceStore>) -> Router {
    // ---
    Router::new()
        .merge(hives::router())
        .merge(language::router())
        .merge(health::router())
        .with_state(store)
}
