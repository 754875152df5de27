//! Display-language endpoints.
//!
//! - `GET  /language`             current language with its string table
//! - `PUT  /language`             select a language by code
//! - `POST /language/toggle`      flip to the other language
//! - `GET  /translations/{lang}`  string table for any language

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiError;
use crate::i18n::{Language, Translations};
use crate::PreferenceStore;

// ---

pub fn router() -> Router<Arc<PreferenceStore>> {
    // ---
    Router::new()
        .route("/language", get(get_language).put(put_language))
        .route("/language/toggle", post(toggle_language))
        .route("/translations/{lang}", get(get_translations))
}

/// Response body shared by the `/language` endpoints.
#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    language: Language,
    badge: &'static str,
    translations: &'static Translations,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self {
            language,
            badge: language.badge(),
            translations: language.translations(),
        }
    }
}

/// Request body for `PUT /language`.
#[derive(Debug, Deserialize)]
pub struct SetLanguage {
    language: String,
}

async fn get_language(State(store): State<Arc<PreferenceStore>>) -> Json<LanguageResponse> {
    Json(store.current().await.into())
}

async fn put_language(
    State(store): State<Arc<PreferenceStore>>,
    Json(body): Json<SetLanguage>,
) -> Result<Json<LanguageResponse>, ApiError> {
    // ---
    let lang: Language = body.language.parse()?;
    let lang = store.set_language(lang).await;
    info!("PUT /language - now '{}'", lang);
    Ok(Json(lang.into()))
}

async fn toggle_language(State(store): State<Arc<PreferenceStore>>) -> Json<LanguageResponse> {
    // ---
    let lang = store.toggle_language().await;
    info!("POST /language/toggle - now '{}'", lang);
    Json(lang.into())
}

async fn get_translations(Path(code): Path<String>) -> Result<Json<&'static Translations>, ApiError> {
    // ---
    let lang: Language = code.parse()?;
    Ok(Json(lang.translations()))
}
