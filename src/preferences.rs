//! Persisted display-language preference.
//!
//! The preference is one string token under a fixed key. Reads that fail or
//! return an unknown token fall back to the default language, and failed
//! writes are logged and dropped, so callers never see a storage error.

use std::{collections::HashMap, sync::Mutex};

use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::i18n::Language;

// ---

/// Storage key for the selected language.
pub const LANGUAGE_KEY: &str = "@kaab_tech_language";

/// Failure in the underlying key-value storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage the preference is written to.
#[derive(Debug)]
pub enum PreferenceBackend {
    /// `preferences` table, see [`crate::schema`].
    Postgres(PgPool),
    /// Process-local map. Nothing survives a restart.
    Memory(Mutex<HashMap<String, String>>),
}

impl PreferenceBackend {
    // ---
    pub fn memory() -> Self {
        PreferenceBackend::Memory(Mutex::new(HashMap::new()))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        // ---
        match self {
            PreferenceBackend::Postgres(pool) => {
                let value = sqlx::query_scalar::<_, String>(
                    "SELECT value FROM preferences WHERE key = $1",
                )
                .bind(key)
                .fetch_optional(pool)
                .await?;
                Ok(value)
            }
            PreferenceBackend::Memory(map) => {
                let value = lock_map(map)?.get(key).cloned();
                Ok(value)
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // ---
        match self {
            PreferenceBackend::Postgres(pool) => {
                sqlx::query(
                    r#"
                    INSERT INTO preferences (key, value, updated_at)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (key) DO UPDATE SET
                        value = EXCLUDED.value,
                        updated_at = EXCLUDED.updated_at
                    "#,
                )
                .bind(key)
                .bind(value)
                .bind(chrono::Utc::now())
                .execute(pool)
                .await?;
                Ok(())
            }
            PreferenceBackend::Memory(map) => {
                lock_map(map)?.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }
}

fn lock_map(
    map: &Mutex<HashMap<String, String>>,
) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
    map.lock()
        .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
}

/// Language preference with an in-memory cached value.
#[derive(Debug)]
pub struct PreferenceStore {
    // ---
    backend: PreferenceBackend,
    current: RwLock<Language>,
}

impl PreferenceStore {
    // ---
    /// Wrap `backend` with the default language cached. Call [`Self::init`]
    /// to pick up the persisted value.
    pub fn new(backend: PreferenceBackend) -> Self {
        Self {
            backend,
            current: RwLock::new(Language::default()),
        }
    }

    /// Load the persisted language into the cache and return it.
    pub async fn init(&self) -> Language {
        // ---
        let lang = self.load().await;
        *self.current.write().await = lang;
        info!("Language preference initialised to '{}'", lang);
        lang
    }

    /// Read the persisted language, or the default when it is missing,
    /// unrecognised, or storage fails.
    pub async fn load(&self) -> Language {
        // ---
        match self.backend.get(LANGUAGE_KEY).await {
            Ok(Some(token)) => token.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored language preference: {}", e);
                Language::default()
            }),
            Ok(None) => {
                debug!("No stored language preference, using default");
                Language::default()
            }
            Err(e) => {
                error!("Error loading language: {}", e);
                Language::default()
            }
        }
    }

    /// Persist `lang`. Storage errors are logged, never returned.
    pub async fn save(&self, lang: Language) {
        // ---
        match self.backend.set(LANGUAGE_KEY, lang.code()).await {
            Ok(()) => debug!("Saved language preference '{}'", lang),
            Err(e) => error!("Error saving language: {}", e),
        }
    }

    /// Cached language for this process.
    pub async fn current(&self) -> Language {
        *self.current.read().await
    }

    /// Switch the cached language and persist it.
    pub async fn set_language(&self, lang: Language) -> Language {
        // ---
        *self.current.write().await = lang;
        self.save(lang).await;
        lang
    }

    /// Flip between the two languages and persist the result.
    pub async fn toggle_language(&self) -> Language {
        // ---
        let next = {
            let mut current = self.current.write().await;
            *current = current.toggle();
            *current
        };
        self.save(next).await;
        next
    }
}
