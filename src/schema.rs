//! Database schema management for `kaabtech-hivemonitor`.
//!
//! Ensures the preference table exists before serving requests.
//! Applied once on startup from `main.rs` when the Postgres backend is used.

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create the database schema (idempotent).
///
/// Creates the `preferences` key-value table backing the language
/// preference. Safe to call on every startup; no-op if it already exists.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            key        TEXT        PRIMARY KEY,
            value      TEXT        NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::debug!("Schema ready");
    Ok(())
}
