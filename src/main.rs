//! Application entry point for the `kaabtech-hivemonitor` backend service.
//!
//! This binary runs the startup sequence for the hive monitor API:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Connecting the preference backend (PostgreSQL pool or in-memory map)
//! - Creating the database schema if it does not exist
//! - Loading the persisted display language
//! - Mounting all API routes via the `routes` gateway and serving requests
//!
//! # Environment Variables
//! - `PREFERENCE_BACKEND` (optional) – `postgres` (default) or `memory`
//! - `DATABASE_URL` (required for postgres) – PostgreSQL connection string
//! - `DB_POOL_MAX` (optional) – maximum number of DB connections (default: 5)
//! - `HTTP_PORT` (optional) – listen port (default: 8080)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use anyhow::{anyhow, Result};

mod config;
mod hives;
mod i18n;
mod models;
mod preferences;
mod routes;
mod schema;
mod stats;

pub use config::{BackendKind, Config};

// Re-exported so routes/*.rs only depend on their parent module
pub use preferences::{PreferenceBackend, PreferenceStore};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let backend = connect_backend(&cfg).await?;
    let store = Arc::new(PreferenceStore::new(backend));
    store.init().await;

    let app: Router = routes::router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Build the preference backend selected by `cfg`.
///
/// For Postgres this connects the pool and applies the schema; connection
/// or schema failures abort startup.
async fn connect_backend(cfg: &Config) -> Result<PreferenceBackend> {
    // ---
    match cfg.backend {
        BackendKind::Memory => {
            tracing::warn!("Using in-memory preference store; language resets on restart");
            Ok(PreferenceBackend::memory())
        }
        BackendKind::Postgres => {
            let db_url = cfg
                .db_url
                .as_deref()
                .ok_or_else(|| anyhow!("DATABASE_URL must be set for the postgres backend"))?;

            tracing::info!("Attempting to connect to database");

            let pool = PgPoolOptions::new()
                .max_connections(cfg.db_pool_max)
                .connect(db_url)
                .await
                .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

            tracing::info!("Successfully connected to database");

            schema::create_schema(&pool).await?;
            Ok(PreferenceBackend::Postgres(pool))
        }
    }
}

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by `RUST_LOG`, else the `AXUM_LOG_LEVEL` env var
///
/// Call once at startup before any logging macros run.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("AXUM_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},sqlx::query=warn"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
