//! Taskcards: a small REST service for task cards
//!
//! This library provides the data model, database access and web API for
//! storing task cards: short records describing an assignment, when it is
//! due and where to read about, submit and enroll in it.
//!
//! ### Modules
//!
//! - `config`: Layered configuration (defaults, TOML file, env, CLI)
//! - `db`: Database connection management
//! - `dto`: Request and response bodies
//! - `errors`: API error type and its HTTP rendering
//! - `handlers`: Axum request handlers
//! - `models`: Data structures representing cards
//! - `repo`: Repository layer for database operations
//! - `schema`: Database schema definitions
//!
//! ### Web API
//!
//! - `GET /`: Liveness text
//! - `POST /cards`: Create a new card
//! - `GET /cards`: List all cards
//! - `GET /cards/{id}`: Get a specific card by ID

pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod schema;

#[cfg(test)]
pub mod test_utils;

use anyhow::{anyhow, Result};
use axum::{
    http::{header, request::Parts, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::Config;
use crate::db::DbPool;
use crate::handlers::{create_card_handler, get_card_handler, list_cards_handler, root_handler};

/// The schema, embedded at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Checks an origin against a configured pattern
///
/// A pattern holds at most one `*`, which matches any non-empty run of
/// characters, e.g. `https://*` or `https://*.example.org`. Without a `*`
/// the origin must match exactly.
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            origin.len() > prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
        None => pattern == origin,
    }
}

/// Builds the CORS policy from the configured origins
///
/// A lone `*` allows any origin and answers with `*`; otherwise a matching
/// request origin is echoed back.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let patterns = config.allowed_origins.clone();
        AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
            match origin.to_str() {
                Ok(origin) => patterns.iter().any(|pattern| origin_matches(pattern, origin)),
                Err(_) => {
                    warn!("Rejecting non-ASCII CORS origin");
                    false
                }
            }
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300))
}

/// Creates the application router with all routes
///
/// ### Arguments
///
/// * `pool` - The database connection pool to be shared with all handlers
/// * `config` - Server configuration, used for the CORS policy
///
/// ### Returns
///
/// An Axum Router configured with all routes and the database pool as state
pub fn create_app(pool: Arc<DbPool>, config: &Config) -> Router {
    Router::new()
        // Liveness check
        .route("/", get(root_handler))
        // Route for creating and listing cards
        .route("/cards", post(create_card_handler).get(list_cards_handler))
        // Route for getting a specific card by ID
        .route("/cards/{id}", get(get_card_handler))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        // Add the database pool to the application state
        .with_state(pool)
}

/// Applies the embedded migrations that are not yet applied
///
/// ### Errors
///
/// Returns an error if any migration fails
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("failed to run migrations: {}", e))?;

    info!("Applied {} pending migrations", applied.len());

    Ok(())
}
