/// Common test utilities for taskcards integration tests
///
/// This file contains shared functions for all integration tests: building
/// the application on a private in-memory database and sending requests to it.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use taskcards::{config::base_config, create_app, db::init_pool, run_migrations};
use tower::Service;

/// Creates a test application with an in-memory SQLite database
///
/// Each call gets its own shared-cache in-memory database, so tests are
/// isolated from each other and need no cleanup.
pub fn create_test_app() -> Router {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url).unwrap());

    let conn = &mut pool.get().unwrap();
    run_migrations(conn).unwrap();

    create_app(pool, &base_config(None))
}

/// Creates a test application whose database has no `cards` table
pub fn create_broken_test_app() -> Router {
    let database_url = format!("file:broken_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url).unwrap());
    create_app(pool, &base_config(None))
}

/// Sends a request and returns the status and the body parsed as JSON
pub async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

/// Builds a `POST /cards` request with the given raw body
pub fn post_cards(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri("/cards")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Builds a `GET` request for the given path
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}
