use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Invalid card id: {0}")]
    InvalidId(String),
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
    #[error("Card not found")]
    NotFound,
}

impl ApiError {
    /// The status code reported to the client
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) | ApiError::InvalidId(_) | ApiError::Database(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Pairs the error with the payload the endpoint returns on failure
    pub fn with_body<B: Serialize>(self, body: B) -> Failure<B> {
        Failure { error: self, body }
    }
}

/// A failed request: the error is logged, only `body` reaches the client
#[derive(Debug)]
pub struct Failure<B> {
    pub error: ApiError,
    pub body: B,
}

impl<B: Serialize> IntoResponse for Failure<B> {
    fn into_response(self) -> Response {
        let status = self.error.status();
        warn!(status = %status, "request failed: {}", self.error);
        (status, Json(self.body)).into_response()
    }
}
