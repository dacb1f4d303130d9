/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler decodes its input, calls the matching repository function
/// and encodes the result, pairing any failure with the endpoint's empty
/// payload.

mod card_handlers;

// Re-export all handlers
pub use card_handlers::*;

/// Handler for `GET /`, used as a liveness check
pub async fn root_handler() -> &'static str {
    "up and running"
}
