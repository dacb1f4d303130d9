use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::db::DbPool;
use crate::dto::{CardResponse, CreateCardDto};
use crate::errors::{ApiError, Failure};
use crate::models::{Card, NewCard};
use crate::repo;

/// Handler for creating a new card
///
/// This function handles POST requests to `/cards`. The body is decoded as
/// JSON whatever its `Content-Type`, so every decoding problem ends up as the
/// same 400 response.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `body` - The raw request body
///
/// ### Returns
///
/// `{"card": {...}}` with the stored card, or `{"card": null}` with status 400
#[instrument(skip(pool, body), fields(body_len = body.len()))]
pub async fn create_card_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardResponse>, Failure<CardResponse>> {
    info!("Creating new card");

    let payload = CreateCardDto::from_json(&body)
        .map_err(|e| ApiError::from(e).with_body(CardResponse::empty()))?;

    let card = repo::create_card(&pool, &NewCard::from(payload))
        .map_err(|e| ApiError::Database(e).with_body(CardResponse::empty()))?;

    info!("Successfully created card with id: {}", card.get_id());

    Ok(Json(CardResponse::from(card)))
}


/// Handler for retrieving a specific card
///
/// This function handles GET requests to `/cards/{id}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `id` - The ID of the card to retrieve, extracted from the URL path
///
/// ### Returns
///
/// `{"card": {...}}`, or `{"card": null}` with status 404 when absent
#[instrument(skip(pool), fields(card_id = %id))]
pub async fn get_card_handler(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<String>,
) -> Result<Json<CardResponse>, Failure<CardResponse>> {
    debug!("Getting card");

    let card_id: i64 = id
        .parse()
        .map_err(|_| ApiError::InvalidId(id.clone()).with_body(CardResponse::empty()))?;

    let card = repo::get_card(&pool, card_id)
        .map_err(|e| ApiError::Database(e).with_body(CardResponse::empty()))?
        .ok_or_else(|| ApiError::NotFound.with_body(CardResponse::empty()))?;

    Ok(Json(CardResponse::from(card)))
}


/// Handler for listing all cards
///
/// This function handles GET requests to `/cards`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// A JSON array of every card, or `[]` with status 400 on failure
#[instrument(skip(pool))]
pub async fn list_cards_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<Card>>, Failure<Vec<Card>>> {
    debug!("Listing cards");

    let cards = repo::list_cards(&pool)
        .map_err(|e| ApiError::Database(e).with_body(Vec::new()))?;

    info!("Retrieved {} cards", cards.len());

    Ok(Json(cards))
}
