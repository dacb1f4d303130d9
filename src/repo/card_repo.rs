use crate::db::DbPool;
use crate::models::{Card, NewCard};
use crate::schema::cards;
use diesel::prelude::*;
use anyhow::{Result, anyhow};
use tracing::{instrument, debug, info};

/// Creates a new card in the database
///
/// The row is inserted without an ID, then read back by the ID SQLite
/// assigned so the caller gets the stored row rather than its own input.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `new_card` - The field values of the card to insert
///
/// ### Returns
///
/// A Result containing the stored Card, including its assigned ID
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The insert fails
/// - The follow-up select fails or finds no row
#[instrument(skip(pool, new_card), fields(subject = %new_card.subject, task_name = %new_card.task_name))]
pub fn create_card(pool: &DbPool, new_card: &NewCard) -> Result<Card> {
    debug!("Creating new card");

    let conn = &mut pool.get()?;

    let new_id: i64 = diesel::insert_into(cards::table)
        .values(new_card)
        .returning(cards::id)
        .get_result(conn)?;

    debug!("Inserted card row with id: {}", new_id);

    let card = cards::table
        .find(new_id)
        .select(Card::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| anyhow!("card {} missing right after insert", new_id))?;

    info!("Successfully created card with id: {}", card.get_id());

    Ok(card)
}


/// Retrieves a card from the database by its ID
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `card_id` - The ID of the card to retrieve
///
/// ### Returns
///
/// A Result containing an Option with the Card if found, or None if not found
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails for reasons other than the card not existing
#[instrument(skip(pool), fields(card_id = %card_id))]
pub fn get_card(pool: &DbPool, card_id: i64) -> Result<Option<Card>> {
    debug!("Retrieving card by id");

    let conn = &mut pool.get()?;

    let result = cards::table
        .find(card_id)
        .select(Card::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("Card not found");
    }

    Ok(result)
}


/// Lists every card in the database
///
/// No filter, ordering or pagination is applied; rows come back in whatever
/// order SQLite returns them.
///
/// ### Returns
///
/// A Result containing all cards, empty when the table is empty
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
#[instrument(skip(pool))]
pub fn list_cards(pool: &DbPool) -> Result<Vec<Card>> {
    debug!("Listing all cards");

    let conn = &mut pool.get()?;

    let results = cards::table
        .select(Card::as_select())
        .load(conn)?;

    debug!("Loaded {} cards", results.len());

    Ok(results)
}


#[cfg(test)]
mod tests;
