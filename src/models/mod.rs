/// Data models module
///
/// This module defines the rows stored in the `cards` table: the queryable
/// `Card` and the insertable `NewCard` it is created from.

mod card;
pub use card::{Card, NewCard};
