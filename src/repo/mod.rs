/// Repository module
///
/// This module provides the data access layer for the application.
/// Each function takes the connection pool, checks out one connection and
/// performs a single round trip (create performs an insert followed by a
/// select of the new row).

mod card_repo;

// Re-export all repository functions
pub use card_repo::*;
