use anyhow::{Context, Result};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use tracing::{debug, instrument};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Builds the connection pool shared by every request handler
///
/// ### Arguments
///
/// * `database_url` - A SQLite path or `file:` URI
///
/// ### Errors
///
/// Returns an error if the pool cannot open its initial connections
#[instrument]
pub fn init_pool(database_url: &str) -> Result<DbPool> {
    debug!("Opening connection pool");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .with_context(|| format!("failed to create pool for {database_url}"))
}
