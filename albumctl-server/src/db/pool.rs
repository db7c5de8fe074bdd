//! PostgreSQL pool for the album table
//!
//! The serve command builds one pool at startup, hands it to
//! [`PgAlbumStore`](super::PgAlbumStore), and closes it after shutdown.
//! Handlers never see the pool directly.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect a pool of at most `max_connections`.
///
/// One connection is opened before returning, so a wrong URL or a database
/// that is down surfaces here and startup aborts instead of the first
/// request failing with a 500.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting album database");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
