//! Album storage gateway
//!
//! Handles album CRUD with these patterns:
//! - insert: plain INSERT, the primary key rejects duplicates
//! - get: fetch_optional, zero rows become `DbError::NotFound`
//! - update/delete: affected-row count is ignored

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Album;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: album '{id}'")]
    NotFound { id: String },

    #[error("duplicate: album '{id}' already exists")]
    Duplicate { id: String },
}

/// Storage operations the HTTP handlers depend on.
///
/// `update` and `delete` succeed whether or not a row matched the id.
#[async_trait]
pub trait AlbumStore: Send + Sync + 'static {
    /// Every album, in no particular order.
    async fn list_all(&self) -> Result<Vec<Album>, DbError>;

    async fn insert(&self, album: &Album) -> Result<(), DbError>;

    async fn get_by_id(&self, id: &str) -> Result<Album, DbError>;

    async fn update(&self, id: &str, title: &str, price: f64) -> Result<(), DbError>;

    async fn delete(&self, id: &str) -> Result<(), DbError>;
}

/// PostgreSQL-backed album store
#[derive(Clone)]
pub struct PgAlbumStore {
    pool: PgPool,
}

impl PgAlbumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl AlbumStore for PgAlbumStore {
    async fn list_all(&self) -> Result<Vec<Album>, DbError> {
        let albums = sqlx::query_as::<_, Album>("SELECT id, title, price FROM albums")
            .fetch_all(&self.pool)
            .await?;
        Ok(albums)
    }

    async fn insert(&self, album: &Album) -> Result<(), DbError> {
        sqlx::query("INSERT INTO albums (id, title, price) VALUES ($1, $2, $3)")
            .bind(&album.id)
            .bind(&album.title)
            .bind(album.price)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Duplicate {
                    id: album.id.clone(),
                },
                other => DbError::Sqlx(other),
            })?;
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Album, DbError> {
        sqlx::query_as::<_, Album>("SELECT id, title, price FROM albums WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound { id: id.to_owned() })
    }

    async fn update(&self, id: &str, title: &str, price: f64) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE albums SET title = $1, price = $2 WHERE id = $3")
            .bind(title)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "album update");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "album delete");
        Ok(())
    }
}
