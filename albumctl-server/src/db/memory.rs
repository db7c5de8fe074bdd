//! In-process album store
//!
//! Mirrors the PostgreSQL store's observable behaviour (duplicate ids are
//! rejected, update/delete of a missing id succeed) so the router can be
//! exercised without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::albums::{AlbumStore, DbError};
use crate::models::Album;

#[derive(Default)]
pub struct MemoryAlbumStore {
    albums: RwLock<BTreeMap<String, Album>>,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list_all(&self) -> Result<Vec<Album>, DbError> {
        Ok(self.albums.read().await.values().cloned().collect())
    }

    async fn insert(&self, album: &Album) -> Result<(), DbError> {
        let mut albums = self.albums.write().await;
        if albums.contains_key(&album.id) {
            return Err(DbError::Duplicate {
                id: album.id.clone(),
            });
        }
        albums.insert(album.id.clone(), album.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Album, DbError> {
        self.albums
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DbError::NotFound { id: id.to_owned() })
    }

    async fn update(&self, id: &str, title: &str, price: f64) -> Result<(), DbError> {
        if let Some(album) = self.albums.write().await.get_mut(id) {
            album.title = title.to_owned();
            album.price = price;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbError> {
        self.albums.write().await.remove(id);
        Ok(())
    }
}
