//! Album record and its request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted album row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub price: f64,
}

impl Album {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
        }
    }
}

/// Create payload as decoded from the request body.
///
/// Absent strings decode as empty so the validator, not the decoder,
/// reports them. `price` stays optional so a missing price is
/// distinguishable from `0`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Update payload. Not validated; absent fields take their zero values.
///
/// An `id` in the body is ignored, the path id always wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlbumUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
}
