//! albumctl-server: HTTP server for album records
//!
//! Exposes list/create/get/update/delete over a single `albums` table.
//! Storage sits behind the [`db::AlbumStore`] trait so the router can be
//! driven against PostgreSQL or an in-process store.

pub mod db;
pub mod http;
pub mod models;

pub use db::{AlbumStore, DbError, MemoryAlbumStore, PgAlbumStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Album, AlbumDraft, AlbumUpdate, ValidationError};
