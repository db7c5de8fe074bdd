//! Database layer - connection pool and album storage
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Every statement is parameterized, never string-built
//! - Rely on DB constraints (primary key) - no check-then-insert
//! - One auto-committed statement per operation

pub mod albums;
pub mod memory;
pub mod pool;

pub use albums::{AlbumStore, DbError, PgAlbumStore};
pub use memory::MemoryAlbumStore;
pub use pool::{create_pool, create_pool_with_options};
