//! Domain models with validation at construction
//!
//! Create payloads decode into [`AlbumDraft`] and only become an [`Album`]
//! after [`validate`] accepts them. Invalid input returns ValidationError,
//! not panic.

pub mod album;
pub mod validation;

pub use album::{Album, AlbumDraft, AlbumUpdate};
pub use validation::{validate, ValidationError};
