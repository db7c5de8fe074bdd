//! Create-path validation

use std::fmt;

use super::{Album, AlbumDraft};

/// Validation error for album payloads
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Required field was not supplied
    Missing { field: &'static str },

    /// Number outside its allowed range
    Negative { field: &'static str },

    /// NaN or infinite number
    NotFinite { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Negative { field } => {
                write!(f, "{} must be greater than or equal to 0", field)
            }
            Self::NotFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a decoded create payload, returning the album to persist.
///
/// Checks run in order (id, title, price) and the first failure wins.
///
/// # Example
/// ```
/// use albumctl_server::models::{validate, AlbumDraft};
///
/// let draft = AlbumDraft { id: "1".into(), title: "Giant Steps".into(), price: Some(0.0) };
/// assert!(validate(draft).is_ok());
/// ```
pub fn validate(draft: AlbumDraft) -> Result<Album, ValidationError> {
    if draft.id.is_empty() {
        return Err(ValidationError::Empty { field: "id" });
    }

    if draft.title.is_empty() {
        return Err(ValidationError::Empty { field: "title" });
    }

    let price = draft.price.ok_or(ValidationError::Missing { field: "price" })?;
    if !price.is_finite() {
        return Err(ValidationError::NotFinite { field: "price" });
    }
    if price < 0.0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(Album {
        id: draft.id,
        title: draft.title,
        price,
    })
}
