//! Error types for colorlore

use thiserror::Error;

/// Result type for colorlore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colorlore operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Hex string is not `#RGB` or `#RRGGBB`
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// Collection id is not one of the known catalogs
    #[error("Unknown collection: {0:?}")]
    UnknownCollection(String),

    /// A catalog record failed validation
    #[error("Invalid catalog entry '{id}': {reason}")]
    CatalogEntry { id: String, reason: String },

    /// Two catalog records share the same id
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// JSON could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Swatch name does not fit a 16-bit length prefix
    #[error("Swatch name too long: {units} UTF-16 units in {name:?}")]
    NameTooLong { name: String, units: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_color(input: &str) -> Self {
        Self::InvalidColorFormat(input.to_string())
    }
}
