//! Catalog error types.

use thiserror::Error;

/// Errors raised at the catalog boundary.
///
/// The pipelines themselves are total functions; these errors only surface
/// when a catalog is constructed from untrusted data or when a caller names
/// a sort key that does not exist.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Duplicate id within a catalog table.
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// Product price is negative or not a number.
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    /// Product rating outside the 0-5 range.
    #[error("Invalid rating for {id}: {rating}")]
    InvalidRating { id: String, rating: f64 },

    /// Unrecognized sort key name.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Catalog JSON could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
