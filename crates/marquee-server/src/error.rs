//! Error types for the catalog service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog operation failures; the `Display` strings are the plain-text
/// bodies the HTTP layer sends back.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No movies found for genre: {0}")]
    GenreNotFound(String),

    #[error("Invalid movie data")]
    InvalidMovie,
}
