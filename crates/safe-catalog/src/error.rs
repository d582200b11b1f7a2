//! Catalog error types.

use crate::ids::ProductId;
use std::fmt;
use thiserror::Error;

/// Which end of an alternative edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// The boycotted product the edge starts from.
    Boycotted,
    /// The recommended product the edge points to.
    Alternative,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Boycotted => write!(f, "boycotted"),
            EdgeEnd::Alternative => write!(f, "alternative"),
        }
    }
}

/// Errors that can occur in catalog operations.
///
/// An unknown product name or barcode is not an error: lookups answer with a
/// `NOT_FOUND` response instead.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An alternative edge references a product id that does not resolve.
    #[error("Referential integrity violation: {end} product {id} does not exist")]
    ReferentialIntegrity { end: EdgeEnd, id: ProductId },

    /// Product not found (delete of an unknown id).
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A product write broke a catalog invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Another product already carries this barcode.
    #[error("Barcode already in use: {0}")]
    DuplicateBarcode(String),

    /// Another product already carries this name (case-insensitive).
    #[error("Product name already in use: {0}")]
    DuplicateName(String),

    /// Fault raised by the backing store.
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    /// Shorthand for a dangling edge endpoint.
    pub fn dangling(end: EdgeEnd, id: ProductId) -> Self {
        CatalogError::ReferentialIntegrity { end, id }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(e: toml::ser::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
