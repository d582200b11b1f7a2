//! Boycott compliance lookups with local alternative recommendations.
//!
//! This crate answers one question: "is this product boycotted, and if so
//! what should I buy instead?"
//!
//! - **Catalog**: products and scored alternative edges between them
//! - **Store**: the storage boundary plus an in-memory implementation
//! - **Check**: identifier resolution, status classification, ranking
//! - **Search**: case-insensitive text search and flag/category filters
//! - **Seed**: import documents and store snapshots
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use safe_catalog::prelude::*;
//!
//! let service = ComplianceService::new(Arc::new(MemoryCatalog::new()));
//! CatalogSeed::demo().apply_if_empty(&service).unwrap();
//!
//! let response = service.check_by_name("coca-cola").unwrap();
//! assert_eq!(response.status, CheckStatus::Boycotted);
//! assert_eq!(response.suggestions[0].name, "Tunisian Orange Juice");
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod check;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{CatalogError, CatalogResult, EdgeEnd};
pub use ids::*;
pub use service::ComplianceService;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, CatalogResult, EdgeEnd};
    pub use crate::ids::{AlternativeId, ProductId};
    pub use crate::service::ComplianceService;

    // Catalog
    pub use crate::catalog::{
        Alternative, NewAlternative, NewProduct, Product, DEFAULT_SIMILARITY_SCORE,
    };

    // Check
    pub use crate::check::{CheckStatus, LookupMode, ProductCheckResponse, Suggestion};

    // Search
    pub use crate::search::{Filter, SearchField};

    // Storage
    pub use crate::seed::{CatalogSeed, CatalogSnapshot, DocumentFormat, SeedReport};
    pub use crate::store::{CatalogStore, MemoryCatalog};
}
