//! Identifier resolution.

use std::sync::Arc;

use crate::catalog::Product;
use crate::error::CatalogResult;
use crate::store::CatalogStore;

/// How a raw query should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Case-insensitive exact product name.
    Name,
    /// Exact barcode.
    Barcode,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::Name => "name",
            LookupMode::Barcode => "barcode",
        }
    }
}

/// Turns a name or barcode into at most one product.
#[derive(Clone)]
pub struct IdentifierResolver {
    store: Arc<dyn CatalogStore>,
}

impl IdentifierResolver {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Resolve a query. `Ok(None)` means not found; `Err` is a store fault.
    ///
    /// A barcode hit is re-resolved by the matched product's name so both
    /// modes end on the same lookup.
    pub fn resolve(&self, query: &str, mode: LookupMode) -> CatalogResult<Option<Product>> {
        match mode {
            LookupMode::Name => self.store.find_by_name_ignore_case(query),
            LookupMode::Barcode => match self.store.find_by_barcode(query)? {
                Some(hit) => self.store.find_by_name_ignore_case(&hit.name),
                None => Ok(None),
            },
        }
    }
}
