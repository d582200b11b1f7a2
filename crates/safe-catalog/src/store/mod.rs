//! Catalog storage boundary.
//!
//! The compliance engine only talks to storage through [`CatalogStore`].
//! Every call is treated as atomic on its own; nothing spans two calls.

mod memory;

pub use memory::MemoryCatalog;

use crate::catalog::{Alternative, NewAlternative, NewProduct, Product};
use crate::error::CatalogResult;
use crate::ids::ProductId;
use crate::search::{Filter, SearchField};

/// Durable mapping from product identity to products and alternative edges.
pub trait CatalogStore: Send + Sync {
    /// Case-insensitive exact name lookup.
    fn find_by_name_ignore_case(&self, name: &str) -> CatalogResult<Option<Product>>;

    /// Exact barcode lookup.
    fn find_by_barcode(&self, barcode: &str) -> CatalogResult<Option<Product>>;

    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Every product, in store order.
    fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Products passing every filter, in store order.
    fn find_matching(&self, filters: &[Filter]) -> CatalogResult<Vec<Product>>;

    /// Exact (case-sensitive) name existence check.
    fn exists_by_name(&self, name: &str) -> CatalogResult<bool>;

    fn exists_by_barcode(&self, barcode: &str) -> CatalogResult<bool>;

    fn count(&self) -> CatalogResult<usize>;

    /// Store a new product and assign its id.
    fn insert_product(&self, product: NewProduct) -> CatalogResult<Product>;

    /// Replace a stored product wholesale.
    fn replace_product(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a product and every edge that references it.
    ///
    /// Returns `false` when no product had this id.
    fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool>;

    /// Edges sourced at the given product, highest similarity first.
    fn find_alternatives_for_boycotted(&self, id: ProductId) -> CatalogResult<Vec<Alternative>>;

    /// Every stored edge.
    fn find_all_alternatives(&self) -> CatalogResult<Vec<Alternative>>;

    /// Store a new edge. Both ends must resolve or nothing is written.
    fn insert_alternative(&self, alternative: NewAlternative) -> CatalogResult<Alternative>;

    fn find_all_boycotted(&self) -> CatalogResult<Vec<Product>> {
        self.find_matching(&[Filter::Boycotted])
    }

    fn find_all_tunisian(&self) -> CatalogResult<Vec<Product>> {
        self.find_matching(&[Filter::Tunisian])
    }

    fn find_by_category_and_tunisian(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.find_matching(&[Filter::Tunisian, Filter::category(category)])
    }

    fn search_by_name_or_field(
        &self,
        term: &str,
        field: SearchField,
    ) -> CatalogResult<Vec<Product>> {
        self.find_matching(&[Filter::text(term, field)])
    }
}
