//! In-memory catalog store.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::RwLock;

use crate::catalog::{Alternative, NewAlternative, NewProduct, Product};
use crate::error::{CatalogError, CatalogResult, EdgeEnd};
use crate::ids::{AlternativeId, IdSequence, ProductId};
use crate::search::{eq_folded, Filter};
use crate::store::CatalogStore;

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<ProductId, Product>,
    alternatives: Vec<Alternative>,
    product_ids: IdSequence,
    alternative_ids: IdSequence,
}

impl Inner {
    /// Uniqueness checks for a write, skipping the product being replaced.
    fn check_unique(
        &self,
        name: &str,
        barcode: Option<&str>,
        skip: Option<ProductId>,
    ) -> CatalogResult<()> {
        for existing in self.products.values() {
            if Some(existing.id) == skip {
                continue;
            }
            if eq_folded(&existing.name, name) {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }
            if let (Some(code), Some(other)) = (barcode, existing.barcode.as_deref()) {
                if code == other {
                    return Err(CatalogError::DuplicateBarcode(code.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Both ends of an edge must be stored products.
    fn check_endpoints(&self, boycotted: ProductId, alternative: ProductId) -> CatalogResult<()> {
        if !self.products.contains_key(&boycotted) {
            return Err(CatalogError::dangling(EdgeEnd::Boycotted, boycotted));
        }
        if !self.products.contains_key(&alternative) {
            return Err(CatalogError::dangling(EdgeEnd::Alternative, alternative));
        }
        Ok(())
    }
}

/// Catalog store held entirely in memory.
///
/// Products iterate in id order. Each trait call takes the lock once, so a
/// single call is atomic; consecutive calls are not.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore products and edges with their existing ids.
    ///
    /// Used to reload a persisted catalog. Ids must be unique and edges must
    /// reference loaded products.
    pub fn from_records(
        products: Vec<Product>,
        alternatives: Vec<Alternative>,
    ) -> CatalogResult<Self> {
        let mut inner = Inner::default();
        for product in products {
            product.validate()?;
            if inner.products.contains_key(&product.id) {
                return Err(CatalogError::Validation(format!(
                    "product id {} appears more than once",
                    product.id
                )));
            }
            inner.check_unique(&product.name, product.barcode.as_deref(), None)?;
            inner.product_ids.observe(product.id.get());
            inner.products.insert(product.id, product);
        }

        let mut edge_ids = BTreeSet::new();
        for edge in alternatives {
            edge.validate()?;
            if !edge_ids.insert(edge.id) {
                return Err(CatalogError::Validation(format!(
                    "alternative id {} appears more than once",
                    edge.id
                )));
            }
            inner.check_endpoints(edge.boycotted_product, edge.alternative_product)?;
            inner.alternative_ids.observe(edge.id.get());
            inner.alternatives.push(edge);
        }
        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Copy out every product and edge.
    pub fn records(&self) -> (Vec<Product>, Vec<Alternative>) {
        let inner = self.inner.read();
        (
            inner.products.values().cloned().collect(),
            inner.alternatives.clone(),
        )
    }

    /// Insert an edge without checking its endpoints.
    ///
    /// Only for exercising dangling-edge handling in tests.
    #[cfg(test)]
    pub(crate) fn force_alternative(&self, draft: NewAlternative) -> Alternative {
        let mut inner = self.inner.write();
        let id = AlternativeId::new(inner.alternative_ids.next_raw().unwrap());
        let edge = Alternative::from_draft(id, draft);
        inner.alternatives.push(edge.clone());
        edge
    }
}

impl CatalogStore for MemoryCatalog {
    fn find_by_name_ignore_case(&self, name: &str) -> CatalogResult<Option<Product>> {
        let inner = self.inner.read();
        Ok(inner.products.values().find(|p| p.has_name(name)).cloned())
    }

    fn find_by_barcode(&self, barcode: &str) -> CatalogResult<Option<Product>> {
        let inner = self.inner.read();
        Ok(inner
            .products
            .values()
            .find(|p| p.barcode.as_deref() == Some(barcode))
            .cloned())
    }

    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.inner.read().products.get(&id).cloned())
    }

    fn find_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.inner.read().products.values().cloned().collect())
    }

    fn find_matching(&self, filters: &[Filter]) -> CatalogResult<Vec<Product>> {
        let inner = self.inner.read();
        Ok(inner
            .products
            .values()
            .filter(|p| Filter::matches_all(filters, p))
            .cloned()
            .collect())
    }

    fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.inner.read().products.values().any(|p| p.name == name))
    }

    fn exists_by_barcode(&self, barcode: &str) -> CatalogResult<bool> {
        Ok(self
            .inner
            .read()
            .products
            .values()
            .any(|p| p.barcode.as_deref() == Some(barcode)))
    }

    fn count(&self) -> CatalogResult<usize> {
        Ok(self.inner.read().products.len())
    }

    fn insert_product(&self, product: NewProduct) -> CatalogResult<Product> {
        product.validate()?;
        let mut inner = self.inner.write();
        inner.check_unique(&product.name, product.barcode.as_deref(), None)?;
        let id = ProductId::new(inner.product_ids.next_raw()?);
        let stored = Product::from_draft(id, product);
        inner.products.insert(id, stored.clone());
        Ok(stored)
    }

    fn replace_product(&self, product: Product) -> CatalogResult<Product> {
        product.validate()?;
        let mut inner = self.inner.write();
        if !inner.products.contains_key(&product.id) {
            return Err(CatalogError::ProductNotFound(product.id));
        }
        inner.check_unique(&product.name, product.barcode.as_deref(), Some(product.id))?;
        inner.products.insert(product.id, product.clone());
        Ok(product)
    }

    fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool> {
        let mut inner = self.inner.write();
        if inner.products.remove(&id).is_none() {
            return Ok(false);
        }
        inner.alternatives.retain(|edge| !edge.references(id));
        Ok(true)
    }

    fn find_alternatives_for_boycotted(&self, id: ProductId) -> CatalogResult<Vec<Alternative>> {
        let inner = self.inner.read();
        let mut edges: Vec<Alternative> = inner
            .alternatives
            .iter()
            .filter(|edge| edge.boycotted_product == id)
            .cloned()
            .collect();
        // Stable sort: equal scores keep insertion order.
        edges.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        Ok(edges)
    }

    fn find_all_alternatives(&self) -> CatalogResult<Vec<Alternative>> {
        Ok(self.inner.read().alternatives.clone())
    }

    fn insert_alternative(&self, alternative: NewAlternative) -> CatalogResult<Alternative> {
        alternative.validate()?;
        let mut inner = self.inner.write();
        inner.check_endpoints(alternative.boycotted_product, alternative.alternative_product)?;
        let id = AlternativeId::new(inner.alternative_ids.next_raw()?);
        let edge = Alternative::from_draft(id, alternative);
        inner.alternatives.push(edge.clone());
        Ok(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchField;

    fn stocked() -> (MemoryCatalog, ProductId, ProductId, ProductId) {
        let store = MemoryCatalog::new();
        let cola = store
            .insert_product(
                NewProduct::new("Coca-Cola")
                    .boycotted("reason")
                    .with_barcode("5449000000036")
                    .with_category("Beverages"),
            )
            .unwrap();
        let juice = store
            .insert_product(
                NewProduct::new("Tunisian Orange Juice")
                    .tunisian()
                    .with_brand("Sfaxian")
                    .with_category("Beverages"),
            )
            .unwrap();
        let dates = store
            .insert_product(NewProduct::new("Tunisian Dates").tunisian().with_category("Sweets"))
            .unwrap();
        (store, cola.id, juice.id, dates.id)
    }

    #[test]
    fn test_ids_are_assigned_in_order() {
        let (_, cola, juice, dates) = stocked();
        assert_eq!(cola, ProductId::new(1));
        assert_eq!(juice, ProductId::new(2));
        assert_eq!(dates, ProductId::new(3));
    }

    #[test]
    fn test_name_lookup_ignores_case() {
        let (store, cola, _, _) = stocked();
        let found = store.find_by_name_ignore_case("COCA-cola").unwrap().unwrap();
        assert_eq!(found.id, cola);
        assert!(store.find_by_name_ignore_case("Coca Cola").unwrap().is_none());
    }

    #[test]
    fn test_exists_by_name_is_exact() {
        let (store, _, _, _) = stocked();
        assert!(store.exists_by_name("Coca-Cola").unwrap());
        assert!(!store.exists_by_name("coca-cola").unwrap());
    }

    #[test]
    fn test_duplicate_name_and_barcode_rejected() {
        let (store, _, _, _) = stocked();
        let err = store.insert_product(NewProduct::new("coca-cola")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(_)));

        let err = store
            .insert_product(NewProduct::new("Other").with_barcode("5449000000036"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBarcode(_)));
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_replace_keeps_own_name() {
        let (store, cola, _, _) = stocked();
        let mut product = store.find_by_id(cola).unwrap().unwrap();
        product.price = Some(3.0);
        let replaced = store.replace_product(product).unwrap();
        assert_eq!(replaced.price, Some(3.0));

        let ghost = Product::from_draft(ProductId::new(99), NewProduct::new("Ghost"));
        assert!(matches!(
            store.replace_product(ghost),
            Err(CatalogError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_filters() {
        let (store, cola, juice, dates) = stocked();
        let ids = |v: Vec<Product>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids(store.find_all_boycotted().unwrap()), vec![cola]);
        assert_eq!(ids(store.find_all_tunisian().unwrap()), vec![juice, dates]);
        assert_eq!(
            ids(store.find_by_category_and_tunisian("Beverages").unwrap()),
            vec![juice]
        );
        assert_eq!(
            ids(store.search_by_name_or_field("sfax", SearchField::Brand).unwrap()),
            vec![juice]
        );
    }

    #[test]
    fn test_alternatives_sorted_by_score() {
        let (store, cola, juice, dates) = stocked();
        store
            .insert_alternative(NewAlternative::new(cola, dates, "sweets", Some(0.75)))
            .unwrap();
        store
            .insert_alternative(NewAlternative::new(cola, juice, "juice", Some(0.85)))
            .unwrap();

        let edges = store.find_alternatives_for_boycotted(cola).unwrap();
        let scores: Vec<f64> = edges.iter().map(|e| e.similarity_score).collect();
        assert_eq!(scores, vec![0.85, 0.75]);
        assert!(store.find_alternatives_for_boycotted(juice).unwrap().is_empty());
    }

    #[test]
    fn test_alternative_with_unknown_end_writes_nothing() {
        let (store, cola, _, _) = stocked();
        let err = store
            .insert_alternative(NewAlternative::new(cola, ProductId::new(42), "x", None))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ReferentialIntegrity {
                end: EdgeEnd::Alternative,
                ..
            }
        ));
        assert!(store.find_all_alternatives().unwrap().is_empty());
    }

    #[test]
    fn test_delete_cascades_edges() {
        let (store, cola, juice, dates) = stocked();
        store
            .insert_alternative(NewAlternative::new(cola, juice, "juice", None))
            .unwrap();
        store
            .insert_alternative(NewAlternative::new(cola, dates, "dates", None))
            .unwrap();

        assert!(store.delete_by_id(juice).unwrap());
        let remaining = store.find_all_alternatives().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].alternative_product, dates);

        assert!(!store.delete_by_id(juice).unwrap());
    }

    #[test]
    fn test_from_records_continues_id_sequence() {
        let (store, _, _, _) = stocked();
        let (products, alternatives) = store.records();
        let reloaded = MemoryCatalog::from_records(products, alternatives).unwrap();
        let next = reloaded.insert_product(NewProduct::new("Harissa")).unwrap();
        assert_eq!(next.id, ProductId::new(4));
    }

    #[test]
    fn test_from_records_rejects_dangling_edge() {
        let edge = Alternative::from_draft(
            AlternativeId::new(1),
            NewAlternative::new(ProductId::new(1), ProductId::new(2), "x", None),
        );
        let result = MemoryCatalog::from_records(Vec::new(), vec![edge]);
        assert!(matches!(result, Err(CatalogError::ReferentialIntegrity { .. })));
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let a = Product::from_draft(ProductId::new(1), NewProduct::new("A"));
        let b = Product::from_draft(ProductId::new(1), NewProduct::new("B"));
        let result = MemoryCatalog::from_records(vec![a.clone(), b], Vec::new());
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        let c = Product::from_draft(ProductId::new(2), NewProduct::new("C"));
        let edge = Alternative::from_draft(
            AlternativeId::new(5),
            NewAlternative::new(a.id, c.id, "x", None),
        );
        let result = MemoryCatalog::from_records(vec![a, c], vec![edge.clone(), edge]);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_non_finite_score_never_stored() {
        let (store, cola, juice, _) = stocked();
        let err = store
            .insert_alternative(NewAlternative::new(cola, juice, "x", Some(f64::NAN)))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(store.find_all_alternatives().unwrap().is_empty());

        let (products, _) = store.records();
        let edge = Alternative::from_draft(
            AlternativeId::new(1),
            NewAlternative::new(cola, juice, "x", Some(f64::INFINITY)),
        );
        let result = MemoryCatalog::from_records(products, vec![edge]);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_exhausted_id_space_fails_insert() {
        let last = Product::from_draft(ProductId::new(u64::MAX), NewProduct::new("A"));
        let store = MemoryCatalog::from_records(vec![last], Vec::new()).unwrap();

        let err = store.insert_product(NewProduct::new("B")).unwrap_err();
        assert!(matches!(err, CatalogError::Store(_)));
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(
            store.find_by_id(ProductId::new(u64::MAX)).unwrap().map(|p| p.name),
            Some("A".to_string())
        );
    }
}
