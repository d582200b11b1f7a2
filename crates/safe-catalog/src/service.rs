//! Compliance service.
//!
//! The operations a transport or CLI calls. Each component receives the
//! store it works against; there is no global state.

use std::sync::Arc;

use crate::catalog::{Alternative, NewAlternative, NewProduct, Product};
use crate::check::{
    AlternativeRanker, IdentifierResolver, LookupMode, ProductCheckResponse, StatusClassifier,
};
use crate::error::{CatalogError, CatalogResult, EdgeEnd};
use crate::ids::ProductId;
use crate::search::SearchField;
use crate::store::CatalogStore;

/// Boycott lookups, listings and catalog edits over one store.
#[derive(Clone)]
pub struct ComplianceService {
    store: Arc<dyn CatalogStore>,
    resolver: IdentifierResolver,
    classifier: StatusClassifier,
}

impl ComplianceService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        let resolver = IdentifierResolver::new(store.clone());
        let classifier = StatusClassifier::new(AlternativeRanker::new(store.clone()));
        Self {
            store,
            resolver,
            classifier,
        }
    }

    /// The store this service reads and writes.
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Is the named product boycotted, and what should replace it?
    pub fn check_by_name(&self, name: &str) -> CatalogResult<ProductCheckResponse> {
        self.check(name, LookupMode::Name)
    }

    /// Same as [`check_by_name`](Self::check_by_name), keyed by barcode.
    pub fn check_by_barcode(&self, barcode: &str) -> CatalogResult<ProductCheckResponse> {
        self.check(barcode, LookupMode::Barcode)
    }

    fn check(&self, query: &str, mode: LookupMode) -> CatalogResult<ProductCheckResponse> {
        let product = self.resolver.resolve(query, mode)?;
        let response = self.classifier.classify(product.as_ref())?;
        tracing::debug!(
            query,
            mode = mode.as_str(),
            status = response.status.as_str(),
            suggestions = response.suggestions.len(),
            "product checked"
        );
        Ok(response)
    }

    /// Boycott flag for a name; unknown names count as not boycotted.
    pub fn is_boycotted(&self, name: &str) -> CatalogResult<bool> {
        Ok(self
            .store
            .find_by_name_ignore_case(name)?
            .is_some_and(|p| p.boycotted))
    }

    /// Stored boycott reason, `None` for unknown or non-boycotted products.
    pub fn get_boycott_reason(&self, name: &str) -> CatalogResult<Option<String>> {
        Ok(self
            .store
            .find_by_name_ignore_case(name)?
            .and_then(|p| p.boycott_reason))
    }

    /// Name-or-brand substring search.
    pub fn search_products(&self, term: &str) -> CatalogResult<Vec<Product>> {
        self.search(term, SearchField::Brand)
    }

    /// Name-or-description substring search.
    pub fn search_descriptions(&self, term: &str) -> CatalogResult<Vec<Product>> {
        self.search(term, SearchField::Description)
    }

    pub fn search(&self, term: &str, field: SearchField) -> CatalogResult<Vec<Product>> {
        self.store.search_by_name_or_field(term, field)
    }

    pub fn list_tunisian(&self) -> CatalogResult<Vec<Product>> {
        self.store.find_all_tunisian()
    }

    pub fn list_tunisian_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.store.find_by_category_and_tunisian(category)
    }

    pub fn list_boycotted(&self) -> CatalogResult<Vec<Product>> {
        self.store.find_all_boycotted()
    }

    pub fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.store.find_all()
    }

    pub fn get_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.store.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> CatalogResult<Option<Product>> {
        self.store.find_by_name_ignore_case(name)
    }

    /// Exact, case-sensitive name check.
    pub fn product_exists(&self, name: &str) -> CatalogResult<bool> {
        self.store.exists_by_name(name)
    }

    pub fn barcode_exists(&self, barcode: &str) -> CatalogResult<bool> {
        self.store.exists_by_barcode(barcode)
    }

    /// Store a new product.
    pub fn add_product(&self, product: NewProduct) -> CatalogResult<Product> {
        let saved = self.store.insert_product(product)?;
        tracing::info!(id = %saved.id, name = %saved.name, "product saved");
        Ok(saved)
    }

    /// Replace a stored product wholesale.
    pub fn update_product(&self, product: Product) -> CatalogResult<Product> {
        let replaced = self.store.replace_product(product)?;
        tracing::info!(id = %replaced.id, name = %replaced.name, "product replaced");
        Ok(replaced)
    }

    /// Delete a product together with every edge that references it.
    pub fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        if !self.store.delete_by_id(id)? {
            return Err(CatalogError::ProductNotFound(id));
        }
        tracing::info!(%id, "deleted product");
        Ok(())
    }

    /// Recommend `alternative_id` in place of `boycotted_id`.
    ///
    /// A missing score defaults to 0.95; a given one must be finite. Both
    /// ids must resolve; otherwise nothing is written.
    pub fn add_alternative(
        &self,
        boycotted_id: ProductId,
        alternative_id: ProductId,
        reason: &str,
        similarity_score: Option<f64>,
    ) -> CatalogResult<Alternative> {
        let draft = NewAlternative::new(boycotted_id, alternative_id, reason, similarity_score);
        draft.validate()?;

        let source = self
            .store
            .find_by_id(boycotted_id)?
            .ok_or_else(|| CatalogError::dangling(EdgeEnd::Boycotted, boycotted_id))?;
        let target = self
            .store
            .find_by_id(alternative_id)?
            .ok_or_else(|| CatalogError::dangling(EdgeEnd::Alternative, alternative_id))?;

        if target.boycotted {
            tracing::warn!(
                source = %source.name,
                target = %target.name,
                "recommended alternative is itself boycotted"
            );
        }

        let edge = self.store.insert_alternative(draft)?;
        tracing::info!(
            source = %source.name,
            target = %target.name,
            score = edge.similarity_score,
            "alternative added"
        );
        Ok(edge)
    }
}
