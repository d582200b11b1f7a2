//! Alternative ranking.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::catalog::Product;
use crate::check::Suggestion;
use crate::error::{CatalogError, CatalogResult, EdgeEnd};
use crate::store::CatalogStore;

/// Orders and projects the alternative edges of a boycotted product.
#[derive(Clone)]
pub struct AlternativeRanker {
    store: Arc<dyn CatalogStore>,
}

impl AlternativeRanker {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Suggestions for `boycotted`, highest similarity first.
    ///
    /// An edge whose target no longer exists fails the whole ranking.
    pub fn rank(&self, boycotted: &Product) -> CatalogResult<Vec<Suggestion>> {
        let edges = self.store.find_alternatives_for_boycotted(boycotted.id)?;

        let mut suggestions = Vec::with_capacity(edges.len());
        for edge in &edges {
            let target = self
                .store
                .find_by_id(edge.alternative_product)?
                .ok_or_else(|| {
                    tracing::error!(
                        edge = %edge.id,
                        boycotted = %boycotted.id,
                        target = %edge.alternative_product,
                        "alternative edge points at a missing product"
                    );
                    CatalogError::dangling(EdgeEnd::Alternative, edge.alternative_product)
                })?;
            suggestions.push(Suggestion::project(edge, &target));
        }

        suggestions.sort_by(by_rank);
        Ok(suggestions)
    }
}

/// Descending score, then ascending target id.
fn by_rank(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.similarity_score
        .total_cmp(&a.similarity_score)
        .then_with(|| a.product_id.cmp(&b.product_id))
}
