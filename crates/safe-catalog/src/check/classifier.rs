//! Status classification.

use crate::catalog::Product;
use crate::check::{AlternativeRanker, CheckStatus, ProductCheckResponse};
use crate::error::CatalogResult;

/// Maps a resolved (or missing) product to a check response.
#[derive(Clone)]
pub struct StatusClassifier {
    ranker: AlternativeRanker,
}

impl StatusClassifier {
    pub fn new(ranker: AlternativeRanker) -> Self {
        Self { ranker }
    }

    /// Classify a lookup result.
    ///
    /// Only the boycotted branch touches the store, to fetch suggestions.
    pub fn classify(&self, product: Option<&Product>) -> CatalogResult<ProductCheckResponse> {
        let Some(product) = product else {
            return Ok(ProductCheckResponse::not_found());
        };

        if !product.boycotted {
            return Ok(ProductCheckResponse::for_product(product, CheckStatus::Safe));
        }

        let mut response = ProductCheckResponse::for_product(product, CheckStatus::Boycotted);
        response.boycott_reason = product.boycott_reason.clone();
        response.suggestions = self.ranker.rank(product)?;
        Ok(response)
    }
}
