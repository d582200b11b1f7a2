//! Alternative recommendation edges.

use crate::error::{CatalogError, CatalogResult};
use crate::ids::{AlternativeId, ProductId};
use serde::{Deserialize, Serialize};

/// Similarity score stored when the caller does not give one.
pub const DEFAULT_SIMILARITY_SCORE: f64 = 0.95;

/// A directed edge from a boycotted product to a recommended substitute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    /// Store-assigned identifier.
    pub id: AlternativeId,
    /// Source of the edge (the boycotted product).
    pub boycotted_product: ProductId,
    /// Target of the edge (the recommended product).
    pub alternative_product: ProductId,
    /// Why the target is a good substitute.
    pub reason: String,
    /// Ranking metric, intended to lie in [0.0, 1.0] but not enforced.
    pub similarity_score: f64,
}

/// An edge that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAlternative {
    pub boycotted_product: ProductId,
    pub alternative_product: ProductId,
    pub reason: String,
    pub similarity_score: f64,
}

impl NewAlternative {
    /// Build an edge, substituting the default score when none is given.
    pub fn new(
        boycotted_product: ProductId,
        alternative_product: ProductId,
        reason: impl Into<String>,
        similarity_score: Option<f64>,
    ) -> Self {
        Self {
            boycotted_product,
            alternative_product,
            reason: reason.into(),
            similarity_score: similarity_score.unwrap_or(DEFAULT_SIMILARITY_SCORE),
        }
    }

    /// The score may be any finite number.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_score(self.similarity_score)
    }
}

impl Alternative {
    /// Attach a store id to a draft.
    pub fn from_draft(id: AlternativeId, draft: NewAlternative) -> Self {
        Self {
            id,
            boycotted_product: draft.boycotted_product,
            alternative_product: draft.alternative_product,
            reason: draft.reason,
            similarity_score: draft.similarity_score,
        }
    }

    /// Whether the edge touches the given product at either end.
    pub fn references(&self, id: ProductId) -> bool {
        self.boycotted_product == id || self.alternative_product == id
    }

    /// The score may be any finite number.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_score(self.similarity_score)
    }
}

/// Range is not enforced; NaN and infinities are.
fn validate_score(score: f64) -> CatalogResult<()> {
    if !score.is_finite() {
        return Err(CatalogError::Validation(format!(
            "similarity score must be a finite number, got {}",
            score
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_score_substituted() {
        let edge = NewAlternative::new(ProductId::new(1), ProductId::new(2), "local", None);
        assert_eq!(edge.similarity_score, DEFAULT_SIMILARITY_SCORE);

        let edge = NewAlternative::new(ProductId::new(1), ProductId::new(2), "local", Some(0.4));
        assert_eq!(edge.similarity_score, 0.4);
    }

    #[test]
    fn test_non_finite_score_rejected() {
        for score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let edge = NewAlternative::new(ProductId::new(1), ProductId::new(2), "x", Some(score));
            assert!(matches!(edge.validate(), Err(CatalogError::Validation(_))));
        }
        let edge = NewAlternative::new(ProductId::new(1), ProductId::new(2), "x", Some(1.7));
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_references_either_end() {
        let edge = Alternative::from_draft(
            AlternativeId::new(1),
            NewAlternative::new(ProductId::new(1), ProductId::new(2), "local", None),
        );
        assert!(edge.references(ProductId::new(1)));
        assert!(edge.references(ProductId::new(2)));
        assert!(!edge.references(ProductId::new(3)));
    }
}
