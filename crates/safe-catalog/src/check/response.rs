//! Check response types.

use crate::catalog::{Alternative, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

pub const MESSAGE_NOT_FOUND: &str = "Product not found";
pub const MESSAGE_SAFE: &str = "This product is safe to consume";
pub const MESSAGE_BOYCOTTED: &str = "This product may be on the boycott list!";

/// Outcome of a compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Safe,
    Boycotted,
    NotFound,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Safe => "SAFE",
            CheckStatus::Boycotted => "BOYCOTTED",
            CheckStatus::NotFound => "NOT_FOUND",
        }
    }

    /// User-facing message for this status.
    pub fn message(&self) -> &'static str {
        match self {
            CheckStatus::Safe => MESSAGE_SAFE,
            CheckStatus::Boycotted => MESSAGE_BOYCOTTED,
            CheckStatus::NotFound => MESSAGE_NOT_FOUND,
        }
    }
}

/// A recommended substitute for a boycotted product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub product_id: ProductId,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub similarity_score: f64,
    pub reason: String,
}

impl Suggestion {
    /// Project an edge and its target product.
    pub fn project(edge: &Alternative, target: &Product) -> Self {
        Self {
            product_id: target.id,
            name: target.name.clone(),
            brand: target.brand.clone(),
            category: target.category.clone(),
            price: target.price,
            image_url: target.image_url.clone(),
            similarity_score: edge.similarity_score,
            reason: edge.reason.clone(),
        }
    }
}

/// Request-scoped answer to "is this product boycotted?".
///
/// Product fields stay empty for `NOT_FOUND`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCheckResponse {
    pub product_id: Option<ProductId>,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub boycotted: bool,
    pub boycott_reason: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub message: String,
    pub status: CheckStatus,
}

impl ProductCheckResponse {
    /// Response for an identifier that did not resolve.
    pub fn not_found() -> Self {
        Self {
            product_id: None,
            product_name: None,
            brand: None,
            boycotted: false,
            boycott_reason: None,
            suggestions: Vec::new(),
            message: MESSAGE_NOT_FOUND.to_string(),
            status: CheckStatus::NotFound,
        }
    }

    /// Response echoing a resolved product with the given status.
    pub(crate) fn for_product(product: &Product, status: CheckStatus) -> Self {
        Self {
            product_id: Some(product.id),
            product_name: Some(product.name.clone()),
            brand: product.brand.clone(),
            boycotted: product.boycotted,
            boycott_reason: None,
            suggestions: Vec::new(),
            message: status.message().to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&CheckStatus::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
        assert_eq!(CheckStatus::Boycotted.as_str(), "BOYCOTTED");
    }

    #[test]
    fn test_not_found_shape() {
        let response = ProductCheckResponse::not_found();
        assert_eq!(response.message, "Product not found");
        assert!(response.product_id.is_none());
        assert!(response.suggestions.is_empty());
        assert_eq!(response.status, CheckStatus::NotFound);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "NOT_FOUND");
        assert!(json["productName"].is_null());
    }
}
