//! Product types.

use crate::error::{CatalogError, CatalogResult};
use crate::ids::ProductId;
use crate::search::eq_folded;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are only ever replaced as a whole; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Product name, unique and compared case-insensitively.
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label (e.g. "Beverages").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Barcode, unique when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Whether the product is on the boycott list.
    #[serde(default)]
    pub boycotted: bool,
    /// Why the product is boycotted. Present exactly when `boycotted` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boycott_reason: Option<String>,
    /// Whether the product is a locally sourced (Tunisian) alternative.
    #[serde(default)]
    pub tunisian: bool,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Shelf price, never negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Product {
    /// Attach a store id to a draft.
    pub fn from_draft(id: ProductId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            brand: draft.brand,
            barcode: draft.barcode,
            boycotted: draft.boycotted,
            boycott_reason: draft.boycott_reason,
            tunisian: draft.tunisian,
            image_url: draft.image_url,
            price: draft.price,
        }
    }

    /// Check the write-time invariants.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_fields(
            &self.name,
            self.boycotted,
            self.boycott_reason.as_deref(),
            self.tunisian,
            self.price,
        )
    }

    /// Case-insensitive exact name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        eq_folded(&self.name, name)
    }
}

/// A product that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default)]
    pub boycotted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boycott_reason: Option<String>,
    #[serde(default)]
    pub tunisian: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl NewProduct {
    /// Create a draft with only a name; every flag is off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Flag as boycotted with the given reason.
    pub fn boycotted(mut self, reason: impl Into<String>) -> Self {
        self.boycotted = true;
        self.boycott_reason = Some(reason.into());
        self
    }

    /// Flag as a local alternative.
    pub fn tunisian(mut self) -> Self {
        self.tunisian = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Check the write-time invariants.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_fields(
            &self.name,
            self.boycotted,
            self.boycott_reason.as_deref(),
            self.tunisian,
            self.price,
        )
    }
}

fn validate_fields(
    name: &str,
    boycotted: bool,
    boycott_reason: Option<&str>,
    tunisian: bool,
    price: Option<f64>,
) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("product name is required".into()));
    }
    if boycotted && tunisian {
        return Err(CatalogError::Validation(format!(
            "'{}' cannot be both boycotted and a Tunisian alternative",
            name
        )));
    }
    let has_reason = boycott_reason.is_some_and(|r| !r.trim().is_empty());
    if boycotted && !has_reason {
        return Err(CatalogError::Validation(format!(
            "boycotted product '{}' needs a boycott reason",
            name
        )));
    }
    if !boycotted && boycott_reason.is_some() {
        return Err(CatalogError::Validation(format!(
            "'{}' has a boycott reason but is not boycotted",
            name
        )));
    }
    if let Some(price) = price {
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::Validation(format!(
                "price of '{}' must be a non-negative amount, got {}",
                name, price
            )));
        }
    }
    Ok(())
}
