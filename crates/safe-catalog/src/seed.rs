//! Catalog documents.
//!
//! Two shapes are read and written:
//!
//! - [`CatalogSeed`]: hand-written import data. Products carry no ids and
//!   alternatives reference products by name. Every write goes through the
//!   service, so the usual invariants apply.
//! - [`CatalogSnapshot`]: an exact dump of a store, ids included, so that
//!   ids quoted by users stay valid across reloads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Alternative, NewProduct, Product};
use crate::error::{CatalogError, CatalogResult};
use crate::service::ComplianceService;
use crate::store::MemoryCatalog;

/// Encoding of a catalog document, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }

    fn decode<T: for<'de> Deserialize<'de>>(self, content: &str) -> CatalogResult<T> {
        match self {
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
            DocumentFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    fn encode<T: Serialize>(self, value: &T) -> CatalogResult<String> {
        match self {
            DocumentFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            DocumentFormat::Toml => Ok(toml::to_string_pretty(value)?),
        }
    }
}

/// An alternative edge referencing products by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSeed {
    pub boycotted: String,
    pub alternative: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl AlternativeSeed {
    pub fn new(
        boycotted: impl Into<String>,
        alternative: impl Into<String>,
        reason: impl Into<String>,
        similarity_score: f64,
    ) -> Self {
        Self {
            boycotted: boycotted.into(),
            alternative: alternative.into(),
            reason: reason.into(),
            similarity_score: Some(similarity_score),
        }
    }
}

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeedReport {
    pub products: usize,
    pub alternatives: usize,
    /// The store already held products, so nothing was written.
    pub skipped: bool,
}

/// Import document for an initial catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<NewProduct>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeSeed>,
}

impl CatalogSeed {
    pub fn parse(content: &str, format: DocumentFormat) -> CatalogResult<Self> {
        format.decode(content)
    }

    pub fn render(&self, format: DocumentFormat) -> CatalogResult<String> {
        format.encode(self)
    }

    /// Seed only when the store holds no products yet.
    pub fn apply_if_empty(&self, service: &ComplianceService) -> CatalogResult<SeedReport> {
        if service.store().count()? > 0 {
            tracing::debug!("catalog already populated, skipping seed");
            return Ok(SeedReport {
                skipped: true,
                ..SeedReport::default()
            });
        }
        self.apply(service)
    }

    /// Add every product, then every edge.
    ///
    /// Stops at the first failure; earlier writes are kept.
    pub fn apply(&self, service: &ComplianceService) -> CatalogResult<SeedReport> {
        let mut report = SeedReport::default();
        for product in &self.products {
            service.add_product(product.clone())?;
            report.products += 1;
        }
        for edge in &self.alternatives {
            let source = lookup(service, &edge.boycotted)?;
            let target = lookup(service, &edge.alternative)?;
            service.add_alternative(source.id, target.id, &edge.reason, edge.similarity_score)?;
            report.alternatives += 1;
        }
        tracing::info!(
            products = report.products,
            alternatives = report.alternatives,
            "catalog seeded"
        );
        Ok(report)
    }

    /// The built-in starter catalog.
    pub fn demo() -> Self {
        let products = vec![
            NewProduct::new("Coca-Cola")
                .with_description("Soft drink")
                .with_category("Beverages")
                .with_brand("Coca-Cola")
                .with_barcode("5449000000036")
                .boycotted("Company supporting Israeli occupation")
                .with_price(2.5),
            NewProduct::new("Nescafe")
                .with_description("Instant coffee")
                .with_category("Coffee")
                .with_brand("Nescafe")
                .with_barcode("7613034728899")
                .boycotted("Nestle products supporting occupation")
                .with_price(5.0),
            NewProduct::new("Starbucks products")
                .with_description("Coffee and pastries")
                .with_category("Cafes")
                .with_brand("Starbucks")
                .boycotted("Starbucks supporting occupation")
                .with_price(6.0),
            NewProduct::new("Tunisian Coffee")
                .with_description("Local coffee")
                .with_category("Coffee")
                .with_brand("Halal Coffee")
                .with_barcode("9876543210")
                .tunisian()
                .with_price(3.5),
            NewProduct::new("Tunisian Orange Juice")
                .with_description("Fresh juice")
                .with_category("Beverages")
                .with_brand("Sfaxian")
                .with_barcode("1234567890")
                .tunisian()
                .with_price(2.0),
            NewProduct::new("Tunisian Dates")
                .with_description("Dried dates")
                .with_category("Sweets")
                .with_brand("Tunisian Dates")
                .with_barcode("5555555555")
                .tunisian()
                .with_price(15.0),
            NewProduct::new("Tunisian Harissa")
                .with_description("Spicy paste")
                .with_category("Spices")
                .with_brand("Mother's Kitchen")
                .with_barcode("3333333333")
                .tunisian()
                .with_price(4.5),
            NewProduct::new("Tunisian Mloukhia")
                .with_description("Whole grains")
                .with_category("Grains")
                .with_brand("Tunisian Field")
                .with_barcode("4444444444")
                .tunisian()
                .with_price(8.0),
        ];

        let alternatives = vec![
            AlternativeSeed::new(
                "Coca-Cola",
                "Tunisian Orange Juice",
                "Healthy Tunisian juice alternative",
                0.85,
            ),
            AlternativeSeed::new("Nescafe", "Tunisian Coffee", "Tunisian made coffee", 0.90),
            AlternativeSeed::new(
                "Starbucks products",
                "Tunisian Coffee",
                "High quality Tunisian coffee",
                0.88,
            ),
            AlternativeSeed::new("Coca-Cola", "Tunisian Dates", "Healthy Tunisian sweets", 0.75),
        ];

        Self {
            products,
            alternatives,
        }
    }
}

fn lookup(service: &ComplianceService, name: &str) -> CatalogResult<Product> {
    service
        .find_by_name(name)?
        .ok_or_else(|| CatalogError::Validation(format!("seed references unknown product '{}'", name)))
}

/// Exact dump of a catalog, ids included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl CatalogSnapshot {
    /// Capture the current contents of an in-memory catalog.
    pub fn capture(store: &MemoryCatalog) -> Self {
        let (products, alternatives) = store.records();
        Self {
            products,
            alternatives,
        }
    }

    /// Rebuild an in-memory catalog, validating every record.
    pub fn restore(self) -> CatalogResult<MemoryCatalog> {
        MemoryCatalog::from_records(self.products, self.alternatives)
    }

    pub fn parse(content: &str, format: DocumentFormat) -> CatalogResult<Self> {
        format.decode(content)
    }

    pub fn render(&self, format: DocumentFormat) -> CatalogResult<String> {
        format.encode(self)
    }
}
