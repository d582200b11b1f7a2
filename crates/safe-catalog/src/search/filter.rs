//! Catalog filter predicates.

use crate::catalog::Product;
use crate::search::contains_folded;
use serde::{Deserialize, Serialize};

/// Second field a text search looks at besides the product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Name or brand (the consumer search).
    #[default]
    Brand,
    /// Name or description (the catalog listing search).
    Description,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Brand => "brand",
            SearchField::Description => "description",
        }
    }
}

/// A catalog filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Only boycotted products.
    Boycotted,
    /// Only local alternatives.
    Tunisian,
    /// Exact category match.
    Category(String),
    /// Case-insensitive substring in the name or the given field.
    Text { term: String, field: SearchField },
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    /// Create a text search filter.
    pub fn text(term: impl Into<String>, field: SearchField) -> Self {
        Filter::Text {
            term: term.into(),
            field,
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Boycotted => product.boycotted,
            Filter::Tunisian => product.tunisian,
            Filter::Category(category) => product.category.as_deref() == Some(category.as_str()),
            Filter::Text { term, field } => {
                if contains_folded(&product.name, term) {
                    return true;
                }
                let other = match field {
                    SearchField::Brand => product.brand.as_deref(),
                    SearchField::Description => product.description.as_deref(),
                };
                other.is_some_and(|value| contains_folded(value, term))
            }
        }
    }

    /// Whether a product passes every filter in the list.
    pub fn matches_all(filters: &[Filter], product: &Product) -> bool {
        filters.iter().all(|f| f.matches(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use crate::ids::ProductId;

    fn product(draft: NewProduct) -> Product {
        Product::from_draft(ProductId::new(1), draft)
    }

    #[test]
    fn test_text_filter_name_or_brand() {
        let p = product(
            NewProduct::new("Orange Juice")
                .with_brand("Sfaxian")
                .with_description("Fresh juice"),
        );
        assert!(Filter::text("JUICE", SearchField::Brand).matches(&p));
        assert!(Filter::text("sfax", SearchField::Brand).matches(&p));
        assert!(!Filter::text("fresh", SearchField::Brand).matches(&p));
        assert!(Filter::text("fresh", SearchField::Description).matches(&p));
        assert!(!Filter::text("sfax", SearchField::Description).matches(&p));
    }

    #[test]
    fn test_text_filter_missing_field() {
        let p = product(NewProduct::new("Harissa"));
        assert!(!Filter::text("kitchen", SearchField::Brand).matches(&p));
        assert!(Filter::text("", SearchField::Brand).matches(&p));
    }

    #[test]
    fn test_category_and_flag_filters() {
        let p = product(NewProduct::new("Tunisian Coffee").tunisian().with_category("Coffee"));
        let filters = [Filter::Tunisian, Filter::category("Coffee")];
        assert!(Filter::matches_all(&filters, &p));
        assert!(!Filter::category("coffee").matches(&p));
        assert!(!Filter::Boycotted.matches(&p));
    }

    #[test]
    fn test_search_field_names() {
        assert_eq!(SearchField::default(), SearchField::Brand);
        assert_eq!(SearchField::Description.as_str(), "description");
        assert_eq!(
            serde_json::to_string(&SearchField::Description).unwrap(),
            "\"description\""
        );
    }
}
