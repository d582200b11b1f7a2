//! Product catalog module.
//!
//! Contains the product record and the alternative edges between products.

mod alternative;
mod product;

pub use alternative::{Alternative, NewAlternative, DEFAULT_SIMILARITY_SCORE};
pub use product::{NewProduct, Product};
