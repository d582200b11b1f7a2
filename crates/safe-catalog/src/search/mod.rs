//! Search module.
//!
//! Text matching here and name resolution in `check` share one rule: the
//! only normalization is case folding. No trimming, no accent stripping.

mod filter;

pub use filter::{Filter, SearchField};

/// Fold a string for case-insensitive comparison.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive exact equality.
pub fn eq_folded(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// Case-insensitive substring test.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}
