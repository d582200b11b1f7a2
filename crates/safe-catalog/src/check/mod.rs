//! Compliance check pipeline.
//!
//! A query flows resolver → classifier → (boycotted only) ranker.

mod classifier;
mod ranker;
mod resolver;
mod response;

pub use classifier::StatusClassifier;
pub use ranker::AlternativeRanker;
pub use resolver::{IdentifierResolver, LookupMode};
pub use response::{
    CheckStatus, ProductCheckResponse, Suggestion, MESSAGE_BOYCOTTED, MESSAGE_NOT_FOUND,
    MESSAGE_SAFE,
};
