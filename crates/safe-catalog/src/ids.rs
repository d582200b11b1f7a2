//! Newtype IDs for type-safe identifiers.
//!
//! Store-assigned numeric keys. Wrapping them keeps a product id from being
//! passed where an alternative edge id is expected.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A store-assigned identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw numeric id.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// The raw numeric value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(AlternativeId);

/// Monotonic id allocator used by stores that assign keys themselves.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Allocate the next id. Fails once the id space is used up.
    pub fn next_raw(&mut self) -> CatalogResult<u64> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or_else(|| CatalogError::Store(format!("id space exhausted after {}", self.last)))?;
        Ok(self.last)
    }

    /// Make sure later allocations never collide with an id seen externally.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}
