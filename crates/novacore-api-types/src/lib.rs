//! Request and response records for the NovaCore REST API.
//!
//! Shapes mirror the JSON the backend produces (`camelCase` keys, integer
//! discriminants for page status and block type). Optional request fields
//! are skipped when absent; the few fields that can be cleared send an
//! explicit `null`. Timestamps without an offset are read as UTC.

pub mod cms;
pub mod dashboard;
pub mod paging;
mod wire;

use std::fmt;

pub use paging::PagedResult;

/// Raised when an integer discriminant on the wire has no matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDiscriminant {
    pub kind: &'static str,
    pub value: u8,
}

impl fmt::Display for UnknownDiscriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} discriminant `{}`", self.kind, self.value)
    }
}

impl std::error::Error for UnknownDiscriminant {}
