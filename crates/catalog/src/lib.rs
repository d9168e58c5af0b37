//! # Catalog
//!
//! Static reference data for the uniform swap service: the item types that can be
//! swapped, the size domain of each item, the orientation camps and the security
//! questions a holder may pick. These tables are read-only lookups.

use serde::Serialize;

/// Item types and their size domains
mod items;
pub use items::*;

/// Orientation camps
mod camps;
pub use camps::*;

/// Security questions for the in-app code recovery
mod questions;
pub use questions::*;

/// A single code/label pair exposed to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Stable code stored on swap requests
    pub value: &'static str,
    /// Human readable label
    pub label: &'static str,
}

impl CatalogEntry {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

fn find<'a>(entries: &'a [CatalogEntry], value: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| entry.value == value)
}
