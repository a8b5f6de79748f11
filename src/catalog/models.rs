//! Item Catalog Domain Models
//!
//! This module contains the data structures stored in the catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A catalog entry as seen by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Generated identifier, assigned once at creation and never changed
    pub identifier: Uuid,

    /// Lookup key, unique across the entire catalog (all merchants)
    pub code: u32,

    /// Display title
    pub title: String,

    /// Longer description
    pub description: String,
}

/// An item together with the merchant that owns it.
///
/// Ownership is internal bookkeeping and is not part of the [`Item`] value
/// returned to callers.
#[derive(Debug, Clone)]
pub struct OwnedItem {
    /// Name of the owning merchant, fixed at creation
    pub owner: String,

    /// The item payload
    pub item: Item,
}
