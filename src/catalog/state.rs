//! Item Catalog State Management
//!
//! This module manages the shared item catalog. Every operation validates
//! the caller's session against the merchant registry before touching the
//! item map, and registry failures propagate to the caller unchanged.

use super::helpers::format_item_summary;
use super::models::{Item, OwnedItem};
use crate::error::{CatalogError, CatalogResult};
use crate::merchant::SharedRegistry;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

// =============================================================================
// Catalog State
// =============================================================================

/// The shared item catalog.
///
/// Items are keyed by their integer code, which is unique across ALL
/// merchants; ownership is tracked per entry and enforced on updates.
pub struct ItemCatalog {
    /// Registry consulted for session validation on every operation
    registry: SharedRegistry,

    /// In-memory storage for items, keyed by item code.
    /// DashMap allows concurrent access without external Mutexes.
    items: DashMap<u32, OwnedItem>,
}

impl ItemCatalog {
    /// Creates an empty catalog backed by the given merchant registry.
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            items: DashMap::new(),
        }
    }

    /// Creates the item under `code`, or updates it if the caller already
    /// owns it.
    ///
    /// A fresh code gets a newly generated identifier and the caller as
    /// owner. An existing code owned by the caller has its title and
    /// description replaced in place; identifier, code and owner are never
    /// touched. An existing code owned by anyone else fails with
    /// [`CatalogError::DuplicateItem`].
    ///
    /// The entry API keeps the ownership check and the write a single
    /// atomic map access.
    pub fn create_or_update(
        &self,
        merchant_name: &str,
        token: &str,
        code: u32,
        title: &str,
        description: &str,
    ) -> CatalogResult<Item> {
        self.registry.validate_session(merchant_name, token)?;

        match self.items.entry(code) {
            Entry::Vacant(vacant) => {
                let item = Item {
                    identifier: Uuid::new_v4(),
                    code,
                    title: title.to_string(),
                    description: description.to_string(),
                };
                vacant.insert(OwnedItem {
                    owner: merchant_name.to_string(),
                    item: item.clone(),
                });
                tracing::debug!("Created item #{code} for merchant {merchant_name}");
                Ok(item)
            }
            Entry::Occupied(mut occupied) => {
                if occupied.get().owner != merchant_name {
                    return Err(CatalogError::DuplicateItem { code });
                }
                let entry = occupied.get_mut();
                entry.item.title = title.to_string();
                entry.item.description = description.to_string();
                tracing::debug!("Updated item #{code} for merchant {merchant_name}");
                Ok(entry.item.clone())
            }
        }
    }

    /// Returns all items owned by the calling merchant, in no particular
    /// order. A merchant with no items gets an empty vec.
    pub fn list(&self, merchant_name: &str, token: &str) -> CatalogResult<Vec<Item>> {
        self.registry.validate_session(merchant_name, token)?;

        let items: Vec<Item> = self
            .items
            .iter()
            .filter(|entry| entry.value().owner == merchant_name)
            .map(|entry| entry.value().item.clone())
            .collect();

        tracing::debug!(
            "Listing for merchant {merchant_name}: {}",
            format_item_summary(&items)
        );

        Ok(items)
    }

    /// Removes the item under `code` and returns its prior value.
    ///
    /// Only session validity and code existence are checked, not ownership:
    /// any merchant with a valid session can delete any existing code.
    pub fn delete(&self, merchant_name: &str, token: &str, code: u32) -> CatalogResult<Item> {
        self.registry.validate_session(merchant_name, token)?;

        let (_, removed) = self
            .items
            .remove(&code)
            .ok_or(CatalogError::ItemNotFound { code })?;

        tracing::debug!("Merchant {merchant_name} deleted item #{code}");
        Ok(removed.item)
    }

    /// Number of items in the catalog, across all merchants.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
