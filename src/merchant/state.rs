//! Merchant Registry State Management
//!
//! This module manages merchant identity and the session token lifecycle.

use super::helpers::next_session_token;
use crate::error::{CatalogError, CatalogResult};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

// =============================================================================
// Registry State
// =============================================================================

/// Shared registry handle that can be safely passed between threads
pub type SharedRegistry = Arc<MerchantRegistry>;

/// Registry of merchants and their current session state.
///
/// Each merchant maps to its current session token, or `None` when the
/// merchant has never logged in. `None` is a real state, not a placeholder
/// token, so it can never collide with a generated token.
pub struct MerchantRegistry {
    /// In-memory storage for sessions, keyed by merchant name.
    /// DashMap allows concurrent access without external Mutexes.
    sessions: DashMap<String, Option<String>>,
}

impl Default for MerchantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MerchantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Registers a new merchant under `name`, with no active session.
    ///
    /// The entry API keeps the existence check and the insert a single
    /// atomic map access; two concurrent registrations of the same name
    /// cannot both succeed.
    pub fn register(&self, name: &str) -> CatalogResult<()> {
        match self.sessions.entry(name.to_string()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateMerchant {
                name: name.to_string(),
            }),
            Entry::Vacant(vacant) => {
                vacant.insert(None);
                tracing::info!("Registered merchant: {name}");
                Ok(())
            }
        }
    }

    /// Logs the merchant in and returns a fresh session token.
    ///
    /// Any previously issued token for this merchant stops validating the
    /// moment the new one is stored.
    pub fn login(&self, name: &str) -> CatalogResult<String> {
        let mut session = self
            .sessions
            .get_mut(name)
            .ok_or_else(|| CatalogError::MerchantNotFound {
                name: name.to_string(),
            })?;

        let token = next_session_token();
        *session = Some(token.clone());
        tracing::info!("Merchant logged in: {name}");

        Ok(token)
    }

    /// Returns whether a merchant is registered under `name`.
    pub fn is_registered(&self, name: &str) -> bool {
        self.sessions.contains_key(name)
    }

    /// Validates `token` against the merchant's current session.
    ///
    /// Fails with [`CatalogError::MerchantNotFound`] for an unregistered
    /// name, and with [`CatalogError::Unauthorized`] when the merchant has
    /// never logged in or the token is not the most recently issued one.
    pub fn validate_session(&self, name: &str, token: &str) -> CatalogResult<()> {
        let session = self
            .sessions
            .get(name)
            .ok_or_else(|| CatalogError::MerchantNotFound {
                name: name.to_string(),
            })?;

        match session.value() {
            Some(current) if current == token => Ok(()),
            _ => Err(CatalogError::Unauthorized {
                name: name.to_string(),
            }),
        }
    }

    /// Number of registered merchants.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns whether the registry has no merchants.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
