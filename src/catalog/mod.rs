//! Item Catalog Domain Module
//!
//! This module contains the shared item catalog, including:
//! - Domain models (Item, ownership pairing)
//! - Catalog state management with per-operation authorization
//! - Formatting helpers

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::Item;
pub use state::ItemCatalog;
