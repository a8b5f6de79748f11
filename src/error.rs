//! Crate-wide error taxonomy.
//!
//! Every failure a caller can observe is one of the variants below; each
//! carries the offending merchant name or item code for diagnostics. All
//! failures are permanent, none is retryable.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Merchant is already registered: {name}")]
    DuplicateMerchant { name: String },

    #[error("Merchant is not registered: {name}")]
    MerchantNotFound { name: String },

    /// Covers both "never logged in" and "token does not match the current
    /// session"; the caller-visible kind is the same either way.
    #[error("Invalid or missing session token for merchant: {name}")]
    Unauthorized { name: String },

    #[error("Item code {code} already assigned to another merchant")]
    DuplicateItem { code: u32 },

    #[error("Item not found with code: {code}")]
    ItemNotFound { code: u32 },
}
