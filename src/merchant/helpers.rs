//! Merchant Session Helpers
//!
//! This module contains session token generation.

use std::sync::atomic::{AtomicU64, Ordering};

static TOKEN_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Mints a fresh session token, unique for the lifetime of the process.
///
/// The token is an opaque string derived from an atomic counter. Callers
/// must not parse it. Not cryptographically secure; a deployment that needs
/// real authentication would swap in a secure random generator here without
/// touching any caller.
pub fn next_session_token() -> String {
    let seq = TOKEN_SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1;
    format!("auth-{seq}")
}
