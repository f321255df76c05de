//! Cached Page Entry
//!
//! One immutable snapshot of a serialized list response. An entry reflects
//! the store's state at the moment of the miss that produced it, not at
//! read time.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cached Page ==
#[derive(Debug, Clone)]
pub struct CachedPage {
    /// The serialized JSON payload
    pub payload: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CachedPage {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_secs` from now.
    pub fn new(payload: String, ttl_secs: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            payload,
            created_at: now,
            expires_at: now + ttl_secs * 1000,
        }
    }

    // == Is Expired ==
    /// An entry is stale once the current time is greater than or equal to
    /// its expiration time; a query at exactly TTL elapsed recomputes.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
