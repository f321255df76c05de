//! Response Cache Module
//!
//! Caches fully serialized list payloads keyed by the canonical query
//! string, with fixed TTL and lazy expiry-on-read.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::CachedPage;
pub use stats::CacheStats;
pub use store::ResponseCache;
