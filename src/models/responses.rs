//! Response DTOs for the portal list API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::query::PageInfo;

// == List Envelope ==
/// Uniform `{ "<items-key>": [...], "pagination": {...} }` body shared by
/// every listing endpoint. The items key varies per resource (`events`,
/// `notes`, ...), so serialization is written out by hand instead of derived.
#[derive(Debug)]
pub struct ListEnvelope<'a, T: Serialize> {
    items_key: &'static str,
    items: &'a [T],
    pagination: PageInfo,
}

impl<'a, T: Serialize> ListEnvelope<'a, T> {
    pub fn new(items_key: &'static str, items: &'a [T], pagination: PageInfo) -> Self {
        Self {
            items_key,
            items,
            pagination,
        }
    }

    /// Serializes the envelope to its canonical JSON payload. This exact
    /// string is what the response cache stores, so cache hits are
    /// byte-identical to the miss that produced them.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<T: Serialize> Serialize for ListEnvelope<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.items_key, self.items)?;
        map.serialize_entry("pagination", &self.pagination)?;
        map.end()
    }
}

// == Health Response ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g. "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Cache Stats Response ==
/// Response body for the cache statistics endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub recomputes: u64,
    pub swept: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            recomputes: stats.recomputes,
            swept: stats.swept,
            total_entries: stats.total_entries,
        }
    }
}

// == Error Response ==
/// Error body for all failure conditions.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Generic failure message; causes are logged server-side only
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
