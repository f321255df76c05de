//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Response cache TTL in seconds
    pub cache_ttl: u64,
    /// Page size applied when the request omits `limit`
    pub default_page_size: usize,
    /// Upper bound applied to any requested `limit`
    pub max_page_size: usize,
    /// Expired-entry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Timeout in seconds for persistence adapter reads
    pub store_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 300)
    /// - `DEFAULT_PAGE_SIZE` - Page size when `limit` is absent (default: 10)
    /// - `MAX_PAGE_SIZE` - Cap on requested `limit` (default: 50)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 60)
    /// - `STORE_TIMEOUT` - Persistence read timeout in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_page_size: env::var("MAX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            store_timeout: env::var("STORE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 300,
            default_page_size: 10,
            max_page_size: 50,
            cleanup_interval: 60,
            store_timeout: 5,
        }
    }
}
