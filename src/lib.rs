//! Department Portal List API
//!
//! Serves the listing endpoints of a department web portal through a single
//! generic filter/sort/paginate pipeline with TTL response caching.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
