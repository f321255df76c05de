//! API Module
//!
//! HTTP handlers and routing for the portal list API.
//!
//! # Endpoints
//! - `GET /api/events` - List events
//! - `GET /api/notes` - List lecture notes
//! - `GET /api/question-papers` - List question papers
//! - `GET /api/announcements` - List announcements
//! - `GET /api/cache/stats` - Response cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
