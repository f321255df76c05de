//! API Routes
//!
//! Configures the Axum router with all portal endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, health_handler, list_announcements_handler, list_events_handler,
    list_notes_handler, list_question_papers_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/events` - List events
/// - `GET /api/notes` - List lecture notes
/// - `GET /api/question-papers` - List question papers
/// - `GET /api/announcements` - List announcements
/// - `GET /api/cache/stats` - Response cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/events", get(list_events_handler))
        .route("/api/notes", get(list_notes_handler))
        .route("/api/question-papers", get(list_question_papers_handler))
        .route("/api/announcements", get(list_announcements_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
