//! API Handlers
//!
//! HTTP request handlers for each listing endpoint. Every list route runs
//! the same generic pipeline; handlers only pick the resource.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Announcement, CacheStatsResponse, Event, HealthResponse, Note, QuestionPaper};
use crate::query::{ListPipeline, ListQuery, PageLimits};
use crate::store::{seed, MemoryStore};

/// Response header naming the payload origin (`cache`, `live`, `fallback`).
const DATA_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-data-source");

/// Application state shared across all handlers.
///
/// Holds the process-wide response cache and one pipeline per listing
/// resource, all sharing that cache.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<ResponseCache>>,
    pub events: Arc<ListPipeline<Event>>,
    pub notes: Arc<ListPipeline<Note>>,
    pub question_papers: Arc<ListPipeline<QuestionPaper>>,
    pub announcements: Arc<ListPipeline<Announcement>>,
    pub limits: PageLimits,
}

impl AppState {
    /// Creates application state over the demo datasets.
    pub fn from_config(config: &Config) -> Self {
        Self::with_data(
            config,
            seed::events(),
            seed::notes(),
            seed::question_papers(),
            seed::announcements(),
        )
    }

    /// Creates application state over caller-supplied datasets. Used by
    /// tests to exercise the routes against known records.
    pub fn with_data(
        config: &Config,
        events: Vec<Event>,
        notes: Vec<Note>,
        question_papers: Vec<QuestionPaper>,
        announcements: Vec<Announcement>,
    ) -> Self {
        let cache = Arc::new(RwLock::new(ResponseCache::new(config.cache_ttl)));
        let timeout = Duration::from_secs(config.store_timeout);
        let limits = PageLimits {
            default_limit: config.default_page_size,
            max_limit: config.max_page_size,
        };

        Self {
            events: Arc::new(ListPipeline::new(
                Event::schema(),
                Arc::new(MemoryStore::new(Event::schema(), events)),
                cache.clone(),
                timeout,
            )),
            notes: Arc::new(ListPipeline::new(
                Note::schema(),
                Arc::new(MemoryStore::new(Note::schema(), notes)),
                cache.clone(),
                timeout,
            )),
            question_papers: Arc::new(ListPipeline::new(
                QuestionPaper::schema(),
                Arc::new(MemoryStore::new(QuestionPaper::schema(), question_papers)),
                cache.clone(),
                timeout,
            )),
            announcements: Arc::new(ListPipeline::new(
                Announcement::schema(),
                Arc::new(MemoryStore::new(Announcement::schema(), announcements)),
                cache.clone(),
                timeout,
            )),
            cache,
            limits,
        }
    }
}

// == Generic List Handler ==
/// Runs one pipeline and formats the HTTP response. The pipeline hands back
/// an already-serialized payload, so the body is written through verbatim
/// (cache hits stay byte-identical).
async fn list_response<T>(
    pipeline: &ListPipeline<T>,
    limits: &PageLimits,
    params: HashMap<String, String>,
) -> Result<Response>
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let query = ListQuery::from_params(&params, limits);
    let outcome = pipeline.run(&query).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (DATA_SOURCE_HEADER, outcome.origin.as_str()),
        ],
        outcome.body,
    )
        .into_response())
}

/// Handler for GET /api/events
pub async fn list_events_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    list_response(&state.events, &state.limits, params).await
}

/// Handler for GET /api/notes
pub async fn list_notes_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    list_response(&state.notes, &state.limits, params).await
}

/// Handler for GET /api/question-papers
pub async fn list_question_papers_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    list_response(&state.question_papers, &state.limits, params).await
}

/// Handler for GET /api/announcements
pub async fn list_announcements_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    list_response(&state.announcements, &state.limits, params).await
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = state.cache.read().await;
    Json(CacheStatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
