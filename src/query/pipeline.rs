//! List Query Pipeline
//!
//! Cache-fronted execution of one list request: parse parameters, derive the
//! canonical cache key, serve fresh cached payloads, otherwise read count and
//! page from the persistence adapter concurrently, build the envelope, cache
//! it and hand it back tagged with its origin.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::error::{PortalError, Result};
use crate::models::ListEnvelope;
use crate::query::page::{self, PageInfo, PageLimits};
use crate::query::{FilterSet, ResourceSchema};
use crate::store::{ListStore, Selection};

// == List Query ==
/// Parsed form of one list request's query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: FilterSet,
    /// Free-text needle, lowercased at parse time so equivalent requests
    /// share a cache key
    pub search: Option<String>,
    /// 1-based page, clamped to >= 1
    pub page: usize,
    /// Page size, clamped into [1, max]
    pub limit: usize,
}

impl ListQuery {
    // == Parsing ==
    /// Builds a query from raw parameters. Malformed values are clamped or
    /// defaulted, never rejected; unknown parameters become (ignorable)
    /// filter constraints.
    pub fn from_params(params: &HashMap<String, String>, limits: &PageLimits) -> Self {
        let search = params
            .get("search")
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Self {
            filters: FilterSet::from_params(params),
            search,
            page: page::parse_page(params.get("page").map(String::as_str)),
            limit: page::parse_limit(params.get("limit").map(String::as_str), limits),
        }
    }

    // == Cache Key ==
    /// Canonical serialization of the accepted parameters.
    ///
    /// Filters iterate in sorted order and wildcards were dropped at parse
    /// time, so two semantically identical requests collide regardless of
    /// arrival order, and different requests never do.
    pub fn cache_key(&self, resource: &str) -> String {
        let mut parts: Vec<String> = self
            .filters
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();

        if let Some(search) = &self.search {
            parts.push(format!("search={search}"));
        }
        parts.push(format!("page={}", self.page));
        parts.push(format!("limit={}", self.limit));

        format!("{resource}?{}", parts.join("&"))
    }

    fn selection(&self) -> Selection {
        Selection {
            filters: self.filters.clone(),
            search: self.search.clone(),
        }
    }
}

// == Data Origin ==
/// Where a response payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fresh cache entry
    Cache,
    /// Recomputed from the persistence adapter
    Live,
    /// Configured fallback dataset after a store failure
    Fallback,
}

impl DataOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataOrigin::Cache => "cache",
            DataOrigin::Live => "live",
            DataOrigin::Fallback => "fallback",
        }
    }
}

// == List Outcome ==
/// A serialized list payload plus its origin tag.
#[derive(Debug, Clone)]
pub struct ListOutcome {
    pub body: String,
    pub origin: DataOrigin,
}

// == List Pipeline ==
/// One pipeline instance per listing resource, sharing the process-wide
/// response cache with its peers.
pub struct ListPipeline<T: 'static> {
    schema: ResourceSchema<T>,
    store: Arc<dyn ListStore<T>>,
    cache: Arc<RwLock<ResponseCache>>,
    /// Static dataset served (untagged as cacheable) when the store fails
    fallback: Option<Vec<T>>,
    store_timeout: Duration,
}

impl<T> ListPipeline<T>
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    // == Constructor ==
    pub fn new(
        schema: ResourceSchema<T>,
        store: Arc<dyn ListStore<T>>,
        cache: Arc<RwLock<ResponseCache>>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            schema,
            store,
            cache,
            fallback: None,
            store_timeout,
        }
    }

    /// Configures a fallback dataset served when the store fails. Fallback
    /// responses are tagged and never cached.
    pub fn with_fallback(mut self, records: Vec<T>) -> Self {
        self.fallback = Some(records);
        self
    }

    /// JSON items key of the resource this pipeline serves.
    pub fn items_key(&self) -> &'static str {
        self.schema.items_key
    }

    // == Run ==
    /// Executes one list request.
    ///
    /// Cache hit: the stored payload is returned without touching the store.
    /// Miss or stale: count and page are fetched concurrently under the
    /// configured timeout, the envelope is serialized, cached and returned.
    /// Store failures are never cached and never partially applied.
    pub async fn run(&self, query: &ListQuery) -> Result<ListOutcome> {
        let key = query.cache_key(self.schema.items_key);

        if let Some(payload) = self.cache.write().await.get(&key) {
            debug!(key = %key, "serving cached page");
            return Ok(ListOutcome {
                body: payload,
                origin: DataOrigin::Cache,
            });
        }

        let selection = query.selection();
        let offset = page::offset(query.page, query.limit);

        // Both reads in flight at once; the store must keep them consistent
        // for the selection at this instant.
        let fetched = tokio::time::timeout(self.store_timeout, async {
            tokio::join!(
                self.store.count(&selection),
                self.store
                    .fetch_page(&selection, &self.schema.default_sort, offset, query.limit),
            )
        })
        .await;

        match fetched {
            Ok((Ok(total), Ok(items))) => {
                let body = self.render(&items, total, query)?;
                self.cache.write().await.insert(key, body.clone());
                Ok(ListOutcome {
                    body,
                    origin: DataOrigin::Live,
                })
            }
            Ok((Err(cause), _)) | Ok((_, Err(cause))) => self.degraded(&selection, query, cause),
            Err(_) => self.degraded(
                &selection,
                query,
                PortalError::StoreTimeout(self.store_timeout),
            ),
        }
    }

    fn render(&self, items: &[T], total: usize, query: &ListQuery) -> Result<String> {
        let envelope = ListEnvelope::new(
            self.schema.items_key,
            items,
            PageInfo::new(total, query.page, query.limit),
        );
        Ok(envelope.to_json()?)
    }

    // == Degraded Path ==
    /// Runs the stages over the configured fallback dataset, or propagates
    /// the failure when none is configured.
    fn degraded(
        &self,
        selection: &Selection,
        query: &ListQuery,
        cause: PortalError,
    ) -> Result<ListOutcome> {
        let Some(records) = &self.fallback else {
            return Err(cause);
        };

        warn!(
            resource = self.schema.items_key,
            error = %cause,
            "store failed, serving fallback data"
        );

        let mut items: Vec<T> = records
            .iter()
            .filter(|record| selection.matches(*record, &self.schema))
            .cloned()
            .collect();
        self.schema.default_sort.apply(&mut items);

        let total = items.len();
        let page_items: Vec<T> = items
            .into_iter()
            .skip(page::offset(query.page, query.limit))
            .take(query.limit)
            .collect();

        let body = self.render(&page_items, total, query)?;
        Ok(ListOutcome {
            body,
            origin: DataOrigin::Fallback,
        })
    }
}
