//! Persistence Adapter Module
//!
//! The boundary between the query pipeline and whatever holds the records.
//! The pipeline only requires `count` and `fetch_page` to be consistent with
//! each other for a given selection at a given instant.

mod memory;
pub mod seed;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::query::{search, FilterSet, ResourceSchema, SortSpec};

// == Selection ==
/// The filter and search constraints pushed down to a store.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub filters: FilterSet,
    pub search: Option<String>,
}

impl Selection {
    /// Evaluates the selection against one record using the resource's
    /// accessors. Filters and search combine conjunctively.
    pub fn matches<T>(&self, record: &T, schema: &ResourceSchema<T>) -> bool {
        self.filters.matches(record, schema.filter_fields)
            && search::matches(
                record,
                self.search.as_deref().unwrap_or(""),
                schema.search_fields,
            )
    }
}

// == List Store ==
/// Read interface the pipeline depends on.
///
/// Implementations must keep `count` and `fetch_page` mutually consistent
/// for a given selection at a given instant; no cross-call transactional
/// guarantee is required beyond that.
#[async_trait]
pub trait ListStore<T>: Send + Sync {
    /// Number of records matching the selection.
    async fn count(&self, selection: &Selection) -> Result<usize>;

    /// One sorted page of matching records. An offset past the end yields an
    /// empty list, not an error.
    async fn fetch_page(
        &self,
        selection: &Selection,
        sort: &SortSpec<T>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<T>>;
}
