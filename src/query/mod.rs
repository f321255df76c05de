//! Query Pipeline Module
//!
//! The generic list-query pipeline shared by every listing endpoint:
//! filter predicates, text search, stable multi-key sort, pagination and
//! the cache-fronted pipeline runner.

pub mod filter;
pub mod page;
pub mod pipeline;
pub mod search;
pub mod sort;


// Re-export public types
pub use filter::{FieldAccessor, FilterSet, WILDCARD};
pub use page::{PageInfo, PageLimits};
pub use pipeline::{DataOrigin, ListOutcome, ListPipeline, ListQuery};
pub use sort::{Direction, SortKey, SortSpec, SortValue};

/// Describes how the pipeline reads one listing resource: the JSON items key,
/// the filterable fields, the searchable fields, and the default ordering.
#[derive(Clone)]
pub struct ResourceSchema<T: 'static> {
    /// Key under which the page of records is serialized (e.g. `"events"`)
    pub items_key: &'static str,
    /// Query-parameter name to accessor mapping for equality filters
    pub filter_fields: &'static [(&'static str, FieldAccessor<T>)],
    /// Accessors scanned by the free-text search
    pub search_fields: &'static [FieldAccessor<T>],
    /// Ordering applied to every page of this resource
    pub default_sort: SortSpec<T>,
}
