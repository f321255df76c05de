//! In-Memory Store
//!
//! `ListStore` implementation over an owned record vector. Push-down here
//! simply runs the shared pipeline stages, implemented once and reused for
//! counting and paging.

use async_trait::async_trait;

use crate::error::Result;
use crate::query::{ResourceSchema, SortSpec};
use crate::store::{ListStore, Selection};

// == Memory Store ==
pub struct MemoryStore<T: 'static> {
    schema: ResourceSchema<T>,
    records: Vec<T>,
}

impl<T: Clone + Send + Sync + 'static> MemoryStore<T> {
    // == Constructor ==
    pub fn new(schema: ResourceSchema<T>, records: Vec<T>) -> Self {
        Self { schema, records }
    }

    fn selected(&self, selection: &Selection) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| selection.matches(*record, &self.schema))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> ListStore<T> for MemoryStore<T> {
    async fn count(&self, selection: &Selection) -> Result<usize> {
        Ok(self
            .records
            .iter()
            .filter(|record| selection.matches(*record, &self.schema))
            .count())
    }

    async fn fetch_page(
        &self,
        selection: &Selection,
        sort: &SortSpec<T>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<T>> {
        let mut items = self.selected(selection);
        sort.apply(&mut items);
        Ok(items.into_iter().skip(offset).take(limit).collect())
    }
}
