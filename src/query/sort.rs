//! Stable Multi-Key Sort
//!
//! Orders records by an ordered list of (key, direction) pairs, comparing
//! left to right and falling through to the next key on ties. Built on the
//! standard library's stable `sort_by`, so records equal on every key retain
//! their input order; pagination depends on that determinism.

use std::cmp::Ordering;

// == Sort Value ==
/// Comparable key value extracted from a record.
///
/// A single sort key must yield the same variant for every record; mixed
/// variants fall back to the derived variant order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

// == Direction ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

// == Sort Key ==
/// One ordering criterion: a key extractor and a direction.
#[derive(Clone)]
pub struct SortKey<T> {
    pub get: fn(&T) -> SortValue,
    pub dir: Direction,
}

impl<T> SortKey<T> {
    pub fn asc(get: fn(&T) -> SortValue) -> Self {
        Self {
            get,
            dir: Direction::Asc,
        }
    }

    pub fn desc(get: fn(&T) -> SortValue) -> Self {
        Self {
            get,
            dir: Direction::Desc,
        }
    }
}

// == Sort Spec ==
/// Ordered list of sort keys producing a total order over records.
#[derive(Clone)]
pub struct SortSpec<T> {
    keys: Vec<SortKey<T>>,
}

impl<T> SortSpec<T> {
    // == Constructor ==
    pub fn new(keys: Vec<SortKey<T>>) -> Self {
        Self { keys }
    }

    /// A spec with no keys; `apply` leaves input order untouched.
    pub fn unsorted() -> Self {
        Self { keys: Vec::new() }
    }

    // == Compare ==
    /// Compares two records key by key, falling through on ties.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for key in &self.keys {
            let va = (key.get)(a);
            let vb = (key.get)(b);
            let ord = match key.dir {
                Direction::Asc => va.cmp(&vb),
                Direction::Desc => vb.cmp(&va),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    // == Apply ==
    /// Sorts the slice in place. `sort_by` is stable, so full-tie records
    /// keep their relative input order.
    pub fn apply(&self, items: &mut [T]) {
        if !self.keys.is_empty() {
            items.sort_by(|a, b| self.compare(a, b));
        }
    }
}
