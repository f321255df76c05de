//! Case-Insensitive Text Search
//!
//! Substring match over a configurable set of text fields, combined with the
//! filter predicates via logical AND by the caller.

use super::filter::FieldAccessor;

// == Search Match ==
/// Returns true iff the lowercased needle is a substring of at least one
/// lowercased field value.
///
/// An empty needle always passes (no-op filter). The scan short-circuits on
/// the first matching field.
pub fn matches<T>(record: &T, needle: &str, accessors: &[FieldAccessor<T>]) -> bool {
    if needle.is_empty() {
        return true;
    }

    let needle = needle.to_lowercase();
    accessors
        .iter()
        .any(|get| get(record).to_lowercase().contains(&needle))
}
