//! Filter Predicate Builder
//!
//! Turns named query parameters into a conjunctive equality predicate over a
//! record. The wildcard value `all` (or an absent parameter) means "no
//! constraint" for that field.

use std::collections::{BTreeMap, HashMap};

/// Wildcard filter value meaning "unconstrained".
pub const WILDCARD: &str = "all";

/// Parameters consumed by the pager and search stages, never by filters.
const RESERVED_PARAMS: &[&str] = &["search", "page", "limit"];

/// Extracts a displayable field value from a record.
pub type FieldAccessor<T> = fn(&T) -> String;

// == Filter Set ==
/// A set of field-name to requested-value constraints.
///
/// Wildcard and empty values are dropped at construction so that
/// `field=all` and an omitted parameter produce the same set (and therefore
/// the same cache key). Iteration order is deterministic (`BTreeMap`), which
/// keeps the cache-key serialization canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    fields: BTreeMap<String, String>,
}

impl FilterSet {
    // == Constructor ==
    /// Builds a filter set from raw query parameters.
    ///
    /// Reserved parameters (`search`, `page`, `limit`) and wildcard/empty
    /// values are skipped. Unknown field names are kept here and ignored at
    /// match time rather than rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let fields = params
            .iter()
            .filter(|(name, value)| {
                !RESERVED_PARAMS.contains(&name.as_str())
                    && !value.is_empty()
                    && !value.eq_ignore_ascii_case(WILDCARD)
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Self { fields }
    }

    // == Matches ==
    /// Returns true iff the record satisfies every constraint in the set.
    ///
    /// Comparison is case-insensitive string equality against the accessor
    /// output. Constraints naming a field the resource does not expose always
    /// pass; this permissiveness is deliberate and keeps old query strings
    /// working.
    pub fn matches<T>(&self, record: &T, accessors: &[(&str, FieldAccessor<T>)]) -> bool {
        self.fields.iter().all(|(name, want)| {
            match accessors.iter().find(|(field, _)| field == name) {
                Some((_, get)) => get(record).eq_ignore_ascii_case(want),
                None => true,
            }
        })
    }

    // == Iteration ==
    /// Iterates constraints in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.fields.iter()
    }

    /// Returns true if no constraints are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of active constraints.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Sample {
        status: String,
        category: String,
        semester: u8,
    }

    fn status(s: &Sample) -> String {
        s.status.clone()
    }

    fn category(s: &Sample) -> String {
        s.category.clone()
    }

    fn semester(s: &Sample) -> String {
        s.semester.to_string()
    }

    const FIELDS: &[(&str, FieldAccessor<Sample>)] =
        &[("status", status), ("category", category), ("semester", semester)];

    fn sample() -> Sample {
        Sample {
            status: "upcoming".to_string(),
            category: "technical".to_string(),
            semester: 3,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = FilterSet::default();
        assert!(set.matches(&sample(), FIELDS));
        assert!(set.is_empty());
    }

    #[test]
    fn test_single_field_match() {
        let set = FilterSet::from_params(&params(&[("status", "upcoming")]));
        assert!(set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_single_field_mismatch() {
        let set = FilterSet::from_params(&params(&[("status", "completed")]));
        assert!(!set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_conjunction_requires_all_fields() {
        let set =
            FilterSet::from_params(&params(&[("status", "upcoming"), ("category", "cultural")]));
        // status matches but category does not
        assert!(!set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_wildcard_dropped_at_parse() {
        let with_wildcard =
            FilterSet::from_params(&params(&[("status", "upcoming"), ("category", "all")]));
        let without = FilterSet::from_params(&params(&[("status", "upcoming")]));
        assert_eq!(with_wildcard, without);
        assert!(with_wildcard.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_wildcard_case_insensitive() {
        let set = FilterSet::from_params(&params(&[("status", "ALL")]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_value_dropped() {
        let set = FilterSet::from_params(&params(&[("status", "")]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_reserved_params_excluded() {
        let set = FilterSet::from_params(&params(&[
            ("search", "networks"),
            ("page", "2"),
            ("limit", "10"),
            ("status", "upcoming"),
        ]));
        assert_eq!(set.len(), 1);
        assert!(set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_unknown_field_ignored() {
        let set = FilterSet::from_params(&params(&[("flavor", "vanilla")]));
        assert!(set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let set = FilterSet::from_params(&params(&[("status", "UPCOMING")]));
        assert!(set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_numeric_field_compares_as_decimal_string() {
        let set = FilterSet::from_params(&params(&[("semester", "3")]));
        assert!(set.matches(&sample(), FIELDS));

        let set = FilterSet::from_params(&params(&[("semester", "4")]));
        assert!(!set.matches(&sample(), FIELDS));
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = FilterSet::from_params(&params(&[("status", "x"), ("category", "y")]));
        let names: Vec<&String> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["category", "status"]);
    }
}
