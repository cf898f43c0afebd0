//! Pure search / filter / aggregate functions over in-memory collections.
//!
//! Nothing here performs I/O or fails: an empty or unknown input yields an
//! empty result, and every result preserves the input order.

pub mod catalog;
pub mod integrity;
pub mod registry;

use crate::models::enums::is_all;

/// Category selection taken from a filter dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if !is_all(v) => Selector::Only(v.to_string()),
            _ => Selector::All,
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Selector::parse(Some(value))
    }
}

/// Lowercased needle for case-insensitive substring tests
pub(crate) fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// `ALL` followed by each distinct value in first-seen order
pub(crate) fn distinct_with_all<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = vec![crate::models::enums::ALL.to_string()];
    for value in values {
        if !out[1..].iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}
