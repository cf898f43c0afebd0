//! Reader and tag registry listings

use crate::models::{Reader, Tag};

use super::contains_ci;

/// Most tags a single listing returns
pub const TAG_LIST_LIMIT: usize = 100;

/// Readers ordered by id
pub fn sorted_readers(readers: &[Reader]) -> Vec<&Reader> {
    let mut sorted: Vec<&Reader> = readers.iter().collect();
    sorted.sort_by(|a, b| a.reader_id.cmp(&b.reader_id));
    sorted
}

/// Tags whose equipment name or tag id contains `query`, newest first.
///
/// `tags` is in registration order. An empty query lists everything.
pub fn search_tags<'a>(tags: &'a [Tag], query: &str, limit: usize) -> Vec<&'a Tag> {
    let needle = query.to_lowercase();
    tags.iter()
        .rev()
        .filter(|t| contains_ci(&t.equipment_name, &needle) || contains_ci(&t.tag_id, &needle))
        .take(limit)
        .collect()
}
