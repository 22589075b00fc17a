use std::ops::Range;

use super::item::{MentionGroup, MentionItem};

/// Filter groups down to the items whose label contains `query`.
///
/// Matching is plain ASCII case-insensitive substring containment with no
/// ranking; group and item order are preserved. An empty query returns every
/// group untouched. Groups that opted out of filtering are left out of the
/// result whenever a query is active, and groups left without items are
/// dropped.
pub fn filter(query: &str, groups: &[MentionGroup]) -> Vec<MentionGroup> {
    if query.is_empty() {
        return groups.to_vec();
    }

    let query_lower = query.to_ascii_lowercase();

    groups
        .iter()
        .filter(|group| group.is_filtered())
        .filter_map(|group| {
            let items: Vec<MentionItem> = group
                .items
                .iter()
                .filter(|item| item.label.to_ascii_lowercase().contains(&query_lower))
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(MentionGroup {
                    title: group.title.clone(),
                    items,
                    filter: group.filter,
                })
            }
        })
        .collect()
}

/// Flatten groups into the candidate list navigated by the selection
pub fn flatten(groups: &[MentionGroup]) -> Vec<&MentionItem> {
    groups.iter().flat_map(|group| group.items.iter()).collect()
}

/// Number of candidates across all groups
pub fn candidate_count(groups: &[MentionGroup]) -> usize {
    groups.iter().map(|group| group.items.len()).sum()
}

/// Character ranges of every non-overlapping occurrence of `query` in `label`
pub fn highlight_ranges(label: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }

    let label_lower = label.to_ascii_lowercase();
    let query_lower = query.to_ascii_lowercase();
    let query_chars = query.chars().count();

    let mut ranges = Vec::new();
    let mut search_start = 0;

    while let Some(byte_pos) = label_lower[search_start..].find(&query_lower) {
        let absolute_byte_pos = search_start + byte_pos;
        let start = label[..absolute_byte_pos].chars().count();
        ranges.push(start..start + query_chars);

        search_start = absolute_byte_pos + query_lower.len();
    }

    ranges
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
