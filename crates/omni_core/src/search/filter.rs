//! Substring search and category filtering over glossary snapshots.
//!
//! # Responsibility
//! - Match entries against free search text and an exact category filter.
//! - Produce the deterministic ordering the entry list renders in.
//!
//! # Invariants
//! - Only pure functions; no I/O and no hidden state.
//! - Ordering is descending `created_at` with stable ties (insertion order).

use crate::model::entry::GlossaryEntry;

/// Filter options for the visible entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Free search text; empty matches everything.
    pub text: String,
    /// Exact category filter; empty string is the "all categories" sentinel.
    pub category: String,
}

impl EntryFilter {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Returns the entries matching `filter`, newest first.
///
/// An entry matches the search text when the lowercased text is a substring
/// of `"{term} {definition} {category}"` lowercased. The category filter is
/// an exact match, skipped for the empty sentinel.
pub fn filter_entries(entries: &[GlossaryEntry], filter: &EntryFilter) -> Vec<GlossaryEntry> {
    let needle = filter.text.to_lowercase();

    let mut matched: Vec<GlossaryEntry> = entries
        .iter()
        .filter(|entry| {
            let matches_text = needle.is_empty() || {
                let haystack = format!(
                    "{} {} {}",
                    entry.term, entry.definition, entry.category
                )
                .to_lowercase();
                haystack.contains(&needle)
            };
            let matches_category =
                filter.category.is_empty() || entry.category == filter.category;
            matches_text && matches_category
        })
        .cloned()
        .collect();

    // Stable sort keeps insertion order for equal timestamps.
    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}

/// Returns the distinct non-blank categories, sorted lexicographically.
///
/// Feeds the category filter control of the rendering layer.
pub fn distinct_categories(entries: &[GlossaryEntry]) -> Vec<String> {
    let mut categories: Vec<String> = entries
        .iter()
        .map(|entry| entry.category.as_str())
        .filter(|category| !category.trim().is_empty())
        .map(str::to_string)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
