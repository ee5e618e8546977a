//! Unique author counting.

use std::collections::HashSet;

use crate::model::CatalogEntry;

/// Count distinct authors across `entries`.
///
/// Authors are identified by name, birth year and death year. Entries without
/// authors contribute nothing.
pub fn count_unique_authors(entries: &[CatalogEntry]) -> usize {
    entries
        .iter()
        .flat_map(|entry| entry.authors.iter())
        .map(|author| author.identity())
        .collect::<HashSet<_>>()
        .len()
}
