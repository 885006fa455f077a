//! Substring search across all columns of a dataset.

use crate::models::Row;

/// Return the rows where at least one cell contains `query`,
/// case-insensitively. Row order is preserved; there is no ranking.
///
/// The query is trimmed first; a trimmed query shorter than
/// `min_query_len` (and in particular an empty one) matches nothing.
pub fn search<'a>(rows: &'a [Row], query: &str, min_query_len: usize) -> Vec<&'a Row> {
    let term = query.trim().to_lowercase();
    if term.is_empty() || term.chars().count() < min_query_len {
        return Vec::new();
    }

    rows.iter()
        .filter(|row| {
            row.values()
                .any(|value| value.to_lowercase().contains(&term))
        })
        .collect()
}
