//! Table rendering for thread and comment listings.

use std::collections::HashSet;

use crate::core::types::{CommentSummary, ThreadSummary};

/// One row of an `ID | Upvotes | Text` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub id: i64,
    pub upvotes: i64,
    pub text: String,
}

impl From<ThreadSummary> for ListingRow {
    fn from(thread: ThreadSummary) -> Self {
        Self {
            id: thread.id.0,
            upvotes: thread.upvotes,
            text: thread.title,
        }
    }
}

impl From<CommentSummary> for ListingRow {
    fn from(comment: CommentSummary) -> Self {
        Self {
            id: comment.id.0,
            upvotes: comment.upvotes,
            text: comment.text,
        }
    }
}

/// Drop rows whose text was already listed, keeping the first occurrence.
pub fn dedupe_by_text(rows: Vec<ListingRow>) -> Vec<ListingRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.text.clone()))
        .collect()
}

/// Header plus one centred line per row, after de-duplication.
pub fn render_listing(rows: Vec<ListingRow>) -> Vec<String> {
    let mut lines = vec![format!("{:^3} | {:^7} | {}", "ID", "Upvotes", "Text")];
    lines.extend(
        dedupe_by_text(rows)
            .iter()
            .map(|row| format!("{:^3} | {:^7} | {}", row.id, row.upvotes, row.text)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, upvotes: i64, text: &str) -> ListingRow {
        ListingRow {
            id,
            upvotes,
            text: text.to_string(),
        }
    }

    #[test]
    fn duplicate_titles_keep_first_row() {
        let rows = vec![row(1, 9, "a"), row(2, 5, "b"), row(3, 4, "a")];
        let kept: Vec<i64> = dedupe_by_text(rows).iter().map(|r| r.id).collect();
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn render_centres_columns() {
        let lines = render_listing(vec![row(7, 12, "Lilies")]);
        assert_eq!(lines, vec!["ID  | Upvotes | Text", " 7  |   12    | Lilies"]);
    }
}
