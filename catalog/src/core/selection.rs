//! Persistent row selection keyed by artwork id.
//!
//! The selection set is global across pages: navigating away and back does
//! not lose selections, and edits to the page currently on screen must never
//! touch ids belonging to pages that are not loaded.

use std::collections::HashSet;
use std::fmt;

use crate::core::types::{Artwork, ArtworkId};

/// Errors from selection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Bulk-select count was zero, negative, or not a number.
    InvalidCount,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidCount => write!(f, "row count must be a positive number"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Parse raw text from the row-count input into a usable count.
///
/// Non-numeric input, zero, and negative values all fail with
/// [`SelectionError::InvalidCount`].
pub fn parse_row_count(input: &str) -> Result<i64, SelectionError> {
    let count: i64 = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::InvalidCount)?;
    if count <= 0 {
        return Err(SelectionError::InvalidCount);
    }
    Ok(count)
}

/// Set of selected record ids, independent of which page is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: HashSet<ArtworkId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    /// Replace the selection state of the page currently on screen.
    ///
    /// Removes every id in `page_ids` from the set, then adds back every id
    /// in `selected_on_page` (expected to be a subset of `page_ids`). Only
    /// the current page's ids are eligible for removal, so selections made
    /// on other pages are untouched. No-op when `page_ids` is empty.
    pub fn replace_page_selection(
        &mut self,
        page_ids: &[ArtworkId],
        selected_on_page: &[ArtworkId],
    ) {
        if page_ids.is_empty() {
            return;
        }
        for id in page_ids {
            self.selected.remove(id);
        }
        for id in selected_on_page {
            self.selected.insert(*id);
        }
    }

    /// Select the first `count` records of the page, in page order.
    ///
    /// Strictly additive: previously selected ids, including ones on other
    /// pages, are preserved. Counts beyond the page length saturate at the
    /// records already loaded; nothing is fetched.
    pub fn bulk_select_from_page(
        &mut self,
        page_records: &[Artwork],
        count: i64,
    ) -> Result<(), SelectionError> {
        if count <= 0 {
            return Err(SelectionError::InvalidCount);
        }
        let take = usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(page_records.len());
        for artwork in &page_records[..take] {
            self.selected.insert(artwork.id);
        }
        Ok(())
    }

    /// Records of the page that are currently selected, in page order.
    pub fn visible_selection<'a>(&self, page_records: &'a [Artwork]) -> Vec<&'a Artwork> {
        page_records
            .iter()
            .filter(|artwork| self.selected.contains(&artwork.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::artworks;

    #[test]
    fn replace_page_selection_only_touches_current_page_ids() {
        let mut store = SelectionStore::new();
        // Selections made on another page (ids 100..103).
        store.replace_page_selection(&[100, 101, 102], &[100, 101, 102]);

        let page_ids: Vec<i64> = (1..=12).collect();
        store.replace_page_selection(&page_ids, &[1, 3]);

        assert!(store.is_selected(100));
        assert!(store.is_selected(101));
        assert!(store.is_selected(102));
        assert!(store.is_selected(1));
        assert!(store.is_selected(3));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn replace_page_selection_removes_unchecked_rows() {
        let mut store = SelectionStore::new();
        let page_ids: Vec<i64> = (1..=12).collect();
        store.replace_page_selection(&page_ids, &[1, 2, 3, 5]);
        // User unchecks 2, keeps the rest.
        store.replace_page_selection(&page_ids, &[1, 3, 5]);

        assert!(!store.is_selected(2));
        assert!(store.is_selected(1));
        assert!(store.is_selected(3));
        assert!(store.is_selected(5));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn replace_page_selection_is_idempotent() {
        let mut store = SelectionStore::new();
        let page_ids: Vec<i64> = (1..=12).collect();
        store.replace_page_selection(&page_ids, &[4, 7]);
        let once = store.clone();
        store.replace_page_selection(&page_ids, &[4, 7]);
        assert_eq!(store, once);
    }

    #[test]
    fn replace_page_selection_with_empty_page_is_noop() {
        let mut store = SelectionStore::new();
        store.replace_page_selection(&[9], &[9]);
        let before = store.clone();
        store.replace_page_selection(&[], &[]);
        assert_eq!(store, before);
    }

    #[test]
    fn bulk_select_is_monotonic() {
        let mut store = SelectionStore::new();
        let page = artworks(1..=12);
        store.replace_page_selection(&[42], &[42]);

        store.bulk_select_from_page(&page, 3).expect("bulk select");

        assert!(store.is_selected(42));
        assert!(store.is_selected(1));
        assert!(store.is_selected(2));
        assert!(store.is_selected(3));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn bulk_select_rejects_zero_and_negative_counts() {
        let mut store = SelectionStore::new();
        let page = artworks(1..=12);

        assert_eq!(
            store.bulk_select_from_page(&page, 0),
            Err(SelectionError::InvalidCount)
        );
        assert_eq!(
            store.bulk_select_from_page(&page, -5),
            Err(SelectionError::InvalidCount)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn bulk_select_saturates_at_page_length() {
        let mut store = SelectionStore::new();
        let page = artworks(1..=12);
        store.bulk_select_from_page(&page, 100).expect("bulk select");
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn visible_selection_preserves_page_order() {
        let mut store = SelectionStore::new();
        let page = artworks([5, 2, 9, 1]);
        store.replace_page_selection(&[5, 2, 9, 1], &[1, 9, 5]);

        let visible: Vec<i64> = store
            .visible_selection(&page)
            .iter()
            .map(|artwork| artwork.id)
            .collect();
        assert_eq!(visible, vec![5, 9, 1]);
    }

    #[test]
    fn visible_selection_is_an_idempotent_read() {
        let mut store = SelectionStore::new();
        let page = artworks(1..=12);
        store.bulk_select_from_page(&page, 4).expect("bulk select");

        let first: Vec<i64> = store.visible_selection(&page).iter().map(|a| a.id).collect();
        let second: Vec<i64> = store.visible_selection(&page).iter().map(|a| a.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_row_count_accepts_positive_integers() {
        assert_eq!(parse_row_count("7"), Ok(7));
        assert_eq!(parse_row_count(" 12 "), Ok(12));
    }

    #[test]
    fn parse_row_count_rejects_bad_input() {
        assert_eq!(parse_row_count(""), Err(SelectionError::InvalidCount));
        assert_eq!(parse_row_count("abc"), Err(SelectionError::InvalidCount));
        assert_eq!(parse_row_count("0"), Err(SelectionError::InvalidCount));
        assert_eq!(parse_row_count("-3"), Err(SelectionError::InvalidCount));
        assert_eq!(parse_row_count("2.5"), Err(SelectionError::InvalidCount));
        // No prefix truncation: trailing junk fails the whole input.
        assert_eq!(parse_row_count("3abc"), Err(SelectionError::InvalidCount));
    }
}
