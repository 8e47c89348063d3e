//! Browsing session state: the loaded page bound to the selection store.
//!
//! A [`CatalogSession`] is the explicit, passed-by-reference state object
//! owned by the top-level UI context. All mutations happen on discrete UI
//! events from a single thread; fetches run elsewhere and report back
//! through [`FetchToken`]s.
//!
//! Responses are accepted only for the most recently issued token, so a
//! slow response for an old page can never overwrite newer data.

use crate::core::paging;
use crate::core::selection::{SelectionError, SelectionStore};
use crate::core::types::{Artwork, ArtworkId, CatalogPage};

/// Identifies one fetch request. Only the latest issued token is accepted
/// back into the session; superseded tokens are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
    page_number: u32,
}

impl FetchToken {
    /// Page number this fetch was issued for.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }
}

/// In-memory state of one browsing session.
///
/// Holds the global [`SelectionStore`], the currently loaded page, and the
/// fetch generation counter. Discarded at session end; nothing persists.
#[derive(Debug)]
pub struct CatalogSession {
    selection: SelectionStore,
    page: Option<CatalogPage>,
    page_number: u32,
    total: u64,
    loading: bool,
    generation: u64,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self {
            selection: SelectionStore::new(),
            page: None,
            page_number: 1,
            total: 0,
            loading: false,
            generation: 0,
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// The currently loaded page, if any fetch has completed.
    pub fn page(&self) -> Option<&CatalogPage> {
        self.page.as_ref()
    }

    /// Records of the loaded page, empty before the first fetch completes.
    pub fn records(&self) -> &[Artwork] {
        self.page.as_ref().map_or(&[], |page| page.data.as_slice())
    }

    /// 1-indexed page number the session is showing or fetching.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn total_records(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        paging::total_pages(self.total)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a fetch for `page_number`, superseding any fetch in flight.
    ///
    /// The paginator moves to the target page immediately; the table keeps
    /// showing the previous data until the response arrives.
    pub fn begin_fetch(&mut self, page_number: u32) -> FetchToken {
        self.generation += 1;
        self.loading = true;
        self.page_number = page_number.max(1);
        FetchToken {
            generation: self.generation,
            page_number: self.page_number,
        }
    }

    /// Accept a completed fetch. Returns `false` and leaves all state
    /// untouched when the token has been superseded by a newer fetch.
    pub fn apply_fetch(&mut self, token: FetchToken, page: CatalogPage) -> bool {
        if token.generation != self.generation {
            return false;
        }
        self.loading = false;
        self.total = page.pagination.total;
        self.page = Some(page);
        true
    }

    /// Record a failed fetch: clear the loading flag, keep whatever page
    /// was rendered before. Returns `false` for superseded tokens.
    pub fn fetch_failed(&mut self, token: FetchToken) -> bool {
        if token.generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }

    /// Page number for a forward navigation, clamped to the last page.
    pub fn next_page_number(&self) -> u32 {
        paging::next_page(self.page_number, self.total)
    }

    /// Page number for a backward navigation, clamped to page 1.
    pub fn prev_page_number(&self) -> u32 {
        paging::prev_page(self.page_number)
    }

    /// Toggle the checkbox of one row on the loaded page.
    ///
    /// Modeled as an edit of the whole page's checkbox column: the new
    /// per-page selection replaces the old one, leaving other pages alone.
    /// Ignored when `id` is not on the loaded page.
    pub fn toggle_row(&mut self, id: ArtworkId) {
        let page_ids = match &self.page {
            Some(page) => page.ids(),
            None => return,
        };
        if !page_ids.contains(&id) {
            return;
        }
        let mut selected_on_page: Vec<ArtworkId> = page_ids
            .iter()
            .copied()
            .filter(|page_id| self.selection.is_selected(*page_id))
            .collect();
        match selected_on_page.iter().position(|selected| *selected == id) {
            Some(index) => {
                selected_on_page.remove(index);
            }
            None => selected_on_page.push(id),
        }
        self.selection
            .replace_page_selection(&page_ids, &selected_on_page);
    }

    /// Select the first `count` rows of the loaded page, in page order.
    pub fn select_first(&mut self, count: i64) -> Result<(), SelectionError> {
        let records = self.page.as_ref().map_or(&[][..], |page| page.data.as_slice());
        self.selection.bulk_select_from_page(records, count)
    }

    /// Records of the loaded page that are selected, in page order.
    pub fn visible_selection(&self) -> Vec<&Artwork> {
        self.selection.visible_selection(self.records())
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}
