//! End-to-end selection scenarios across pagination.
//!
//! Drives a `CatalogSession` through the flows a user performs in the
//! browser: bulk-select on one page, navigate away and back, manually
//! check and uncheck rows.

use catalog::core::session::CatalogSession;
use catalog::test_support::page;

#[test]
fn bulk_select_then_navigate_keeps_global_selection() {
    let mut session = CatalogSession::new();

    // Load page 1 with records 1..=12 and bulk-select the first three.
    let token = session.begin_fetch(1);
    assert!(session.apply_fetch(token, page(1, 120, 1..=12)));
    session.select_first(3).expect("bulk select");

    let visible: Vec<i64> = session.visible_selection().iter().map(|a| a.id).collect();
    assert_eq!(visible, vec![1, 2, 3]);

    // Navigate to page 2: nothing there is selected, the set is untouched.
    let token = session.begin_fetch(2);
    assert!(session.apply_fetch(token, page(2, 120, 13..=24)));
    assert!(session.visible_selection().is_empty());
    assert_eq!(session.selection().len(), 3);

    // Back on page 1 the same three rows are checked again.
    let token = session.begin_fetch(1);
    assert!(session.apply_fetch(token, page(1, 120, 1..=12)));
    let visible: Vec<i64> = session.visible_selection().iter().map(|a| a.id).collect();
    assert_eq!(visible, vec![1, 2, 3]);
}

#[test]
fn manual_edits_on_one_page_never_touch_other_pages() {
    let mut session = CatalogSession::new();

    // Select rows on page 2 first.
    let token = session.begin_fetch(2);
    session.apply_fetch(token, page(2, 120, 13..=24));
    session.select_first(2).expect("bulk select");
    assert_eq!(session.selection().len(), 2);

    // On page 1, bulk-select {1,2,3}, then check 5 and uncheck 2.
    let token = session.begin_fetch(1);
    session.apply_fetch(token, page(1, 120, 1..=12));
    session.select_first(3).expect("bulk select");
    session.toggle_row(5);
    session.toggle_row(2);

    let visible: Vec<i64> = session.visible_selection().iter().map(|a| a.id).collect();
    assert_eq!(visible, vec![1, 3, 5]);

    // Page 2's selections (ids 13, 14) survived every page-1 edit.
    assert!(session.selection().is_selected(13));
    assert!(session.selection().is_selected(14));
    assert_eq!(session.selection().len(), 5);
}

#[test]
fn repeated_toggles_round_trip_to_the_same_set() {
    let mut session = CatalogSession::new();
    let token = session.begin_fetch(1);
    session.apply_fetch(token, page(1, 120, 1..=12));

    session.toggle_row(7);
    session.toggle_row(7);
    assert!(session.selection().is_empty());

    session.toggle_row(7);
    assert!(session.selection().is_selected(7));
    assert_eq!(session.selection().len(), 1);
}
