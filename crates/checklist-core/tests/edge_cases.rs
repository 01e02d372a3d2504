//! Edge case tests for checklist-core: stale cursors, empty lists, identity,
//! and the index-based sort protocol driven from outside the crate.

use checklist_core::sort::{self, Sortable};
use checklist_core::{Checklist, ChecklistError, ChecklistItem, ErrorCode, ItemRef};
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a list whose display order is exactly `texts`.
fn list_of(texts: &[&str]) -> Checklist {
    let mut list = Checklist::new("[x]", "[ ]");
    for text in texts.iter().rev() {
        list.add(false, *text);
    }
    list
}

fn texts(list: &Checklist) -> Vec<String> {
    list.iter().map(|item| item.text().to_owned()).collect()
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn two_adds_are_most_recent_first() {
    let mut list = Checklist::new("[x]", "[ ]");
    list.add(true, "a");
    list.add(false, "b");
    assert_eq!(texts(&list), vec!["b", "a"]);
}

#[test]
fn external_sort_yields_lexicographic_order() {
    let mut list = list_of(&["banana", "apple", "cherry"]);
    sort::sort(&mut list);
    assert_eq!(texts(&list), vec!["apple", "banana", "cherry"]);

    let mut list = list_of(&["banana", "apple", "cherry"]);
    sort::sort_stable(&mut list);
    assert_eq!(texts(&list), vec!["apple", "banana", "cherry"]);
}

#[test]
fn less_reflects_positions_after_swap() {
    let mut list = list_of(&["banana", "apple"]);
    assert!(list.less(1, 0));
    assert!(!list.less(0, 1));
    list.swap(0, 1);
    assert!(list.less(0, 1));
    assert!(!list.less(1, 0));
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn cursor_goes_stale_after_deleting_last_item() {
    let mut list = list_of(&["one", "two", "three"]);
    assert!(!list.is_selectable());

    list.select(2);
    assert!(list.is_selectable());

    list.delete(2);
    assert!(!list.is_selectable());
    assert!(list.is_unselectable());
    assert_eq!(list.selected(), Some(2));
}

#[test]
fn cursor_slides_onto_next_item_after_delete() {
    let mut list = list_of(&["one", "two", "three"]);
    list.select(1);
    list.delete(1);
    assert!(list.is_selectable());
    assert_eq!(list.selected_item().map(|item| item.text()), Some("three"));
}

#[test]
fn cursor_shifts_meaning_after_add() {
    let mut list = list_of(&["one", "two"]);
    list.select(1);
    let before = list.selected_item().cloned().expect("cursor in range");
    list.add(false, "zero");
    let after = list.selected_item().cloned().expect("cursor in range");
    assert_eq!(before.text(), "two");
    assert_eq!(after.text(), "one");
}

#[test]
fn selection_on_empty_list_is_never_valid() {
    let mut list = Checklist::new("", "");
    list.select(0);
    assert!(!list.is_selectable());
    list.unselect();
    list.unselect();
    assert!(!list.is_selectable());
}

#[test]
fn reanchoring_by_identity_follows_the_item() {
    let mut list = list_of(&["c", "a", "b"]);
    list.select(0);
    let anchor = list.selected_item().cloned().expect("cursor in range");

    list.sort();
    if let Some(index) = list.index_by_item(&anchor) {
        list.select(index);
    }
    assert_eq!(list.selected(), Some(2));
    assert_eq!(list.selected_item().map(|item| item.text()), Some("c"));
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[test]
fn delete_middle_of_three() {
    let mut list = list_of(&["x", "y", "z"]);
    list.delete(1);
    assert_eq!(texts(&list), vec!["x", "z"]);
}

#[test]
fn delete_only_item_resets_longest_line() {
    let mut list = list_of(&["lonely"]);
    assert_eq!(list.longest_line(), 6);
    list.delete(0);
    assert!(list.is_empty());
    assert_eq!(list.longest_line(), 0);
}

#[test]
fn try_delete_on_empty_list_reports_code() {
    let mut list = Checklist::new("x", " ");
    let err = list.try_delete(0).expect_err("empty list has no index 0");
    assert_eq!(err, ChecklistError::IndexOutOfRange { index: 0, len: 0 });
    assert_eq!(err.code(), ErrorCode::IndexOutOfRange);
}

#[test]
#[should_panic(expected = "index")]
fn delete_on_empty_list_panics() {
    let mut list = Checklist::new("x", " ");
    list.delete(0);
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[test]
fn longest_line_picks_max() {
    assert_eq!(list_of(&["a", "abc", "ab"]).longest_line(), 3);
}

#[test]
fn empty_texts_and_icons_are_allowed() {
    let mut list = Checklist::new("", "");
    let item = list.add(true, "");
    assert_eq!(item.icon(), "");
    assert_eq!(list.longest_line(), 0);
    assert_eq!(list.checked_items().len(), 1);
}

#[test]
fn identical_texts_keep_distinct_identities() {
    let mut list = Checklist::new("x", " ");
    let older = list.add(false, "milk");
    let newer = list.add(false, "milk");
    assert_eq!(list.index_by_item(&older), Some(1));
    assert_eq!(list.index_by_item(&newer), Some(0));
}

#[test]
fn foreign_item_is_not_found() {
    let list = list_of(&["milk"]);
    let foreign: ItemRef = Rc::new(ChecklistItem::new(false, "milk", "[x]", "[ ]"));
    assert_eq!(list.index_by_item(&foreign), None);
}

#[test]
fn toggling_a_returned_item_moves_it_between_partitions() {
    let list = list_of(&["a", "b", "c"]);
    let unchecked = list.unchecked_items();
    assert_eq!(unchecked.len(), 3);

    unchecked[1].toggle();
    let checked = list.checked_items();
    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].text(), "b");
    assert_eq!(checked[0].icon(), "[x]");
    assert_eq!(list.unchecked_items().len(), 2);
}
