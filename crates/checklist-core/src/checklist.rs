//! Ordered, selectable collection of [`ChecklistItem`]s.
//!
//! The list owns item creation and removal. New items go to the front, so the
//! most recently added entry is displayed first. A single cursor names the
//! item targeted by keyboard interaction; structural mutations (`add`,
//! `delete`, sorting) leave the cursor's numeric value alone, and
//! [`Checklist::is_selectable`] re-validates it against the current length on
//! every call.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::ChecklistError;
use crate::item::{ChecklistItem, ItemRef, same_item};
use crate::sort::Sortable;

/// A checklist: items in display order, a selection cursor, and the two
/// glyphs stamped on every item it creates.
#[derive(Debug)]
pub struct Checklist {
    items: Vec<ItemRef>,
    selected: Option<usize>,
    checked_icon: String,
    unchecked_icon: String,
}

impl Checklist {
    /// Empty list with no selection.
    #[must_use]
    pub fn new(checked_icon: impl Into<String>, unchecked_icon: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            checked_icon: checked_icon.into(),
            unchecked_icon: unchecked_icon.into(),
        }
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Create an item with this list's icons and insert it at position 0.
    ///
    /// The cursor is not shifted: a previously valid selection now names the
    /// item that used to sit one slot earlier.
    pub fn add(&mut self, checked: bool, text: impl Into<String>) -> ItemRef {
        let item = Rc::new(ChecklistItem::new(
            checked,
            text,
            self.checked_icon.as_str(),
            self.unchecked_icon.as_str(),
        ));
        self.items.insert(0, Rc::clone(&item));
        debug!(len = self.items.len(), checked, "checklist item added");
        item
    }

    /// Remove and return the item at `index`, shifting later items forward.
    ///
    /// The cursor is not adjusted.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.len()`. Validate with
    /// [`is_selectable`](Self::is_selectable) or
    /// [`index_by_item`](Self::index_by_item) first, or use
    /// [`try_delete`](Self::try_delete).
    pub fn delete(&mut self, index: usize) -> ItemRef {
        let removed = self.items.remove(index);
        debug!(index, len = self.items.len(), "checklist item deleted");
        removed
    }

    /// Checked counterpart of [`delete`](Self::delete).
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::IndexOutOfRange`] when `index` does not name
    /// an item; the list is left untouched.
    pub fn try_delete(&mut self, index: usize) -> Result<ItemRef, ChecklistError> {
        if index >= self.items.len() {
            return Err(ChecklistError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.delete(index))
    }

    /// Sort ascending by text. Not stable; the cursor is not adjusted.
    ///
    /// Same order as driving the [`Sortable`] impl with [`sort::sort`](crate::sort::sort).
    pub fn sort(&mut self) {
        self.items.sort_unstable_by(|a, b| a.text().cmp(b.text()));
        trace!(len = self.items.len(), "checklist sorted");
    }

    /// Sort ascending by text, keeping equal texts in their current order.
    pub fn sort_stable(&mut self) {
        self.items.sort_by(|a, b| a.text().cmp(b.text()));
        trace!(len = self.items.len(), "checklist sorted (stable)");
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All checked items, in list order. A new vec; never shares membership
    /// with the list.
    #[must_use]
    pub fn checked_items(&self) -> Vec<ItemRef> {
        self.filter_by_checked(true)
    }

    /// All unchecked items, in list order.
    #[must_use]
    pub fn unchecked_items(&self) -> Vec<ItemRef> {
        self.filter_by_checked(false)
    }

    fn filter_by_checked(&self, checked: bool) -> Vec<ItemRef> {
        self.items
            .iter()
            .filter(|item| item.is_checked() == checked)
            .cloned()
            .collect()
    }

    /// Character count of the longest item text; 0 when empty.
    ///
    /// Counts `char`s, not terminal columns. Wide or combining characters
    /// are misreported for layout purposes.
    #[must_use]
    pub fn longest_line(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.text().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Position of `item` by identity, or `None` when it is not in this list.
    #[must_use]
    pub fn index_by_item(&self, item: &ItemRef) -> Option<usize> {
        self.items.iter().position(|candidate| same_item(candidate, item))
    }

    #[must_use]
    pub fn items(&self) -> &[ItemRef] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemRef> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn checked_icon(&self) -> &str {
        &self.checked_icon
    }

    #[must_use]
    pub fn unchecked_icon(&self) -> &str {
        &self.unchecked_icon
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Raw cursor value, which may be stale after a structural change.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Store a cursor without validating it against the current length.
    pub const fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Clear the cursor. Always succeeds.
    pub const fn unselect(&mut self) {
        self.selected = None;
    }

    /// True when the cursor names an item in the current sequence.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.selected.is_some_and(|index| index < self.items.len())
    }

    #[must_use]
    pub fn is_unselectable(&self) -> bool {
        !self.is_selectable()
    }

    /// The item under the cursor, when the cursor is in range.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ItemRef> {
        self.selected.and_then(|index| self.items.get(index))
    }
}

impl Sortable for Checklist {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.items[i].text() < self.items[j].text()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}

impl<'a> IntoIterator for &'a Checklist {
    type Item = &'a ItemRef;
    type IntoIter = std::slice::Iter<'a, ItemRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
