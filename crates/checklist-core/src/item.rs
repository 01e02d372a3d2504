//! A single checklist line.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to a [`ChecklistItem`].
///
/// The owning [`Checklist`](crate::Checklist) and any renderer hold the same
/// allocation, so toggling through one handle is visible through all of them.
/// Handles compare by identity with [`same_item`], never by text.
pub type ItemRef = Rc<ChecklistItem>;

/// One line of a checklist: its text, its checked state, and the glyphs a
/// renderer uses to draw either state.
///
/// Text and icons are fixed at creation. Only the checked flag changes.
#[derive(Debug)]
pub struct ChecklistItem {
    checked: Cell<bool>,
    text: String,
    checked_icon: String,
    unchecked_icon: String,
}

impl ChecklistItem {
    /// Build an item. No validation: empty text or icons render as nothing.
    #[must_use]
    pub fn new(
        checked: bool,
        text: impl Into<String>,
        checked_icon: impl Into<String>,
        unchecked_icon: impl Into<String>,
    ) -> Self {
        Self {
            checked: Cell::new(checked),
            text: text.into(),
            checked_icon: checked_icon.into(),
            unchecked_icon: unchecked_icon.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the checked flag. Takes `&self` so it works through an [`ItemRef`].
    pub fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    /// Flip the checked flag and return the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.checked.get();
        self.checked.set(next);
        next
    }

    #[must_use]
    pub fn checked_icon(&self) -> &str {
        &self.checked_icon
    }

    #[must_use]
    pub fn unchecked_icon(&self) -> &str {
        &self.unchecked_icon
    }

    /// The glyph matching the current checked state.
    #[must_use]
    pub fn icon(&self) -> &str {
        if self.is_checked() {
            &self.checked_icon
        } else {
            &self.unchecked_icon
        }
    }
}

/// Identity comparison: true only when both handles point at the same item.
#[must_use]
pub fn same_item(a: &ItemRef, b: &ItemRef) -> bool {
    Rc::ptr_eq(a, b)
}
