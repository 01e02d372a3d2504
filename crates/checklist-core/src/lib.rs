//! checklist-core library.
//!
//! A generic checklist for list-style terminal panels: an ordered collection
//! of checkable items, a single selection cursor, and the queries a renderer
//! and a keyboard handler need. Nothing here performs I/O.
//!
//! ```
//! use checklist_core::Checklist;
//!
//! let mut list = Checklist::new("x", " ");
//! list.add(false, "write tests");
//! let done = list.add(true, "read the docs");
//!
//! assert_eq!(list.items()[0].text(), "read the docs");
//! assert_eq!(list.checked_items().len(), 1);
//! assert_eq!(list.index_by_item(&done), Some(0));
//! ```
//!
//! # Conventions
//!
//! - **Errors**: Checked operations return [`ChecklistError`]; caller contract
//!   violations panic and are documented under `# Panics`.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`); the core never
//!   installs a subscriber.

pub mod checklist;
pub mod error;
pub mod item;
pub mod sort;

pub use checklist::Checklist;
pub use error::{ChecklistError, ErrorCode};
pub use item::{ChecklistItem, ItemRef, same_item};
pub use sort::Sortable;
