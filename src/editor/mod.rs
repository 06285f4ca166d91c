//! List-aware line editing.
//!
//! Provides a rope-backed text buffer that owns its selection, plus the
//! list item classification that drives Tab, Shift+Tab and Enter.

mod buffer;
mod list;

pub use buffer::{EditorBuffer, Position, Selection, SelectionError};
pub use list::{ListMarker, ORDERED_INDENT, UNORDERED_INDENT, classify_line};
