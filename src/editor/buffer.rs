use ropey::Rope;
use thiserror::Error;

use super::list::{ListMarker, classify_line};

/// Selected range of the buffer, in char offsets.
///
/// `start <= end` always holds; equal values are a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// A zero-width selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// A selection spanning `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "selection start must not exceed end");
        Self { start, end }
    }

    pub const fn is_caret(self) -> bool {
        self.start == self.end
    }

    fn map(self, f: impl Fn(usize) -> usize) -> Self {
        Self {
            start: f(self.start),
            end: f(self.end),
        }
    }
}

/// Where the selection start sits, derived fresh from the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// One-based line number.
    pub line_number: usize,
    /// Char offset of the selection start within its line.
    pub line_index: usize,
    /// The full line containing the selection start, without its newline.
    pub line_text: String,
}

/// A selection that does not fit the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection start {start} is after its end {end}")]
    Inverted { start: usize, end: usize },
    #[error("offset {offset} is past the end of the buffer ({len} chars)")]
    OutOfRange { offset: usize, len: usize },
}

/// A text buffer backed by a rope, with the selection it owns.
///
/// Offsets are char indices. Lines are separated by `\n` only.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            dirty: false,
        }
    }

    /// The current selection.
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Length of the buffer in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(line_idx).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Check that `start..end` is a valid selection for this buffer.
    pub fn check_selection(&self, start: usize, end: usize) -> Result<(), SelectionError> {
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        let len = self.len_chars();
        if end > len {
            return Err(SelectionError::OutOfRange { offset: end, len });
        }
        Ok(())
    }

    /// Replace the selection.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or extends past the buffer. Hosts
    /// only ever report selections inside the text they own.
    pub fn select(&mut self, start: usize, end: usize) {
        if let Err(err) = self.check_selection(start, end) {
            panic!("invalid selection: {err}");
        }
        self.selection = Selection::new(start, end);
    }

    /// Collapse the selection to a caret at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of the buffer.
    pub fn set_caret(&mut self, offset: usize) {
        self.select(offset, offset);
    }

    /// Line, column and text at the selection start.
    pub fn position(&self) -> Position {
        let line = self.current_line();
        Position {
            line_number: line + 1,
            line_index: self.selection.start - self.rope.line_to_char(line),
            line_text: self.line_at(line).unwrap_or_default(),
        }
    }

    /// Classification of the line holding the selection start.
    pub fn list_marker(&self) -> ListMarker {
        classify_line(&self.line_at(self.current_line()).unwrap_or_default())
    }

    /// Push the current list item one level deeper (Tab).
    ///
    /// Returns `false` and leaves the buffer alone if the line is not a
    /// list item.
    pub fn indent_list_item(&mut self) -> bool {
        let step = self.list_marker().indent_step();
        if step == 0 {
            return false;
        }
        let line_start = self.rope.line_to_char(self.current_line());
        self.rope.insert(line_start, &" ".repeat(step));
        // Both endpoints sit at or after the line start.
        self.selection = self.selection.map(|offset| offset + step);
        self.dirty = true;
        true
    }

    /// Pull the current list item one level out (Shift+Tab).
    ///
    /// Returns `false` if the line is not a list item or its marker is
    /// already at column zero.
    pub fn outdent_list_item(&mut self) -> bool {
        let width = self.list_marker().outdent_width();
        if width == 0 {
            return false;
        }
        let line_start = self.rope.line_to_char(self.current_line());
        self.rope.remove(line_start..line_start + width);
        // Endpoints move back by the removed width, clamped at zero. An
        // endpoint inside the removed spaces may land on the previous line.
        self.selection = self.selection.map(|offset| offset.saturating_sub(width));
        self.dirty = true;
        true
    }

    /// Replace the selection with a newline that opens the next list item
    /// (Enter).
    ///
    /// Returns `false` without touching the buffer when the line is not a
    /// list item, so the caller can fall back to a plain newline.
    pub fn continue_list(&mut self) -> bool {
        let Some(text) = self.list_marker().continuation() else {
            return false;
        };
        self.insert_str(&text);
        true
    }

    /// Replace the selection with `s`, leaving a caret after it.
    pub fn insert_str(&mut self, s: &str) {
        let Selection { start, end } = self.selection;
        if s.is_empty() && start == end {
            return;
        }
        if start < end {
            self.rope.remove(start..end);
        }
        self.rope.insert(start, s);
        self.selection = Selection::caret(start + s.chars().count());
        self.dirty = true;
    }

    /// Delete the selection, or the character before the caret (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let caret = self.selection.start;
        if caret == 0 {
            return false;
        }
        self.rope.remove(caret - 1..caret);
        self.selection = Selection::caret(caret - 1);
        self.dirty = true;
        true
    }

    /// Delete the selection, or the character at the caret (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let caret = self.selection.start;
        if caret >= self.len_chars() {
            return false;
        }
        self.rope.remove(caret..=caret);
        self.dirty = true;
        true
    }

    /// Move the caret one char left, or collapse the selection to its start.
    pub fn move_left(&mut self) {
        let Selection { start, .. } = self.selection;
        self.selection = if self.selection.is_caret() {
            Selection::caret(start.saturating_sub(1))
        } else {
            Selection::caret(start)
        };
    }

    /// Move the caret one char right, or collapse the selection to its end.
    pub fn move_right(&mut self) {
        let Selection { end, .. } = self.selection;
        self.selection = if self.selection.is_caret() {
            Selection::caret((end + 1).min(self.len_chars()))
        } else {
            Selection::caret(end)
        };
    }

    /// Move the caret to the beginning of the line (Home).
    pub fn move_home(&mut self) {
        let line_start = self.rope.line_to_char(self.current_line());
        self.selection = Selection::caret(line_start);
    }

    /// Move the caret to the end of the line (End).
    pub fn move_end(&mut self) {
        let line = self.current_line();
        let line_start = self.rope.line_to_char(line);
        let line_len = self.line_at(line).map_or(0, |s| s.chars().count());
        self.selection = Selection::caret(line_start + line_len);
    }

    // --- Private helpers ---

    /// Index of the line holding the selection start.
    fn current_line(&self) -> usize {
        self.rope.char_to_line(self.selection.start)
    }

    fn delete_selection(&mut self) -> bool {
        let Selection { start, end } = self.selection;
        if start == end {
            return false;
        }
        self.rope.remove(start..end);
        self.selection = Selection::caret(start);
        self.dirty = true;
        true
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}
