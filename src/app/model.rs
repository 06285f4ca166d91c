use crate::editor::{EditorBuffer, Selection};

/// Whether the host's own handling of the last event should run.
///
/// Mirrors `preventDefault`: list editing claims Tab even when it has
/// nothing to do, so focus never leaves the text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Default,
    Prevented,
}

/// Snapshot of where the selection sits, for any debug display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics {
    pub line_text: String,
    pub line_number: usize,
    pub line_index: usize,
    pub selection_start: usize,
    pub selection_end: usize,
    pub is_unordered: bool,
    pub is_ordered: bool,
}

impl Diagnostics {
    /// Derive a fresh snapshot from the buffer.
    pub fn from_buffer(buffer: &EditorBuffer) -> Self {
        let position = buffer.position();
        let marker = buffer.list_marker();
        let Selection { start, end } = buffer.selection();
        Self {
            line_text: position.line_text,
            line_number: position.line_number,
            line_index: position.line_index,
            selection_start: start,
            selection_end: end,
            is_unordered: marker.is_unordered(),
            is_ordered: marker.is_ordered(),
        }
    }
}

/// The complete editing session state.
///
/// All state lives here; `update` is the only thing that changes it.
#[derive(Debug)]
pub struct Model {
    /// The text and the selection inside it
    pub buffer: EditorBuffer,
    /// Cursor/line snapshot, refreshed after every message
    pub diagnostics: Diagnostics,
    /// How the last message was handled
    pub last_outcome: Outcome,
}

impl Model {
    /// Start a session over `text` with the caret at the start.
    pub fn new(text: &str) -> Self {
        let buffer = EditorBuffer::from_text(text);
        let diagnostics = Diagnostics::from_buffer(&buffer);
        Self {
            buffer,
            diagnostics,
            last_outcome: Outcome::Default,
        }
    }

    /// Whether the last message suppressed the host default.
    pub fn default_prevented(&self) -> bool {
        self.last_outcome == Outcome::Prevented
    }

    pub(super) fn refresh_diagnostics(&mut self) {
        self.diagnostics = Diagnostics::from_buffer(&self.buffer);
    }
}
