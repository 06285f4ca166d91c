use crate::app::Model;
use crate::app::model::Outcome;
use crate::editor::{EditorBuffer, Selection};
use crate::perf;

/// Keys whose key-down the session reacts to.
///
/// Printable input and Enter arrive as [`Message::BeforeInput`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// A key-down event as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
    /// Set for auto-repeat while the key stays held.
    pub repeat: bool,
}

impl KeyPress {
    /// A first, unshifted press of `key`.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            repeat: false,
        }
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub const fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// All events the host surface forwards to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key went down (or auto-repeated)
    KeyDown(KeyPress),
    /// Text is about to be inserted at the selection; `"\n"` for Enter
    BeforeInput(String),
    /// The host moved the selection
    SelectionChanged { start: usize, end: usize },
}

/// Apply one message to the model.
///
/// # Panics
///
/// Panics if a [`Message::SelectionChanged`] range does not fit the
/// buffer; hosts validate with [`EditorBuffer::check_selection`] first.
pub fn update(mut model: Model, msg: Message) -> Model {
    let before = model.buffer.selection();
    let (op, changed, outcome) = match msg {
        Message::KeyDown(press) => key_down(&mut model.buffer, press),
        Message::BeforeInput(text) => before_input(&mut model.buffer, &text),
        Message::SelectionChanged { start, end } => {
            model.buffer.select(start, end);
            ("select", false, Outcome::Default)
        }
    };
    let after = model.buffer.selection();

    tracing::trace!(
        target: "listedit.dispatch",
        op,
        changed,
        ?outcome,
        from_start = before.start,
        from_end = before.end,
        to_start = after.start,
        to_end = after.end,
        "dispatch"
    );
    if perf::is_event_log_enabled() {
        perf::log_edit(op, before, after, changed);
    }

    model.last_outcome = outcome;
    model.refresh_diagnostics();
    model
}

fn key_down(buffer: &mut EditorBuffer, press: KeyPress) -> (&'static str, bool, Outcome) {
    match press.key {
        // Tab never falls through to the host; a held key edits only once.
        Key::Tab if press.repeat => ("tab_repeat", false, Outcome::Prevented),
        Key::Tab if press.shift => ("outdent", buffer.outdent_list_item(), Outcome::Prevented),
        Key::Tab => ("indent", buffer.indent_list_item(), Outcome::Prevented),
        Key::Backspace => ("delete_back", buffer.delete_back(), Outcome::Default),
        Key::Delete => ("delete_forward", buffer.delete_forward(), Outcome::Default),
        Key::Left => move_caret(buffer, "left", EditorBuffer::move_left),
        Key::Right => move_caret(buffer, "right", EditorBuffer::move_right),
        Key::Home => move_caret(buffer, "home", EditorBuffer::move_home),
        Key::End => move_caret(buffer, "end", EditorBuffer::move_end),
    }
}

fn move_caret(
    buffer: &mut EditorBuffer,
    op: &'static str,
    motion: fn(&mut EditorBuffer),
) -> (&'static str, bool, Outcome) {
    motion(buffer);
    (op, false, Outcome::Default)
}

fn before_input(buffer: &mut EditorBuffer, text: &str) -> (&'static str, bool, Outcome) {
    if text == "\n" && buffer.continue_list() {
        return ("continue_list", true, Outcome::Prevented);
    }
    let before: Selection = buffer.selection();
    buffer.insert_str(text);
    let changed = !text.is_empty() || !before.is_caret();
    ("insert", changed, Outcome::Default)
}
