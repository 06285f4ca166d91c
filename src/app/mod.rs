//! Editing session state and dispatch.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The buffer, its selection and the diagnostics snapshot
//! - [`Message`]: Events forwarded by the host text surface
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Replays a keystroke script over a file

mod event_loop;
mod input;
mod model;
mod script;
mod update;

pub use input::{translate_event, translate_key};
pub use model::{Diagnostics, Model, Outcome};
pub use script::{ScriptError, parse_script};
pub use update::{Key, KeyPress, Message, update};

use std::path::PathBuf;

/// Runs one editing session over a file.
pub struct App {
    file_path: PathBuf,
    script: String,
    caret: Option<usize>,
    in_place: bool,
}

impl App {
    /// Create a new session for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            script: String::new(),
            caret: None,
            in_place: false,
        }
    }

    /// Keystroke script to replay (see [`parse_script`]).
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Initial caret offset. Defaults to the end of the file.
    pub const fn with_caret(mut self, caret: Option<usize>) -> Self {
        self.caret = caret;
        self
    }

    /// Write the result back to the file instead of stdout.
    pub const fn with_in_place(mut self, enabled: bool) -> Self {
        self.in_place = enabled;
        self
    }
}
