// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # listedit
//!
//! List-aware line editing for plain text inputs.
//!
//! - Tab / Shift+Tab indent or outdent the current line when it is a list
//!   item (`- item` or `1. item`)
//! - Enter after a list item opens the next item at the same depth
//! - Held-down Tab edits once per physical press
//!
//! ## Architecture
//!
//! The host text surface is a thin adapter. It forwards raw events as
//! [`app::Message`]s and the session applies them with The Elm
//! Architecture (TEA) pattern:
//! - **Model**: the buffer, its selection and a diagnostics snapshot
//! - **Message**: key-down, text-about-to-be-inserted, selection change
//! - **Update**: pure state transitions
//!
//! ## Modules
//!
//! - [`editor`]: Text buffer and list item rules
//! - [`app`]: Session state, dispatch and the crossterm adapter
//! - [`config`]: Saved default flags
//! - [`perf`]: Timing and the edit event log

pub mod app;
pub mod config;
pub mod editor;
pub mod perf;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::editor::{EditorBuffer, ListMarker, Selection, classify_line};
}
