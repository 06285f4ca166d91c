//! Keystroke scripts for replaying an editing session.
//!
//! A script is a list of whitespace separated commands. Lines starting
//! with `#` are comments.
//!
//! | command        | message                                   |
//! |----------------|-------------------------------------------|
//! | `tab`          | Tab key-down                              |
//! | `shift-tab`    | Shift+Tab key-down                        |
//! | `tab!`         | Tab auto-repeat (also `shift-tab!`)       |
//! | `enter`        | newline input                             |
//! | `backspace`    | Backspace (also `delete`, `left`, `right`, `home`, `end`) |
//! | `caret:N`      | caret at char offset N                    |
//! | `select:A..B`  | selection from A to B                     |
//! | `type:TEXT`    | insert TEXT; `\n`, `\t`, `\s`, `\\` escapes |

use thiserror::Error;

use crate::app::{Key, KeyPress, Message};

/// A script command that could not be parsed. `step` is one-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("step {step}: unknown command `{token}`")]
    UnknownCommand { step: usize, token: String },
    #[error("step {step}: `{value}` is not a char offset")]
    InvalidOffset { step: usize, value: String },
    #[error("step {step}: `{value}` is not a range, expected START..END")]
    InvalidRange { step: usize, value: String },
    #[error("step {step}: unknown escape `\\{escape}`")]
    InvalidEscape { step: usize, escape: char },
}

/// Parse a script into the messages it stands for.
pub fn parse_script(source: &str) -> Result<Vec<Message>, ScriptError> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .enumerate()
        .map(|(i, token)| parse_command(i + 1, token))
        .collect()
}

fn parse_command(step: usize, token: &str) -> Result<Message, ScriptError> {
    let key = |key: Key| -> Result<Message, ScriptError> {
        Ok(Message::KeyDown(KeyPress::new(key)))
    };
    match token {
        "tab" => key(Key::Tab),
        "shift-tab" => Ok(Message::KeyDown(KeyPress::new(Key::Tab).with_shift())),
        "tab!" => Ok(Message::KeyDown(KeyPress::new(Key::Tab).repeated())),
        "shift-tab!" => Ok(Message::KeyDown(
            KeyPress::new(Key::Tab).with_shift().repeated(),
        )),
        "enter" => Ok(Message::BeforeInput("\n".to_string())),
        "backspace" => key(Key::Backspace),
        "delete" => key(Key::Delete),
        "left" => key(Key::Left),
        "right" => key(Key::Right),
        "home" => key(Key::Home),
        "end" => key(Key::End),
        _ => {
            if let Some(value) = token.strip_prefix("caret:") {
                let offset = parse_offset(step, value)?;
                Ok(Message::SelectionChanged {
                    start: offset,
                    end: offset,
                })
            } else if let Some(value) = token.strip_prefix("select:") {
                let (start, end) = parse_range(step, value)?;
                Ok(Message::SelectionChanged { start, end })
            } else if let Some(value) = token.strip_prefix("type:") {
                Ok(Message::BeforeInput(unescape(step, value)?))
            } else {
                Err(ScriptError::UnknownCommand {
                    step,
                    token: token.to_string(),
                })
            }
        }
    }
}

fn parse_offset(step: usize, value: &str) -> Result<usize, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidOffset {
        step,
        value: value.to_string(),
    })
}

fn parse_range(step: usize, value: &str) -> Result<(usize, usize), ScriptError> {
    let invalid = || ScriptError::InvalidRange {
        step,
        value: value.to_string(),
    };
    let (start, end) = value.split_once("..").ok_or_else(invalid)?;
    let start: usize = start.parse().map_err(|_| invalid())?;
    let end: usize = end.parse().map_err(|_| invalid())?;
    if start > end {
        return Err(invalid());
    }
    Ok((start, end))
}

fn unescape(step: usize, value: &str) -> Result<String, ScriptError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some('\\') => out.push('\\'),
            Some(escape) => return Err(ScriptError::InvalidEscape { step, escape }),
            None => out.push('\\'),
        }
    }
    Ok(out)
}
