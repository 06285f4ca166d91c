//! Session timing and the edit event log.
//!
//! Both are off by default. `--perf` prints timed scopes to stderr;
//! `--debug-log PATH` appends one line per dispatched message to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::editor::Selection;

static TIMING: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: LazyLock<Mutex<Option<EventLog>>> = LazyLock::new(|| Mutex::new(None));

/// Prints its lifetime to stderr on drop when timing is enabled.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        eprintln!("[perf] {}: {:.3} ms", self.name, elapsed_ms);
    }
}

#[derive(Debug)]
struct EventLog {
    start: Instant,
    seq: u64,
    writer: BufWriter<File>,
}

pub fn set_enabled(enabled: bool) {
    TIMING.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    TIMING.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

fn event_log() -> MutexGuard<'static, Option<EventLog>> {
    EVENT_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start writing edit events to `path`, or stop with `None`.
pub fn set_event_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = event_log();
    if let Some(old) = log.as_mut() {
        old.writer.flush()?;
    }
    *log = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "listedit edit log start")?;
        writer.flush()?;
        *log = Some(EventLog {
            start: Instant::now(),
            seq: 0,
            writer,
        });
    }
    Ok(())
}

pub fn is_event_log_enabled() -> bool {
    event_log().is_some()
}

/// Record one dispatched message. Write failures are dropped.
pub fn log_edit(op: &str, before: Selection, after: Selection, changed: bool) {
    let mut log = event_log();
    let Some(log) = log.as_mut() else {
        return;
    };
    log.seq += 1;
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    let _ = writeln!(
        log.writer,
        "[{elapsed_ms:>10.3} ms] #{seq} {op}: {}..{} -> {}..{}{}",
        before.start,
        before.end,
        after.start,
        after.end,
        if changed { " (changed)" } else { "" },
        seq = log.seq,
    );
    let _ = log.writer.flush();
}
