//! listedit - list-aware line editing from the command line.
//!
//! # Usage
//!
//! ```bash
//! listedit notes.md --keys "tab enter type:next"
//! listedit notes.md --caret 12 --keys "shift-tab" --in-place
//! listedit notes.md --script session.keys
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use listedit::app::App;
use listedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use listedit::perf;

/// Replay list-aware keystrokes over a text file
#[derive(Parser, Debug)]
#[command(name = "listedit", version, about, long_about = None)]
struct Cli {
    /// Text file to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Keystroke script, e.g. "tab enter type:item"
    #[arg(short, long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// Read the keystroke script from a file (runs before --keys)
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Initial caret offset in chars (default: end of file)
    #[arg(short, long, value_name = "OFFSET")]
    caret: Option<usize>,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long)]
    in_place: bool,

    /// Print timing for the session to stderr
    #[arg(long)]
    perf: bool,

    /// Write every dispatched edit to a log file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// The saveable flags as given on this command line.
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            in_place: self.in_place,
            perf: self.perf,
            debug_log: self.debug_log.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("LISTEDIT_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_event_log_path(debug_log_path.as_deref()) {
        tracing::warn!(
            path = ?debug_log_path,
            %err,
            "failed to open edit debug log"
        );
    }

    // Verify file exists
    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let mut script = String::new();
    if let Some(path) = &cli.script {
        script = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        script.push('\n');
    }
    if let Some(keys) = &cli.keys {
        script.push_str(keys);
    }

    App::new(cli.file)
        .with_script(script)
        .with_caret(cli.caret)
        .with_in_place(effective.in_place)
        .run()
        .context("Application error")
}
