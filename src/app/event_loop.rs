use std::fs;
use std::io::{Write, stdout};

use anyhow::{Context, Result};

use crate::app::{App, Message, Model, parse_script, update};
use crate::perf;

impl App {
    /// Replay the script over the file, then print or save the result.
    pub fn run(&self) -> Result<()> {
        let mut model = self.replay()?;

        if self.in_place {
            if model.buffer.is_dirty() {
                let _scope = perf::scope("app.save");
                fs::write(&self.file_path, model.buffer.text())
                    .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
                model.buffer.mark_clean();
            }
            return Ok(());
        }

        let mut out = stdout().lock();
        out.write_all(model.buffer.text().as_bytes())
            .context("Failed to write result")?;
        out.flush().context("Failed to write result")
    }

    /// Load the file and dispatch every scripted message through `update`.
    pub fn replay(&self) -> Result<Model> {
        let _scope = perf::scope("app.replay");

        let text = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let messages = parse_script(&self.script).context("Invalid key script")?;

        let mut model = Model::new(&text);
        let caret = self.caret.unwrap_or_else(|| model.buffer.len_chars());
        model
            .buffer
            .check_selection(caret, caret)
            .context("Invalid --caret")?;
        model = update(model, Message::SelectionChanged { start: caret, end: caret });
        tracing::debug!(
            target: "listedit.app",
            file = %self.file_path.display(),
            steps = messages.len(),
            caret,
            "replay start"
        );

        for (i, msg) in messages.into_iter().enumerate() {
            // The script stands in for the host, which only reports valid ranges.
            if let Message::SelectionChanged { start, end } = msg {
                model
                    .buffer
                    .check_selection(start, end)
                    .with_context(|| format!("Invalid selection at script step {}", i + 1))?;
            }
            model = update(model, msg);
        }

        tracing::debug!(
            target: "listedit.app",
            diagnostics = ?model.diagnostics,
            dirty = model.buffer.is_dirty(),
            "replay done"
        );
        Ok(model)
    }
}
