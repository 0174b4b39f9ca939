//! Output sink: print a report and optionally mirror it to a file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

/// Writes reports to a console writer and, when configured, overwrites the
/// output file with the same text.
pub struct OutputSink<W: Write> {
    out: W,
    path: Option<PathBuf>,
}

impl<W: Write> OutputSink<W> {
    pub fn new(out: W, path: Option<PathBuf>) -> Self {
        Self { out, path }
    }

    /// Print `text` followed by a newline; replace the output file's contents with it.
    pub fn emit(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;

        if let Some(path) = &self.path {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("failed to write output file '{}'", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        Ok(())
    }

    /// The console writer, for prompts and messages that are not reports.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
