use crate::{
    error::{Error, Result},
    render::{RenderMode, render_line},
};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// What to do with a line that fails to parse or render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("trace log i/o failed")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub rendered: usize,
    pub skipped: usize,
}

/// Drives a whole log through one render mode, line by line and in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    pub mode: RenderMode,
    pub limit: Option<usize>,
    pub on_error: OnError,
}

impl Converter {
    #[must_use]
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Only the first `limit` lines are processed; `None` means all of them.
    #[must_use]
    pub fn with_limit(self, limit: Option<usize>) -> Self {
        Self { limit, ..self }
    }

    #[must_use]
    pub fn with_on_error(self, on_error: OnError) -> Self {
        Self { on_error, ..self }
    }

    /// Renders lines lazily, yielding 1-based line numbers with each result.
    pub fn lines<I>(&self, lines: I) -> impl Iterator<Item = (usize, Result<String>)>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mode = self.mode;

        lines
            .into_iter()
            .take(self.cap())
            .enumerate()
            .map(move |(idx, raw)| (idx + 1, render_line(raw.as_ref(), mode)))
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<Report, RunError> {
        let mut report = Report::default();

        for (idx, raw) in input.lines().take(self.cap()).enumerate() {
            let line = idx + 1;
            let raw = raw?;

            match render_line(&raw, self.mode) {
                Ok(rendered) => {
                    writeln!(output, "{rendered}")?;
                    report.rendered += 1;
                }
                Err(source) if self.on_error == OnError::Skip => {
                    warn!("skipping line {line}: {source}");
                    debug!("skipped line {line}: {raw:?}");
                    report.skipped += 1;
                }
                Err(source) => return Err(RunError::Line { line, source }),
            }
        }

        output.flush()?;

        info!(
            "rendered {} lines as {}, skipped {}",
            report.rendered, self.mode, report.skipped
        );

        Ok(report)
    }

    fn cap(&self) -> usize {
        self.limit.unwrap_or(usize::MAX)
    }
}
