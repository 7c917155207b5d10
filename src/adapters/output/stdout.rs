//! Stdout output sink for the terminal front-end.

use std::io::Write;

use tracing::warn;

use crate::ports::OutputSink;

/// Writes copied text to standard output between marker lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutputSink;

impl StdoutOutputSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutOutputSink {
    fn copy(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let written = writeln!(handle, "----- copiado -----")
            .and_then(|_| writeln!(handle, "{}", text))
            .and_then(|_| writeln!(handle, "-------------------"))
            .and_then(|_| handle.flush());

        if let Err(e) = written {
            warn!(error = %e, "Copy to stdout failed");
        }
    }
}
