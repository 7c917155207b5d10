//! CopyOutputHandler - sends text to the output sink unaltered.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::ports::OutputSink;

/// What is being copied. Used for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopySource {
    Prompt,
    ResultText,
    Template(String),
}

impl fmt::Display for CopySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopySource::Prompt => write!(f, "prompt"),
            CopySource::ResultText => write!(f, "result"),
            CopySource::Template(id) => write!(f, "template:{}", id),
        }
    }
}

/// Command to copy text.
#[derive(Debug, Clone)]
pub struct CopyOutputCommand {
    pub source: CopySource,
    pub text: String,
}

/// Handler for copy-to-output.
#[derive(Clone)]
pub struct CopyOutputHandler {
    sink: Arc<dyn OutputSink>,
}

impl CopyOutputHandler {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    pub fn handle(&self, cmd: CopyOutputCommand) {
        debug!(source = %cmd.source, chars = cmd.text.chars().count(), "Copying to output");
        self.sink.copy(&cmd.text);
    }
}
