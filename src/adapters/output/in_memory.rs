//! In-memory output sink.
//!
//! Keeps every copied string in order. Used by tests to check that
//! prompts and results reach the output unaltered.

use std::sync::{Arc, Mutex};

use crate::ports::OutputSink;

/// In-memory implementation of the OutputSink port.
///
/// Clones share the same buffer, so a test can hand one clone to the view
/// controller and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOutputSink {
    copies: Arc<Mutex<Vec<String>>>,
}

impl InMemoryOutputSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything copied so far.
    pub fn copies(&self) -> Vec<String> {
        self.copies
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent copy.
    pub fn last(&self) -> Option<String> {
        self.copies.lock().ok().and_then(|c| c.last().cloned())
    }

    /// Clears the buffer.
    pub fn clear(&self) {
        if let Ok(mut copies) = self.copies.lock() {
            copies.clear();
        }
    }
}

impl OutputSink for InMemoryOutputSink {
    fn copy(&self, text: &str) {
        if let Ok(mut copies) = self.copies.lock() {
            copies.push(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_copies_in_order() {
        let sink = InMemoryOutputSink::new();
        sink.copy("one");
        sink.copy("two");
        assert_eq!(sink.copies(), vec!["one".to_string(), "two".to_string()]);
        assert_eq!(sink.last().as_deref(), Some("two"));
    }

    #[test]
    fn clones_share_the_buffer() {
        let sink = InMemoryOutputSink::new();
        let handle = sink.clone();
        sink.copy("  spaced  text \n");
        assert_eq!(handle.last().as_deref(), Some("  spaced  text \n"));

        handle.clear();
        assert!(sink.copies().is_empty());
    }
}
