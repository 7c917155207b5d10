//! Output Sink Port - the single side-effecting copy hook.
//!
//! Prompts, result text and templates are copied through this port
//! unaltered. Implementations must either succeed or silently do nothing;
//! a failed copy never affects wizard state.

/// Port for copy-to-output.
pub trait OutputSink: Send + Sync {
    /// Delivers `text` to the output exactly as given.
    fn copy(&self, text: &str);
}
