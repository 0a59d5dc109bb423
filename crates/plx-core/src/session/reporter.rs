//! User-facing event reporting for the session loop.

use plx_types::context::SkippedFile;
use plx_types::llm::{InferenceError, InferenceReply};

/// Receives the events a user should see while a session runs.
///
/// The CLI renders these to the terminal between editor invocations. None
/// of the methods can fail; reporting never affects the session outcome.
pub trait SessionReporter: Send + Sync {
    /// A selected file was left out of the context.
    fn file_skipped(&self, skipped: &SkippedFile);

    /// The inference call for this turn has started.
    fn query_started(&self, model: &str);

    /// The inference call returned a reply.
    fn query_finished(&self, reply: &InferenceReply);

    /// The inference call failed; the turn has been discarded.
    fn query_failed(&self, error: &InferenceError);

    /// The user stopped the session from the editor.
    fn stopped(&self, code: Option<i32>);
}
