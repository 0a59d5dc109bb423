//! InferenceClient trait definition.
//!
//! The single abstraction every inference backend implements. One call,
//! one full reply: there is no streaming and no retry at this layer.

use plx_types::llm::{InferenceError, InferenceReply, InferenceRequest};

/// Trait for inference endpoint backends.
///
/// Failures are returned as a typed [`InferenceError`] so the session
/// controller can branch on them at the turn boundary instead of unwinding.
///
/// Implementations live in plx-infra (e.g., `OllamaClient`).
pub trait InferenceClient: Send + Sync {
    /// Human-readable backend name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Perform one inference call and return the complete reply.
    fn generate(
        &self,
        request: &InferenceRequest,
    ) -> impl std::future::Future<Output = Result<InferenceReply, InferenceError>> + Send;
}
