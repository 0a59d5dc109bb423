//! Inference request/reply types and errors.

use serde::{Deserialize, Serialize};

/// One inference call: the assembled context plus a system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub model: String,
    /// The rendered context document.
    pub prompt: String,
    pub system: String,
}

/// A successful inference reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceReply {
    /// The full reply text.
    pub text: String,
    /// Auxiliary diagnostic string (timings, token counts) for logging.
    pub diagnostic: String,
}

/// Errors from the inference endpoint.
///
/// These are expected failures: the controller reports them and moves on to
/// the next turn.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("could not reach inference host {url}: {message}")]
    Connection { url: String, message: String },

    #[error("inference request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("inference endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed inference response: {0}")]
    Deserialization(String),

    #[error("model '{0}' not found on inference host")]
    ModelNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_error_display() {
        let err = InferenceError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "inference endpoint returned HTTP 500: boom");

        let err = InferenceError::ModelNotFound("llama3".into());
        assert!(err.to_string().contains("llama3"));
    }

    #[test]
    fn test_request_serde() {
        let request = InferenceRequest {
            model: "llama3".into(),
            prompt: "<prompt>hi</prompt>".into(),
            system: "be brief".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: InferenceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
