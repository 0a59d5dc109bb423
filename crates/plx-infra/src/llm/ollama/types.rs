//! Ollama `/api/generate` wire types.
//!
//! Ollama-specific request/response bodies. The provider-agnostic types
//! live in `plx-types`.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub system: &'a str,
    pub stream: bool,
}

/// Non-streaming response body. Only `response` is required; the rest are
/// timings and counters Ollama reports when the generation finishes.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub done_reason: Option<String>,
    /// Nanoseconds.
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
}

impl GenerateResponse {
    /// One-line summary of the generation metadata.
    pub fn diagnostic(&self) -> String {
        let mut parts = Vec::new();
        if let Some(reason) = &self.done_reason {
            parts.push(format!("done_reason={reason}"));
        }
        if let Some(n) = self.prompt_eval_count {
            parts.push(format!("prompt_tokens={n}"));
        }
        if let Some(n) = self.eval_count {
            parts.push(format!("output_tokens={n}"));
        }
        if let Some(ns) = self.total_duration {
            parts.push(format!("total={:.2}s", ns as f64 / 1e9));
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_empty_system() {
        let req = GenerateRequest {
            model: "m",
            prompt: "p",
            system: "",
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("system").is_none());
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_response_minimal_body() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(resp.response, "hi");
        assert_eq!(resp.diagnostic(), "");
    }

    #[test]
    fn test_diagnostic_summary() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"response":"hi","done":true,"done_reason":"stop",
                "total_duration":1500000000,"prompt_eval_count":12,"eval_count":34}"#,
        )
        .unwrap();
        assert_eq!(
            resp.diagnostic(),
            "done_reason=stop prompt_tokens=12 output_tokens=34 total=1.50s"
        );
    }
}
