//! OllamaClient -- concrete [`InferenceClient`] for a local Ollama server.
//!
//! Sends one non-streaming `POST /api/generate` per turn and returns the
//! full `response` text. The call waits as long as the server takes unless
//! a request timeout is configured.

pub mod config;
pub mod types;

use std::time::Duration;

use tracing::{Instrument, info_span};

use plx_core::llm::client::InferenceClient;
use plx_observe::genai_attrs;
use plx_types::llm::{InferenceError, InferenceReply, InferenceRequest};

use self::config::resolve_base_url;
use self::types::{GenerateRequest, GenerateResponse};

/// Ollama inference client.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: Option<u64>,
}

impl OllamaClient {
    /// Create a client for `host` (see [`resolve_base_url`] for accepted
    /// forms). With `timeout_secs` unset no request timeout is applied.
    pub fn new(host: &str, timeout_secs: Option<u64>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().expect("failed to create reqwest client");

        Self {
            client,
            base_url: resolve_base_url(host),
            timeout_secs,
        }
    }

    /// The resolved base URL, e.g. `http://localhost:11434`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, url: &str, e: reqwest::Error) -> InferenceError {
        match self.timeout_secs {
            Some(secs) if e.is_timeout() => InferenceError::Timeout { secs },
            _ => InferenceError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            },
        }
    }

    async fn call(&self, request: &InferenceRequest) -> Result<GenerateResponse, InferenceError> {
        let url = self.url("/api/generate");
        let body = GenerateRequest {
            model: &request.model,
            prompt: &request.prompt,
            system: &request.system,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                404 => InferenceError::ModelNotFound(request.model.clone()),
                code => InferenceError::Status {
                    status: code,
                    body: error_body,
                },
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&url, e))?;
        serde_json::from_str(&text)
            .map_err(|e| InferenceError::Deserialization(format!("failed to parse response: {e}")))
    }
}

impl InferenceClient for OllamaClient {
    fn name(&self) -> &str {
        genai_attrs::PROVIDER_OLLAMA
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<InferenceReply, InferenceError> {
        let span = info_span!(
            genai_attrs::SPAN_TEXT_COMPLETION,
            gen_ai.operation.name = genai_attrs::OP_TEXT_COMPLETION,
            gen_ai.system = genai_attrs::PROVIDER_OLLAMA,
            gen_ai.request.model = %request.model,
            server.address = %self.base_url,
            gen_ai.usage.input_tokens = tracing::field::Empty,
            gen_ai.usage.output_tokens = tracing::field::Empty,
            gen_ai.response.finish_reasons = tracing::field::Empty,
        );

        let response = self.call(request).instrument(span.clone()).await?;

        if let Some(n) = response.prompt_eval_count {
            span.record(genai_attrs::GEN_AI_USAGE_INPUT_TOKENS, n);
        }
        if let Some(n) = response.eval_count {
            span.record(genai_attrs::GEN_AI_USAGE_OUTPUT_TOKENS, n);
        }
        if let Some(reason) = &response.done_reason {
            span.record(genai_attrs::GEN_AI_RESPONSE_FINISH_REASONS, reason.as_str());
        }

        let diagnostic = response.diagnostic();
        tracing::debug!(parent: &span, %diagnostic, "inference finished");

        Ok(InferenceReply {
            text: response.response,
            diagnostic,
        })
    }
}
