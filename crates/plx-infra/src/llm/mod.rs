//! Inference client implementations.
//!
//! Contains the concrete [`InferenceClient`](plx_core::llm::client::InferenceClient)
//! for a local Ollama server.

pub mod ollama;

pub use ollama::OllamaClient;
