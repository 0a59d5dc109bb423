//! Observability for llm-plx: tracing subscriber setup and span field names.

pub mod genai_attrs;
pub mod tracing_setup;
