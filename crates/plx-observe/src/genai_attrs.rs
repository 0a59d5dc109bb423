//! OpenTelemetry GenAI Semantic Convention attribute names and values.
//!
//! The inference span is opened with the request-side attributes written as
//! dotted field names (`gen_ai.request.model = ..`); the response-side
//! attributes below are declared `Empty` on the span and filled in with
//! `Span::record` once the reply arrives. Spans are named
//! `gen_ai.{operation}`; the model goes in `gen_ai.request.model`.

// --- Response attributes (recorded after the call) ---

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The finish reasons for the response (e.g., "stop", "length").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

// --- Operation name values ---

/// Single-prompt text completion (no chat roles).
pub const OP_TEXT_COMPLETION: &str = "text_completion";

// --- Span names ---

/// Span wrapping one text-completion call.
pub const SPAN_TEXT_COMPLETION: &str = "gen_ai.text_completion";

// --- Provider name values ---

/// Ollama provider identifier.
pub const PROVIDER_OLLAMA: &str = "ollama";
