//! Configuration types for llm-plx.
//!
//! `PlxConfig` is the on-disk `settings.toml` shape. Every field has a
//! default so a partial or empty file still loads.

use serde::{Deserialize, Serialize};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "hf.co/unsloth/Devstral-Small-2507-GGUF:UD-Q4_K_XL";

/// Inference host used when none is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Port the inference server listens on when the host omits one.
pub const DEFAULT_PORT: u16 = 11434;

/// System message seeded into the system-message slot.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful AI assistant.";

/// Top-level configuration.
///
/// Loaded from `settings.toml` in the settings directory, then overridden by
/// environment variables and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlxConfig {
    /// Model identifier passed to the inference endpoint.
    #[serde(default = "default_model")]
    pub model: String,

    /// Inference host: bare hostname, `host:port`, or a full URL.
    #[serde(default = "default_host")]
    pub host: String,

    /// Editor binary (must accept Neovim's `-c` directives).
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Initial contents of the system-message slot.
    #[serde(default = "default_system_message")]
    pub system_message: String,

    /// Optional upper bound on a single inference call, in seconds. Unset
    /// means the call waits until the server answers or the connection fails.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_editor() -> String {
    "nvim".to_string()
}

fn default_system_message() -> String {
    DEFAULT_SYSTEM_MESSAGE.to_string()
}

impl Default for PlxConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            host: default_host(),
            editor: default_editor(),
            system_message: default_system_message(),
            request_timeout_secs: None,
        }
    }
}
