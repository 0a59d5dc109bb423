//! Connection settings for the Ollama adapter.

use plx_types::config::{DEFAULT_HOST, DEFAULT_PORT};

/// Resolve a user-supplied host into a base URL.
///
/// - empty: `http://localhost:11434`
/// - bare host (`gpu-box`, `::1`): default port appended
/// - `host:port` or `[v6]:port`: `http://` prepended
/// - anything with a scheme: used as given, minus trailing slashes
pub fn resolve_base_url(host: &str) -> String {
    let host = host.trim();
    if host.is_empty() {
        return format!("http://{DEFAULT_HOST}:{DEFAULT_PORT}");
    }
    if host.contains("://") {
        return host.trim_end_matches('/').to_string();
    }

    let host = host.trim_end_matches('/');
    if let Some(rest) = host.strip_prefix('[') {
        // Bracketed IPv6, with or without a port.
        return match rest.split_once(']') {
            Some((_, port)) if port.starts_with(':') => format!("http://{host}"),
            _ => format!("http://{host}:{DEFAULT_PORT}"),
        };
    }

    match host.matches(':').count() {
        0 => format!("http://{host}:{DEFAULT_PORT}"),
        1 => format!("http://{host}"),
        // Unbracketed IPv6 literal.
        _ => format!("http://[{host}]:{DEFAULT_PORT}"),
    }
}
