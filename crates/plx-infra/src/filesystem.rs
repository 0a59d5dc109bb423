//! Filesystem adapter and settings-directory resolution.
//!
//! Implements the `FileSystem` trait from `plx-core` for real filesystem I/O.

use std::path::{Path, PathBuf};

use plx_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
///
/// All operations go through `tokio::fs` for async I/O. Relative paths are
/// resolved against the process working directory, which the editor shares.
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new LocalFileSystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Resolve the settings directory from environment or platform defaults.
///
/// Priority:
/// 1. `PLX_CONFIG_DIR` environment variable
/// 2. Platform config directory (e.g., `~/.config/llm-plx` on Linux)
/// 3. `.llm-plx` in the current directory
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PLX_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(config) = dirs::config_dir() {
        return config.join("llm-plx");
    }

    PathBuf::from(".llm-plx")
}
