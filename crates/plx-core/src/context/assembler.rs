//! Context assembler.
//!
//! Produces the [`ContextDocument`] for one turn from the selected file
//! paths, the transcript so far, and the current prompt. Assembly is
//! deterministic: the same inputs (and file contents) always render to the
//! same bytes. Files that cannot be embedded are returned as
//! [`SkippedFile`] warnings instead of failing the turn.

use std::path::Path;

use plx_types::context::{ContextDocument, EmbeddedFile, SkipReason, SkippedFile};
use plx_types::session::Transcript;

use crate::service::fs::FileSystem;

/// Result of assembling a context document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub document: ContextDocument,
    /// Side channel: selected files left out of the document.
    pub skipped: Vec<SkippedFile>,
}

/// Builds context documents.
pub struct ContextAssembler;

impl ContextAssembler {
    /// Assemble the context document for a turn.
    ///
    /// Each path is embedded in the order given. A path that does not exist
    /// is skipped with [`SkipReason::Missing`]; one that exists but cannot
    /// be read as text is skipped with [`SkipReason::Unreadable`].
    pub async fn assemble<F: FileSystem>(
        fs: &F,
        files: &[String],
        transcript: &Transcript,
        prompt: &str,
    ) -> Assembly {
        let mut embedded = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for path in files {
            let fs_path = Path::new(path);
            if !fs.exists(fs_path).await {
                tracing::debug!(path = %path, "selected file does not exist, skipping");
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: SkipReason::Missing,
                });
                continue;
            }

            match fs.read_file(fs_path).await {
                Ok(content) => embedded.push(EmbeddedFile {
                    path: path.clone(),
                    content,
                }),
                Err(err) => {
                    tracing::debug!(path = %path, error = %err, "selected file unreadable, skipping");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: SkipReason::Unreadable(err.to_string()),
                    });
                }
            }
        }

        Assembly {
            document: ContextDocument {
                files: embedded,
                history: transcript.render(),
                prompt: prompt.to_string(),
            },
            skipped,
        }
    }
}
