//! Temp-directory implementation of the session workspace.
//!
//! Every session gets one uniquely named directory (`plx-XXXXXX` under the
//! system temp dir) holding one file per [`Slot`]. The editor is pointed at
//! these files; the controller reads and writes them between editor runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use plx_core::workspace::Workspace;
use plx_types::error::WorkspaceError;
use plx_types::slot::Slot;

/// Workspace backed by a temporary directory.
///
/// Released at most once: `release` is idempotent and also runs on `Drop`,
/// so a workspace that was never handed to a session still cleans up.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: Option<TempDir>,
    root: PathBuf,
    paths: BTreeMap<Slot, PathBuf>,
}

impl TempWorkspace {
    /// Create the workspace under the system temp directory.
    ///
    /// All slots are created empty except the system-message slot, which is
    /// seeded with `system_message`.
    pub async fn acquire(system_message: &str) -> Result<Self, WorkspaceError> {
        Self::acquire_in(&std::env::temp_dir(), system_message).await
    }

    /// Create the workspace under `parent`.
    pub async fn acquire_in(parent: &Path, system_message: &str) -> Result<Self, WorkspaceError> {
        let dir = tempfile::Builder::new()
            .prefix("plx-")
            .tempdir_in(parent)
            .map_err(|e| WorkspaceError::Acquire(e.to_string()))?;

        let root = dir.path().to_path_buf();
        let paths = Slot::ALL
            .iter()
            .map(|slot| (*slot, root.join(slot.file_name())))
            .collect();

        // From here a failed slot write drops `workspace`, which releases
        // whatever was already created.
        let workspace = Self {
            dir: Some(dir),
            root,
            paths,
        };
        for slot in Slot::ALL {
            let content = if slot == Slot::SystemMessage {
                system_message
            } else {
                ""
            };
            workspace.write(slot, content).await?;
        }

        tracing::debug!(root = %workspace.root.display(), "workspace acquired");
        Ok(workspace)
    }

    /// The workspace directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `release` has already run.
    pub fn is_released(&self) -> bool {
        self.dir.is_none()
    }
}

impl Workspace for TempWorkspace {
    fn path(&self, slot: Slot) -> &Path {
        &self.paths[&slot]
    }

    async fn read(&self, slot: Slot) -> Result<String, WorkspaceError> {
        if self.is_released() {
            return Err(WorkspaceError::Released);
        }
        tokio::fs::read_to_string(self.path(slot))
            .await
            .map_err(|e| WorkspaceError::Read {
                slot,
                message: e.to_string(),
            })
    }

    async fn write(&self, slot: Slot, content: &str) -> Result<(), WorkspaceError> {
        if self.is_released() {
            return Err(WorkspaceError::Released);
        }
        tokio::fs::write(self.path(slot), content)
            .await
            .map_err(|e| WorkspaceError::Write {
                slot,
                message: e.to_string(),
            })
    }

    fn release(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };

        for (slot, path) in &self.paths {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(
                        slot = %slot,
                        path = %path.display(),
                        error = %e,
                        "failed to remove workspace slot"
                    );
                }
            }
        }

        // Also sweeps anything the editor left behind (swap or backup files).
        if let Err(e) = dir.close() {
            tracing::warn!(
                root = %self.root.display(),
                error = %e,
                "failed to remove workspace directory"
            );
        } else {
            tracing::debug!(root = %self.root.display(), "workspace released");
        }
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        self.release();
    }
}
