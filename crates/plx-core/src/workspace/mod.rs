//! Transient workspace port and its scoped release guard.
//!
//! The workspace maps each [`Slot`] to a location the editor process can
//! open. It is the only component that touches slot storage directly.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use plx_types::error::WorkspaceError;
use plx_types::slot::Slot;

/// Storage for the named slots of one session.
///
/// `release` must be idempotent and must never fail: individual removal
/// errors are logged by the implementation and swallowed.
pub trait Workspace: Send + Sync {
    /// Location of a slot, handed to the editor.
    fn path(&self, slot: Slot) -> &Path;

    /// Read the full contents of a slot.
    fn read(
        &self,
        slot: Slot,
    ) -> impl std::future::Future<Output = Result<String, WorkspaceError>> + Send;

    /// Overwrite a slot. The write is complete when the future resolves.
    fn write(
        &self,
        slot: Slot,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), WorkspaceError>> + Send;

    /// Overwrite a slot with empty content.
    fn clear(
        &self,
        slot: Slot,
    ) -> impl std::future::Future<Output = Result<(), WorkspaceError>> + Send {
        self.write(slot, "")
    }

    /// Remove every slot and the backing storage.
    fn release(&mut self);
}

/// Owns a workspace for the lifetime of a session and releases it on drop.
///
/// Dropping happens on every exit path out of the session: a clean stop,
/// an error returned with `?`, or a panic unwinding through the loop. The
/// guard calls `release` exactly once.
pub struct WorkspaceGuard<W: Workspace> {
    inner: W,
}

impl<W: Workspace> WorkspaceGuard<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Workspace> Deref for WorkspaceGuard<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.inner
    }
}

impl<W: Workspace> DerefMut for WorkspaceGuard<W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: Workspace> Drop for WorkspaceGuard<W> {
    fn drop(&mut self) {
        tracing::debug!("releasing session workspace");
        self.inner.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryWorkspace;

    #[test]
    fn test_guard_releases_on_drop() {
        let workspace = MemoryWorkspace::new();
        let releases = workspace.release_counter();
        {
            let _guard = WorkspaceGuard::new(workspace);
            assert_eq!(releases.get(), 0);
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_guard_releases_during_unwind() {
        let workspace = MemoryWorkspace::new();
        let releases = workspace.release_counter();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = WorkspaceGuard::new(workspace);
            panic!("injected");
        }));
        assert!(result.is_err());
        assert_eq!(releases.get(), 1);
    }

    #[tokio::test]
    async fn test_clear_overwrites_slot() {
        let workspace = MemoryWorkspace::new();
        workspace.write(Slot::Prompt, "draft").await.unwrap();
        workspace.clear(Slot::Prompt).await.unwrap();
        assert_eq!(workspace.read(Slot::Prompt).await.unwrap(), "");
    }
}
