//! Editor handoff port.
//!
//! The editor runs as a blocking foreground process twice per turn: once to
//! collect the prompt and file selection, once to display the reply. Its
//! exit status is the only control signal it sends back.

use std::path::Path;

use plx_types::error::EditorError;
use plx_types::session::EditorSignal;
use plx_types::slot::Slot;

use crate::workspace::Workspace;

/// Slot locations the collect-phase editor opens.
#[derive(Debug, Clone, Copy)]
pub struct CollectTargets<'a> {
    pub prompt: &'a Path,
    pub file_selection: &'a Path,
    pub system_message: &'a Path,
    /// Shown read-only for reference.
    pub history: &'a Path,
}

impl<'a> CollectTargets<'a> {
    pub fn from_workspace<W: Workspace>(workspace: &'a W) -> Self {
        Self {
            prompt: workspace.path(Slot::Prompt),
            file_selection: workspace.path(Slot::FileSelection),
            system_message: workspace.path(Slot::SystemMessage),
            history: workspace.path(Slot::History),
        }
    }
}

/// Slot locations the display-phase editor opens.
#[derive(Debug, Clone, Copy)]
pub struct DisplayTargets<'a> {
    pub output: &'a Path,
    /// Shown for reference next to the reply.
    pub context: &'a Path,
}

impl<'a> DisplayTargets<'a> {
    pub fn from_workspace<W: Workspace>(workspace: &'a W) -> Self {
        Self {
            output: workspace.path(Slot::Output),
            context: workspace.path(Slot::Context),
        }
    }
}

/// Trait for interactive editor launchers.
///
/// Implementations inherit the controlling terminal and block until the
/// user quits the editor. There is no timeout.
pub trait Editor: Send + Sync {
    /// Program name, for logs and error messages.
    fn name(&self) -> &str;

    /// Run the collect phase and map the exit status to a signal.
    ///
    /// Exit code 0 is [`EditorSignal::Send`]; anything else is
    /// [`EditorSignal::Stop`]. `Err` means the editor could not run at all.
    fn collect(
        &self,
        targets: &CollectTargets<'_>,
    ) -> impl std::future::Future<Output = Result<EditorSignal, EditorError>> + Send;

    /// Run the display phase. The exit status is ignored.
    fn display(
        &self,
        targets: &DisplayTargets<'_>,
    ) -> impl std::future::Future<Output = Result<(), EditorError>> + Send;
}
