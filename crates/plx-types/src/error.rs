use thiserror::Error;

use crate::slot::Slot;

/// Errors from the transient workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to create workspace: {0}")]
    Acquire(String),

    #[error("failed to read {slot} slot: {message}")]
    Read { slot: Slot, message: String },

    #[error("failed to write {slot} slot: {message}")]
    Write { slot: Slot, message: String },

    #[error("workspace already released")]
    Released,
}

/// Errors launching the external editor.
///
/// A non-zero exit is not an error; it is a stop signal. These variants
/// cover the editor not running at all.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor '{0}' not found")]
    NotFound(String),

    #[error("failed to launch editor '{program}': {message}")]
    Launch { program: String, message: String },
}

/// Unexpected failures that end a session.
///
/// Expected failures (stop signal, missing files, inference errors) are
/// handled inside the turn and never appear here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Errors loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("failed to serialize settings: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_error_display() {
        let err = WorkspaceError::Write {
            slot: Slot::Output,
            message: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write output slot: disk full");
    }

    #[test]
    fn test_session_error_is_transparent() {
        let err: SessionError = EditorError::NotFound("nvim".to_string()).into();
        assert_eq!(err.to_string(), "editor 'nvim' not found");
    }
}
