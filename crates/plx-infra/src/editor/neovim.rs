//! Neovim launcher.
//!
//! The collect phase opens a three-pane layout: the system message on top
//! (the initial buffer), the prompt below it, and the running history in a
//! vertical split beside the prompt. Two user commands end the phase:
//! `:Send` writes every buffer and exits 0, `:Exit` exits 1.
//!
//! The file picker is an external plugin exposing `:FileSelector`. It finds
//! the selection slot through `g:plx_selection_file` or the
//! `PLX_SELECTION_FILE` environment variable and writes one path per line.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use plx_core::editor::{CollectTargets, DisplayTargets, Editor};
use plx_types::error::EditorError;
use plx_types::session::EditorSignal;

/// Environment variable carrying the file-selection slot path.
pub const SELECTION_FILE_ENV: &str = "PLX_SELECTION_FILE";

const LAYOUT: &str = "set nonumber norelativenumber wrap";

/// Launches Neovim (or any program accepting the same arguments) as a
/// foreground process on the inherited terminal.
#[derive(Debug, Clone)]
pub struct NeovimEditor {
    program: String,
}

impl NeovimEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for the collect phase.
    pub fn collect_args(targets: &CollectTargets<'_>) -> Vec<OsString> {
        let selection = targets.file_selection.to_string_lossy();
        let mut args = Vec::new();
        push_command(&mut args, LAYOUT);
        push_command(&mut args, "resize 20");
        push_command(&mut args, &format!("split {}", escape_path(targets.prompt)));
        push_command(&mut args, "wincmd k");
        push_command(
            &mut args,
            &format!("vsplit {}", escape_path(targets.history)),
        );
        push_command(
            &mut args,
            &format!(
                "let g:plx_selection_file = '{}'",
                selection.replace('\'', "''")
            ),
        );
        // The picker plugin is optional; a missing command must not block the prompt.
        push_command(&mut args, "silent! FileSelector");
        push_command(&mut args, "wincmd j");
        push_command(&mut args, "command! Send wa | qall | cquit 0");
        push_command(&mut args, "command! Exit cquit 1");
        args.push(targets.system_message.as_os_str().to_owned());
        args
    }

    /// Arguments for the display phase.
    pub fn display_args(targets: &DisplayTargets<'_>) -> Vec<OsString> {
        let mut args = Vec::new();
        push_command(&mut args, LAYOUT);
        push_command(
            &mut args,
            &format!("vsplit {}", escape_path(targets.context)),
        );
        push_command(&mut args, "setlocal nomodifiable");
        push_command(&mut args, "wincmd l");
        args.push(targets.output.as_os_str().to_owned());
        args
    }

    async fn run(
        &self,
        args: Vec<OsString>,
        selection: Option<&Path>,
    ) -> Result<Option<i32>, EditorError> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(path) = selection {
            command.env(SELECTION_FILE_ENV, path);
        }

        tracing::debug!(program = %self.program, "launching editor");
        let status = command.status().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EditorError::NotFound(self.program.clone())
            } else {
                EditorError::Launch {
                    program: self.program.clone(),
                    message: e.to_string(),
                }
            }
        })?;
        tracing::debug!(program = %self.program, code = ?status.code(), "editor exited");
        Ok(status.code())
    }
}

impl Default for NeovimEditor {
    fn default() -> Self {
        Self::new("nvim")
    }
}

impl Editor for NeovimEditor {
    fn name(&self) -> &str {
        &self.program
    }

    async fn collect(&self, targets: &CollectTargets<'_>) -> Result<EditorSignal, EditorError> {
        let code = self
            .run(Self::collect_args(targets), Some(targets.file_selection))
            .await?;
        Ok(EditorSignal::from_exit_code(code))
    }

    async fn display(&self, targets: &DisplayTargets<'_>) -> Result<(), EditorError> {
        self.run(Self::display_args(targets), None).await?;
        Ok(())
    }
}

fn push_command(args: &mut Vec<OsString>, command: &str) {
    args.push(OsString::from("-c"));
    args.push(OsString::from(command));
}

/// Escape a path for use as an ex-command argument.
fn escape_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, ' ' | '\\' | '%' | '#' | '|' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
