//! Session controller state machine.
//!
//! ```text
//!            send                ok
//! AwaitingInput ──► Querying ──────► Displaying
//!      ▲   │            │ inference       │
//!      │   │ stop       │ failed          │
//!      │   ▼            ▼                 │
//!      │ Stopped   AwaitingInput          │
//!      └──────────────────────────────────┘
//! ```
//!
//! The workspace is owned by a [`WorkspaceGuard`] inside the session, so it
//! is released exactly once however `run` ends: clean stop, an unexpected
//! error propagated with `?`, or a panic.

use plx_types::error::SessionError;
use plx_types::llm::InferenceRequest;
use plx_types::session::{EditorSignal, PendingTurn, SessionSummary, Transcript, Turn};
use plx_types::slot::Slot;

use crate::context::assembler::ContextAssembler;
use crate::context::selection::parse_file_selection;
use crate::editor::{CollectTargets, DisplayTargets, Editor};
use crate::llm::client::InferenceClient;
use crate::service::fs::FileSystem;
use crate::workspace::{Workspace, WorkspaceGuard};

use super::reporter::SessionReporter;

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Model identifier sent with every inference request.
    pub model: String,
    /// Inference host, for logs. The client owns the connection.
    pub host: String,
}

/// Where the turn loop currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Querying(PendingTurn),
    Displaying,
    Stopped { code: Option<i32> },
}

/// One run of the editor-driven chat loop.
pub struct Session<W, E, C, F, R>
where
    W: Workspace,
{
    config: SessionConfig,
    workspace: WorkspaceGuard<W>,
    editor: E,
    client: C,
    fs: F,
    reporter: R,
    transcript: Transcript,
    failed_turns: usize,
}

impl<W, E, C, F, R> Session<W, E, C, F, R>
where
    W: Workspace,
    E: Editor,
    C: InferenceClient,
    F: FileSystem,
    R: SessionReporter,
{
    /// Create a session that takes ownership of an acquired workspace.
    ///
    /// From here on the workspace is released when the session is dropped,
    /// whether or not `run` is ever called.
    pub fn new(
        config: SessionConfig,
        workspace: W,
        editor: E,
        client: C,
        fs: F,
        reporter: R,
    ) -> Self {
        Self {
            config,
            workspace: WorkspaceGuard::new(workspace),
            editor,
            client,
            fs,
            reporter,
            transcript: Transcript::new(),
            failed_turns: 0,
        }
    }

    /// Run turns until the user stops the session from the editor.
    ///
    /// Returns `Err` only for unexpected failures (workspace I/O, editor
    /// launch). Inference failures are reported and the loop continues.
    pub async fn run(mut self) -> Result<SessionSummary, SessionError> {
        tracing::info!(
            model = %self.config.model,
            host = %self.config.host,
            editor = self.editor.name(),
            client = self.client.name(),
            "session started"
        );

        let mut state = SessionState::AwaitingInput;
        loop {
            tracing::debug!(?state, turns = self.transcript.len(), "session state");
            state = match state {
                SessionState::AwaitingInput => self.await_input().await?,
                SessionState::Querying(pending) => self.query(pending).await?,
                SessionState::Displaying => self.display().await?,
                SessionState::Stopped { code } => {
                    self.reporter.stopped(code);
                    let summary = SessionSummary {
                        completed_turns: self.transcript.len(),
                        failed_turns: self.failed_turns,
                        stop_code: code,
                    };
                    tracing::info!(
                        completed = summary.completed_turns,
                        failed = summary.failed_turns,
                        stop_code = ?code,
                        "session stopped"
                    );
                    return Ok(summary);
                }
            };
        }
    }

    /// Collect phase: hand the terminal to the editor and read its verdict.
    async fn await_input(&mut self) -> Result<SessionState, SessionError> {
        let signal = {
            let targets = CollectTargets::from_workspace(&*self.workspace);
            self.editor.collect(&targets).await?
        };

        match signal {
            EditorSignal::Stop { code } => Ok(SessionState::Stopped { code }),
            EditorSignal::Send => {
                let prompt = self.workspace.read(Slot::Prompt).await?.trim().to_string();
                let selection = self.workspace.read(Slot::FileSelection).await?;
                let files = parse_file_selection(&selection);

                // Consumed: the next collect phase starts from empty slots.
                self.workspace.clear(Slot::Prompt).await?;
                self.workspace.clear(Slot::FileSelection).await?;

                Ok(SessionState::Querying(PendingTurn { prompt, files }))
            }
        }
    }

    /// Assemble the context and call the inference endpoint.
    async fn query(&mut self, pending: PendingTurn) -> Result<SessionState, SessionError> {
        let system = self
            .workspace
            .read(Slot::SystemMessage)
            .await?
            .trim()
            .to_string();

        let assembly =
            ContextAssembler::assemble(&self.fs, &pending.files, &self.transcript, &pending.prompt)
                .await;
        for skipped in &assembly.skipped {
            tracing::debug!(path = %skipped.path, "{skipped}");
            self.reporter.file_skipped(skipped);
        }

        let context = assembly.document.render();
        self.workspace.write(Slot::Context, &context).await?;

        let request = InferenceRequest {
            model: self.config.model.clone(),
            prompt: context,
            system,
        };

        self.reporter.query_started(&self.config.model);
        match self.client.generate(&request).await {
            Ok(reply) => {
                self.reporter.query_finished(&reply);
                tracing::debug!(diagnostic = %reply.diagnostic, "inference succeeded");

                self.workspace.write(Slot::Output, &reply.text).await?;
                self.transcript.push(Turn::complete(
                    pending,
                    request.prompt,
                    reply.text,
                    Some(reply.diagnostic),
                ));
                self.workspace
                    .write(Slot::History, &self.transcript.render())
                    .await?;
                Ok(SessionState::Displaying)
            }
            Err(err) => {
                tracing::info!(error = %err, "inference failed, discarding turn");
                self.reporter.query_failed(&err);
                self.failed_turns += 1;
                Ok(SessionState::AwaitingInput)
            }
        }
    }

    /// Display phase: show the reply. The editor's exit code is ignored.
    async fn display(&mut self) -> Result<SessionState, SessionError> {
        let targets = DisplayTargets::from_workspace(&*self.workspace);
        self.editor.display(&targets).await?;
        Ok(SessionState::AwaitingInput)
    }
}
