//! Session wiring: builds the concrete adapters and runs the turn loop.

use anyhow::{Context, Result};

use plx_core::session::controller::{Session, SessionConfig};
use plx_infra::editor::NeovimEditor;
use plx_infra::filesystem::LocalFileSystem;
use plx_infra::llm::OllamaClient;
use plx_infra::workspace::TempWorkspace;
use plx_types::config::PlxConfig;
use plx_types::session::SessionSummary;

use super::reporter::ConsoleReporter;

/// Run one chat session with `config` until the user stops it.
pub async fn run_session(config: PlxConfig, quiet: bool, interactive: bool) -> Result<SessionSummary> {
    let workspace = TempWorkspace::acquire(&config.system_message)
        .await
        .context("failed to create session workspace")?;

    let client = OllamaClient::new(&config.host, config.request_timeout_secs);
    tracing::info!(
        model = %config.model,
        url = client.base_url(),
        editor = %config.editor,
        workspace = %workspace.root().display(),
        "starting session"
    );

    let session = Session::new(
        SessionConfig {
            model: config.model,
            host: config.host,
        },
        workspace,
        NeovimEditor::new(config.editor),
        client,
        LocalFileSystem::new(),
        ConsoleReporter::new(quiet, interactive),
    );

    Ok(session.run().await?)
}
