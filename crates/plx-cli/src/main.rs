//! llm-plx entry point.
//!
//! Binary name: `plx`
//!
//! Loads settings, then hands the terminal to the editor for an
//! editor-driven chat session against an Ollama server.

mod cli;

use std::io::IsTerminal;

use anyhow::anyhow;
use clap::Parser;
use clap_complete::generate;
use console::style;

use cli::{Cli, Commands};
use plx_infra::filesystem::resolve_config_dir;
use plx_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_directive};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(verbosity_directive(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))?;

    // Shell completions don't need settings
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "plx", &mut std::io::stdout());
        return Ok(());
    }

    let result = run(&cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let config_dir = resolve_config_dir();
    let config = cli::settings::bootstrap(
        &config_dir,
        cli.overrides(),
        interactive,
        cli::settings::prompt_for_host,
    )
    .await?;

    let interrupt_log = cli::signals::absorb_interrupts().await;
    let outcome = cli::session::run_session(config, cli.quiet, interactive).await;
    // Stops the logging only; SIGINT stays absorbed until exit.
    interrupt_log.abort();
    let summary = outcome?;

    if !cli.quiet {
        eprintln!(
            "  {} Session ended after {} {} ({} failed)",
            style("✓").green().bold(),
            summary.completed_turns,
            if summary.completed_turns == 1 { "turn" } else { "turns" },
            summary.failed_turns,
        );
    }
    Ok(())
}
