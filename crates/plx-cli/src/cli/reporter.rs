//! Terminal rendering of session events.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use plx_core::session::reporter::SessionReporter;
use plx_types::context::SkippedFile;
use plx_types::llm::{InferenceError, InferenceReply};

/// Prints warnings and a spinner between editor runs.
///
/// Skipped-file warnings are printed even with `--quiet`. When
/// `interactive`, an inference failure or a reply that skipped files waits
/// for a key press so the message is not hidden by the editor reopening.
pub struct ConsoleReporter {
    quiet: bool,
    interactive: bool,
    spinner: Mutex<Option<ProgressBar>>,
    skipped_this_turn: AtomicUsize,
}

impl ConsoleReporter {
    pub fn new(quiet: bool, interactive: bool) -> Self {
        Self {
            quiet,
            interactive,
            spinner: Mutex::new(None),
            skipped_this_turn: AtomicUsize::new(0),
        }
    }

    /// Hold the terminal until a key is pressed.
    fn wait_for_key(&self, hint: &str) {
        if !self.interactive {
            return;
        }
        eprintln!("  {}", style(hint).dim());
        let _ = Term::stderr().read_key();
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }

    #[cfg(test)]
    fn spinner_active(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl SessionReporter for ConsoleReporter {
    fn file_skipped(&self, skipped: &SkippedFile) {
        self.skipped_this_turn.fetch_add(1, Ordering::Relaxed);
        eprintln!("  {} {skipped}", style("!").yellow().bold());
    }

    fn query_started(&self, model: &str) {
        tracing::debug!(model, "querying");
        if self.quiet {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Querying AI model...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn query_finished(&self, reply: &InferenceReply) {
        self.clear_spinner();
        tracing::info!(diagnostic = %reply.diagnostic, "reply received");
        if self.skipped_this_turn.swap(0, Ordering::Relaxed) > 0 {
            self.wait_for_key("Some files were left out. Press any key to view the reply.");
        }
    }

    fn query_failed(&self, error: &InferenceError) {
        self.clear_spinner();
        self.skipped_this_turn.store(0, Ordering::Relaxed);
        eprintln!("\n  {} Inference failed: {error}", style("!").red().bold());
        self.wait_for_key("Press any key to return to the editor.");
    }

    fn stopped(&self, code: Option<i32>) {
        self.clear_spinner();
        tracing::debug!(?code, "editor requested stop");
    }
}
