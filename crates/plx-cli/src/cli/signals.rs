//! Interrupt handling.
//!
//! The editor runs in our process group, so a Ctrl+C typed while it is
//! open also reaches `plx`. Interrupts are absorbed for the whole session:
//! the editor's `:Exit` ends the session, and an inference call runs to
//! completion or failure.
//!
//! Once the first listener is registered, tokio keeps its SIGINT handler
//! installed for the life of the process. Ctrl+C never terminates `plx`
//! after this point, even when the listening task is gone.

use tokio::task::JoinHandle;

/// Start absorbing Ctrl+C. Aborting the returned task only stops the
/// "interrupt ignored" logging.
pub async fn absorb_interrupts() -> JoinHandle<()> {
    let handle = tokio::spawn(async {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for Ctrl+C: {e}");
                break;
            }
            tracing::warn!("interrupt ignored; use :Exit in the editor to end the session");
        }
    });
    // Let the task register its handler before the editor starts.
    tokio::task::yield_now().await;
    handle
}
