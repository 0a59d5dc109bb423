//! CLI definitions for the `plx` binary.
//!
//! Running `plx` with no subcommand starts a chat session in the editor.

pub mod reporter;
pub mod session;
pub mod settings;
pub mod signals;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use self::settings::SettingsOverrides;

/// Chat with a local model from inside your editor.
#[derive(Parser, Debug)]
#[command(name = "plx", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Model identifier to query.
    #[arg(long, env = "OLLAMA_MODEL")]
    pub model: Option<String>,

    /// Inference host: hostname, host:port, or a full URL.
    #[arg(long, env = "OLLAMA_HOST")]
    pub host: Option<String>,

    /// Editor binary. Must accept Neovim's `-c` directives.
    #[arg(long, env = "PLX_EDITOR")]
    pub editor: Option<String>,

    /// Initial system message for the session.
    #[arg(long)]
    pub system_message: Option<String>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings supplied on the command line or through the environment.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            model: self.model.clone(),
            host: self.host.clone(),
            editor: self.editor.clone(),
            system_message: self.system_message.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
