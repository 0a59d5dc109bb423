//! Settings bootstrap: load `settings.toml`, run the first-run prompt, and
//! layer command-line and environment overrides on top.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::Input;

use plx_infra::config::{SettingsFile, load_settings, save_settings};
use plx_types::config::{DEFAULT_HOST, PlxConfig};

/// Values supplied by flags or their bound environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub host: Option<String>,
    pub editor: Option<String>,
    pub system_message: Option<String>,
}

impl SettingsOverrides {
    /// Replace every field of `config` that has an override.
    pub fn apply(self, mut config: PlxConfig) -> PlxConfig {
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(editor) = self.editor {
            config.editor = editor;
        }
        if let Some(system_message) = self.system_message {
            config.system_message = system_message;
        }
        config
    }
}

/// Produce the effective configuration for this run.
///
/// On first run (no settings file) with no host override and an
/// interactive terminal, `prompt_host` asks for the host and the answer is
/// saved. A save failure is reported but does not stop the session.
pub async fn bootstrap<P>(
    dir: &Path,
    overrides: SettingsOverrides,
    interactive: bool,
    prompt_host: P,
) -> Result<PlxConfig>
where
    P: FnOnce(&str) -> Result<String>,
{
    let config = match load_settings(dir).await {
        SettingsFile::Missing if overrides.host.is_none() && interactive => {
            let host = prompt_host(DEFAULT_HOST)?;
            let config = PlxConfig {
                host: host.trim().to_string(),
                ..PlxConfig::default()
            };
            match save_settings(dir, &config).await {
                Ok(path) => tracing::debug!("first-run settings written to {}", path.display()),
                Err(e) => tracing::warn!("{e}, settings will be asked for again next run"),
            }
            config
        }
        loaded => loaded.into_config(),
    };

    Ok(overrides.apply(config))
}

/// Ask for the inference host on the terminal.
pub fn prompt_for_host(default: &str) -> Result<String> {
    println!();
    println!(
        "  {} No settings found. Where is your Ollama server running?",
        style("i").blue().bold()
    );
    let host = Input::<String>::new()
        .with_prompt("Ollama host")
        .default(default.to_string())
        .interact_text()?;
    Ok(host)
}
