//! The generated context document sent to the inference endpoint.
//!
//! Layout (sections always present, always in this order):
//! ```text
//! <files>
//! <file path="src/main.rs">
//! {content}
//! </file>
//! </files>
//! <history>
//! User: {prompt}
//! AI: {reply}
//! </history>
//! <prompt>{prompt}</prompt>
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selected file embedded in the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedFile {
    /// The path exactly as the user selected it.
    pub path: String,
    pub content: String,
}

/// The three-section context document for a single turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    pub files: Vec<EmbeddedFile>,
    /// Rendered transcript (`User: ..\nAI: ..\n` blocks).
    pub history: String,
    pub prompt: String,
}

impl ContextDocument {
    /// Render the document text.
    pub fn render(&self) -> String {
        let mut out = String::from("<files>\n");
        for file in &self.files {
            out.push_str(&format!("<file path=\"{}\">\n", file.path));
            out.push_str(&file.content);
            if !file.content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("</file>\n");
        }
        out.push_str("</files>\n");

        out.push_str("<history>\n");
        out.push_str(&self.history);
        out.push_str("</history>\n");

        out.push_str(&format!("<prompt>{}</prompt>\n", self.prompt));
        out
    }
}

impl fmt::Display for ContextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Why a selected file was left out of the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The path does not exist.
    Missing,
    /// The path exists but could not be read as text.
    Unreadable(String),
}

/// A selected file that was skipped during assembly.
///
/// Reported on a side channel; never embedded in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::Missing => write!(f, "file not found: {}", self.path),
            SkipReason::Unreadable(e) => write!(f, "could not read {}: {e}", self.path),
        }
    }
}
