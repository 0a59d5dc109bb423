//! Named transient storage locations shared with the editor process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named slot in the transient workspace.
///
/// Each slot is backed by one file that both the controller and the
/// external editor read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    Prompt,
    SystemMessage,
    FileSelection,
    Context,
    History,
    Output,
}

impl Slot {
    /// Every slot, in creation order.
    pub const ALL: [Slot; 6] = [
        Slot::Prompt,
        Slot::SystemMessage,
        Slot::FileSelection,
        Slot::Context,
        Slot::History,
        Slot::Output,
    ];

    /// File name backing this slot inside the workspace directory.
    ///
    /// The extension drives the editor's filetype detection, so the text
    /// slots are markdown and the selection list is plain text.
    pub fn file_name(self) -> &'static str {
        match self {
            Slot::Prompt => "prompt.md",
            Slot::SystemMessage => "system.md",
            Slot::FileSelection => "selection.txt",
            Slot::Context => "context.md",
            Slot::History => "history.md",
            Slot::Output => "output.md",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Prompt => write!(f, "prompt"),
            Slot::SystemMessage => write!(f, "system-message"),
            Slot::FileSelection => write!(f, "file-selection"),
            Slot::Context => write!(f, "context"),
            Slot::History => write!(f, "history"),
            Slot::Output => write!(f, "output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slot_display_matches_serde_name() {
        for slot in Slot::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{slot}\""));
        }
    }

    #[test]
    fn test_slot_file_names_are_unique() {
        let names: HashSet<_> = Slot::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), Slot::ALL.len());
    }

    #[test]
    fn test_slot_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Slot::SystemMessage).unwrap();
        assert_eq!(json, "\"system-message\"");
    }
}
