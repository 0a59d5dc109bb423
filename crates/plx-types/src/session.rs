//! Turn, transcript and session outcome types.
//!
//! A turn is one prompt/reply cycle. Completed turns are appended to the
//! [`Transcript`], which is re-embedded as history in every later context.

use serde::{Deserialize, Serialize};

/// A turn that has been collected from the editor but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTurn {
    /// Prompt text as read from the prompt slot (trimmed).
    pub prompt: String,
    /// Selected file paths in the order the user picked them. May be empty.
    pub files: Vec<String>,
}

/// A completed turn. Immutable once appended to a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub prompt: String,
    pub files: Vec<String>,
    /// The full context document that was sent for this turn.
    pub context: String,
    pub reply: String,
    /// Auxiliary diagnostic string returned alongside the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl Turn {
    /// Complete a pending turn with the context that was sent and the reply.
    pub fn complete(
        pending: PendingTurn,
        context: String,
        reply: String,
        diagnostic: Option<String>,
    ) -> Self {
        Self {
            prompt: pending.prompt,
            files: pending.files,
            context,
            reply,
            diagnostic,
        }
    }
}

/// Append-only ordered sequence of completed turns.
///
/// There is deliberately no way to remove or reorder turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Render as interleaved `User:` / `AI:` blocks, oldest first.
    ///
    /// ```text
    /// User: {prompt}
    /// AI: {reply}
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            out.push_str("User: ");
            out.push_str(&turn.prompt);
            out.push('\n');
            out.push_str("AI: ");
            out.push_str(&turn.reply);
            out.push('\n');
        }
        out
    }
}

/// How the collect-phase editor exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum EditorSignal {
    /// Exit code 0: the prompt and file-selection slots are authoritative.
    Send,
    /// Any non-zero exit. `code` is `None` when the editor was killed by a
    /// signal. All codes are treated identically.
    Stop { code: Option<i32> },
}

impl EditorSignal {
    /// Map a process exit code to a signal. `None` means no code was
    /// available (terminated by a signal).
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => EditorSignal::Send,
            other => EditorSignal::Stop { code: other },
        }
    }
}

/// Outcome of a session that stopped cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Turns whose inference call succeeded (equals the transcript length).
    pub completed_turns: usize,
    /// Turns discarded because the inference call failed.
    pub failed_turns: usize,
    /// Exit code of the collect-phase editor that ended the session.
    pub stop_code: Option<i32>,
}
