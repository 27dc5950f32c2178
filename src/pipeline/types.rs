//! Shared types for the email processing pipeline.

use serde::{Deserialize, Serialize};

// ── Email ───────────────────────────────────────────────────────────

/// A single inbox email.
///
/// Supplied by a [`MailboxSource`](crate::inbox::MailboxSource) snapshot and
/// never mutated afterwards. `timestamp` is a display string, not a parsed
/// datetime — the pipeline never does date arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Unique id within the inbox (e.g. "e3").
    pub id: String,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Received-at display string (e.g. "2025-11-11 14:20").
    pub timestamp: String,
}

// ── Label ───────────────────────────────────────────────────────────

/// Classification outcome for an email. Exactly one per email.
///
/// The wire/file form matches the display strings ("To-Do", not "ToDo").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Important,
    Newsletter,
    Spam,
    #[serde(rename = "To-Do")]
    ToDo,
    Meeting,
    Invoice,
}

impl Label {
    /// Display/file string for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Important => "Important",
            Self::Newsletter => "Newsletter",
            Self::Spam => "Spam",
            Self::ToDo => "To-Do",
            Self::Meeting => "Meeting",
            Self::Invoice => "Invoice",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Pipeline outputs ────────────────────────────────────────────────

/// An extracted task. An empty `deadline` means "no deadline".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub deadline: String,
}

/// A generated (or user-edited) reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

/// Result of running the full pipeline over one email.
///
/// Keyed by email id in the processed-results document; reprocessing
/// overwrites the whole record, never merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub category: Label,
    pub actions: Vec<ActionItem>,
    pub draft: Draft,
}

impl ProcessedResult {
    /// Render the "ask the agent" analysis text for the interactive surface.
    pub fn analysis(&self) -> String {
        let actions = serde_json::to_string(&self.actions).unwrap_or_else(|_| "[]".into());
        format!(
            "Here is my analysis:\n- Category: {}\n- Actions: {}\n- Suggested reply: {}",
            self.category, actions, self.draft.body
        )
    }
}

/// A user-confirmed draft, with a snapshot of the email it replies to.
///
/// Written only on explicit save, never by the pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDraft {
    pub subject: String,
    pub body: String,
    pub email: Email,
}

// ── Prompt templates ────────────────────────────────────────────────

/// The three editable instruction templates.
///
/// These are persisted and user-editable but not consulted by the keyword
/// pipeline — they are a stand-in for prompts that would be fed to a real
/// text-generation backend. Kept as an explicit, separate record so the
/// dead wiring is visible rather than baked into the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSet {
    pub categorization: String,
    pub action_extraction: String,
    pub auto_reply: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            categorization:
                "Categorize this email as: Important, Newsletter, Spam, To-Do, Meeting, Invoice."
                    .into(),
            action_extraction: "Extract tasks from this email. If none, return [].".into(),
            auto_reply: "Generate a short polite reply to this email.".into(),
        }
    }
}
