//! Action extraction — scans an email body for known task phrases.
//!
//! Stands in for an LLM extraction call. Unlike the classifier, the
//! patterns here are independent: each one may append at most one item,
//! and a body can trigger several. Output order follows the pattern
//! table, not where the phrases occur in the body.

use tracing::debug;

use crate::pipeline::types::ActionItem;

/// One extraction pattern: all keywords must be present in the body.
#[derive(Debug, Clone)]
struct ActionPattern {
    /// Lowercase substrings that must all occur.
    keywords: &'static [&'static str],
    /// Task text emitted on a match.
    task: &'static str,
    /// Deadline string; empty means no deadline.
    deadline: &'static str,
}

const PATTERNS: &[ActionPattern] = &[
    ActionPattern {
        keywords: &["share", "diagram"],
        task: "Share updated architecture diagram",
        deadline: "2025-12-01",
    },
    ActionPattern {
        keywords: &["complete", "training"],
        task: "Complete compliance training",
        deadline: "2025-11-20",
    },
    ActionPattern {
        keywords: &["review", "pr"],
        task: "Review PR #452",
        deadline: "",
    },
];

/// Extract action items from an email body.
///
/// Case-insensitive, pure, never fails; operates on the body only (the
/// subject is not consulted). Returns an empty Vec when nothing matches.
pub fn extract_actions(body: &str) -> Vec<ActionItem> {
    let body = body.to_lowercase();
    let mut actions = Vec::new();

    for pattern in PATTERNS {
        if pattern.keywords.iter().all(|k| body.contains(k)) {
            debug!(task = %pattern.task, "Action pattern matched");
            actions.push(ActionItem {
                task: pattern.task.to_string(),
                deadline: pattern.deadline.to_string(),
            });
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_yields_no_actions() {
        assert!(extract_actions("").is_empty());
    }

    #[test]
    fn unrelated_body_yields_no_actions() {
        assert!(extract_actions("Hey! Are you free this weekend for hiking?").is_empty());
    }

    #[test]
    fn diagram_request_extracts_share_task() {
        let body =
            "Could you share the updated system architecture diagram and the list of services \
             to be migrated by Dec 1?";
        let actions = extract_actions(body);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].task, "Share updated architecture diagram");
        assert_eq!(actions[0].deadline, "2025-12-01");
    }

    #[test]
    fn training_reminder_extracts_training_task() {
        let actions =
            extract_actions("Please complete the mandatory compliance training by November 20.");
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].task, "Complete compliance training");
        assert_eq!(actions[0].deadline, "2025-11-20");
    }

    #[test]
    fn pr_review_has_no_deadline() {
        let actions = extract_actions("Could you review PR #452 and merge it?");
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].task, "Review PR #452");
        assert_eq!(actions[0].deadline, "");
    }

    #[test]
    fn both_keywords_required() {
        // "share" without "diagram" is not enough.
        assert!(extract_actions("Could you share the meeting notes?").is_empty());
        // "review" without "pr".
        assert!(extract_actions("I will review the document tomorrow").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let actions = extract_actions("SHARE the DIAGRAM please");
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn output_order_follows_pattern_table() {
        // All three patterns present, phrases deliberately out of table order.
        let body = "Review PR #452 first. Also complete the training module, \
                    then share the final diagram.";
        let actions = extract_actions(body);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].task, "Share updated architecture diagram");
        assert_eq!(actions[1].task, "Complete compliance training");
        assert_eq!(actions[2].task, "Review PR #452");
    }
}
