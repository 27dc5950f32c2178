//! Keyword classifier — maps raw text to one [`Label`].
//!
//! Stands in for an LLM categorization call. Evaluates an ordered rule
//! table against the lowercased input and returns the label of the first
//! rule that matches; `Important` when nothing matches.
//!
//! Rule order is load-bearing: "You won a prize! Meeting request" is Spam,
//! not Meeting, because the Spam rule is checked first.

use tracing::debug;

use crate::pipeline::types::Label;

/// One classification rule: any keyword hit yields the label.
#[derive(Debug, Clone)]
pub struct LabelRule {
    /// Lowercase substrings, any of which triggers the rule.
    pub keywords: &'static [&'static str],
    /// Label returned when the rule fires.
    pub label: Label,
}

/// Ordered keyword classifier with first-match-wins semantics.
pub struct Classifier {
    rules: Vec<LabelRule>,
}

impl Classifier {
    /// Create a classifier with the default rule table.
    pub fn default_rules() -> Self {
        let rules = vec![
            LabelRule {
                keywords: &["prize", "won"],
                label: Label::Spam,
            },
            LabelRule {
                keywords: &["newsletter", "digest"],
                label: Label::Newsletter,
            },
            LabelRule {
                keywords: &["invoice", "due"],
                label: Label::Invoice,
            },
            LabelRule {
                keywords: &["meeting", "request", "demo"],
                label: Label::Meeting,
            },
            LabelRule {
                keywords: &["please", "could you", "share"],
                label: Label::ToDo,
            },
        ];
        Self { rules }
    }

    /// Classify text into exactly one label.
    ///
    /// Case-insensitive, pure, never fails. Returns the label of the first
    /// matching rule, or [`Label::Important`] when no rule matches.
    pub fn classify(&self, text: &str) -> Label {
        let text = text.to_lowercase();
        for rule in &self.rules {
            if let Some(hit) = rule.keywords.iter().find(|k| text.contains(**k)) {
                debug!(keyword = %hit, label = %rule.label, "Classifier rule matched");
                return rule.label;
            }
        }
        Label::Important
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prize_is_spam() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("You won a prize! Click here"), Label::Spam);
    }

    #[test]
    fn won_is_spam() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("We WON the contract"), Label::Spam);
    }

    #[test]
    fn spam_rule_wins_over_later_rules() {
        // "prize" and "meeting" both present — Spam is checked first.
        let c = Classifier::default_rules();
        assert_eq!(
            c.classify("You won a prize! Join the meeting to claim it"),
            Label::Spam
        );
    }

    #[test]
    fn newsletter_keywords() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("This week's tech roundup newsletter"), Label::Newsletter);
        assert_eq!(c.classify("Your weekly digest: AI and cloud"), Label::Newsletter);
    }

    #[test]
    fn invoice_keywords() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("Invoice for October is available"), Label::Invoice);
        assert_eq!(c.classify("Payment due Nov 25"), Label::Invoice);
    }

    #[test]
    fn meeting_keywords() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("Can we move the weekly standup meeting?"), Label::Meeting);
        assert_eq!(c.classify("Product demo next Thursday"), Label::Meeting);
    }

    #[test]
    fn todo_keywords() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("please complete the training"), Label::ToDo);
    }

    #[test]
    fn request_outranks_could_you() {
        // "request" and "could you"/"share" co-occur; the Meeting rule is
        // listed earlier, so it wins.
        let c = Classifier::default_rules();
        assert_eq!(
            c.classify("Request: Updated architecture diagram. Could you share it?"),
            Label::Meeting
        );
    }

    #[test]
    fn no_match_falls_back_to_important() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("Hey! Are you free this weekend for hiking?"), Label::Important);
        assert_eq!(c.classify(""), Label::Important);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = Classifier::default_rules();
        assert_eq!(c.classify("NEWSLETTER"), Label::Newsletter);
        assert_eq!(c.classify("CoUlD YoU share"), Label::ToDo);
    }
}
