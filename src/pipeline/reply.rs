//! Reply drafter — produces a canned subject/body pair for an email.
//!
//! Stands in for an LLM auto-reply call. The subject is always
//! `"Re: " + subject`; the body is picked from three canned variants by
//! keyword checks on the subject line (not the body). Exactly one variant
//! is chosen, in order: meeting, prize, generic.
//!
//! The "prize" branch deliberately emits a single-space body. That is the
//! demo's observable behavior and downstream consumers may depend on the
//! key being present with that value, so it is kept as-is.

use crate::pipeline::types::{Draft, Email};

/// Availability text for meeting-related subjects.
const MEETING_BODY: &str =
    "Hi, thanks for your message. I am available on Thursday 11 AM or Friday 2 PM.";

/// Degenerate body for prize/spam subjects.
const PRIZE_BODY: &str = " ";

/// Generic acknowledgment for everything else.
const GENERIC_BODY: &str = "Hi, thanks for the update. I will get back to you shortly.";

/// Draft a reply to an email.
///
/// Pure and infallible; always returns a well-formed [`Draft`].
pub fn draft_reply(email: &Email) -> Draft {
    let subject_lower = email.subject.to_lowercase();

    let body = if subject_lower.contains("meeting") {
        MEETING_BODY
    } else if subject_lower.contains("prize") {
        PRIZE_BODY
    } else {
        GENERIC_BODY
    };

    Draft {
        subject: format!("Re: {}", email.subject),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email(subject: &str) -> Email {
        Email {
            id: "test-1".into(),
            sender: "alice@example.com".into(),
            subject: subject.into(),
            body: "body text".into(),
            timestamp: "2025-11-10 09:12".into(),
        }
    }

    #[test]
    fn subject_is_always_re_prefixed() {
        for subject in ["Weekend plans", "Meeting request: Product demo", ""] {
            let draft = draft_reply(&make_email(subject));
            assert_eq!(draft.subject, format!("Re: {}", subject));
        }
    }

    #[test]
    fn meeting_subject_gets_availability_body() {
        let draft = draft_reply(&make_email("Meeting request: Product demo"));
        assert_eq!(draft.body, MEETING_BODY);
    }

    #[test]
    fn prize_subject_gets_single_space_body() {
        let draft = draft_reply(&make_email("You won a prize! Click here"));
        assert_eq!(draft.body, " ");
    }

    #[test]
    fn other_subjects_get_generic_body() {
        let draft = draft_reply(&make_email("Weekend plans"));
        assert_eq!(draft.body, GENERIC_BODY);
    }

    #[test]
    fn meeting_wins_when_prize_also_present() {
        // Exactly one variant is chosen; meeting is checked first.
        let draft = draft_reply(&make_email("Meeting about your prize"));
        assert_eq!(draft.body, MEETING_BODY);
    }

    #[test]
    fn subject_check_is_case_insensitive() {
        let draft = draft_reply(&make_email("MEETING tomorrow"));
        assert_eq!(draft.body, MEETING_BODY);
    }

    #[test]
    fn body_keywords_do_not_influence_variant() {
        // "meeting" in the body, not the subject — generic variant.
        let mut email = make_email("Quick note");
        email.body = "About the meeting yesterday...".into();
        let draft = draft_reply(&email);
        assert_eq!(draft.body, GENERIC_BODY);
    }
}
