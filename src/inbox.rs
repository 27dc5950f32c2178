//! Mailbox source boundary.
//!
//! The pipeline only needs an ordered snapshot of emails; where they come
//! from is behind [`MailboxSource`]. The shipped implementation is a fixed
//! fixture standing in for a real mailbox connector.

use async_trait::async_trait;

use crate::error::Error;
use crate::pipeline::types::Email;

/// Trait for mailbox sources — pure I/O, no business logic.
#[async_trait]
pub trait MailboxSource: Send + Sync {
    /// Source name (e.g. "mock", "imap").
    fn name(&self) -> &str;

    /// Fetch an ordered, read-only snapshot of the inbox.
    async fn fetch(&self) -> Result<Vec<Email>, Error>;
}

/// Fixed demo inbox.
pub struct MockInbox;

#[async_trait]
impl MailboxSource for MockInbox {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<Email>, Error> {
        Ok(mock_inbox())
    }
}

/// The twelve fixture emails used by the demo.
pub fn mock_inbox() -> Vec<Email> {
    fn email(id: &str, sender: &str, subject: &str, body: &str, timestamp: &str) -> Email {
        Email {
            id: id.into(),
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            timestamp: timestamp.into(),
        }
    }

    vec![
        email(
            "e1",
            "alice@work.com",
            "Project Sync: Weekly standup",
            "Hi team,\nCan we move the weekly standup from 10am to 11am on Tuesday?\nThanks,\nAlice",
            "2025-11-10 09:12",
        ),
        email(
            "e2",
            "newsletter@technews.com",
            "This week's tech roundup",
            "Your weekly digest: AI, cloud, and developer tools.",
            "2025-11-09 08:00",
        ),
        email(
            "e3",
            "bob@partner.org",
            "Request: Updated architecture diagram",
            "Could you share the updated system architecture diagram and the list of services to be migrated by Dec 1?",
            "2025-11-11 14:20",
        ),
        email(
            "e4",
            "spam@offers.xyz",
            "You won a prize! Click here",
            "Congratulations! Claim your prize now by replying with your details.",
            "2025-11-08 22:01",
        ),
        email(
            "e5",
            "carol@hr.com",
            "Complete your compliance training",
            "Hello,\nPlease complete the mandatory compliance training by November 20.\n- HR",
            "2025-11-07 11:30",
        ),
        email(
            "e6",
            "dave@client.com",
            "Meeting request: Product demo",
            "Hi,\nWould you be available next Thursday for a 45-minute product demo?",
            "2025-11-12 16:45",
        ),
        email(
            "e7",
            "alerts@service.com",
            "Your service invoice is ready",
            "Invoice for October is available. Total: $120. Due: Nov 25.",
            "2025-11-05 07:15",
        ),
        email(
            "e8",
            "ellen@pm.com",
            "Can you review PR #452?",
            "I've pushed the changes. Could you review PR #452 and merge it?",
            "2025-11-12 09:33",
        ),
        email(
            "e9",
            "friend@example.com",
            "Weekend plans",
            "Hey! Are you free this weekend for hiking?",
            "2025-11-13 20:00",
        ),
        email(
            "e10",
            "ops@infra.com",
            "Incident: DB latency spike",
            "DB cluster us-east-1 had high latency between 01:30 and 01:50.",
            "2025-11-14 02:10",
        ),
        email(
            "e11",
            "recruiter@jobs.com",
            "Interview invitation",
            "We'd like to schedule a first-round interview next week.",
            "2025-11-15 13:00",
        ),
        email(
            "e12",
            "newsletter@health.com",
            "5 Tips to boost wellbeing",
            "Short reads: hydration, sleep, microbreaks.",
            "2025-11-01 06:40",
        ),
    ]
}
