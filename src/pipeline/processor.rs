//! Inbox processor — runs the full pipeline over emails.
//!
//! Flow per email:
//! 1. Classify subject + body as one string
//! 2. Extract action items from the body
//! 3. Draft a canned reply
//!
//! Each step is pure and infallible; the processor only sequences them
//! and writes results into the application state. Persistence happens
//! once at the end of a bulk run, not per email.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::pipeline::actions::extract_actions;
use crate::pipeline::classifier::Classifier;
use crate::pipeline::reply::draft_reply;
use crate::pipeline::types::{Email, ProcessedResult};
use crate::state::AppState;
use crate::store::Store;

/// Inbox processor — classifies, extracts, and drafts for each email.
pub struct InboxProcessor {
    classifier: Classifier,
    /// Cosmetic per-item delay during bulk runs, to pace the interactive
    /// surface. Zero disables it.
    pacing_delay: Duration,
}

impl InboxProcessor {
    /// Create a processor with the default rule tables.
    pub fn new(pacing_delay: Duration) -> Self {
        Self {
            classifier: Classifier::default_rules(),
            pacing_delay,
        }
    }

    /// Run the pipeline over one email.
    ///
    /// Pure with respect to state: the caller decides where the result goes.
    pub fn process(&self, email: &Email) -> ProcessedResult {
        // The classifier sees subject and body as one string, so subject
        // keywords can satisfy body-leaning rules and vice versa.
        let combined = format!("{}{}", email.subject, email.body);
        let category = self.classifier.classify(&combined);
        let actions = extract_actions(&email.body);
        let draft = draft_reply(email);

        debug!(
            id = %email.id,
            category = %category,
            actions = actions.len(),
            "Email processed"
        );

        ProcessedResult {
            category,
            actions,
            draft,
        }
    }

    /// Run the pipeline over a whole inbox snapshot, overwriting each
    /// email's entry in the processed map, then persist the map once.
    ///
    /// Entries are written into memory incrementally, so an interrupted run
    /// keeps the results of already-handled emails in memory; nothing hits
    /// disk until the final save.
    pub async fn process_inbox(
        &self,
        emails: &[Email],
        state: &mut AppState,
        store: &Store,
    ) -> Result<(), StoreError> {
        let started = Utc::now();
        info!(count = emails.len(), "Processing inbox");

        for email in emails {
            let result = self.process(email);
            state.processed.insert(email.id.clone(), result);

            if !self.pacing_delay.is_zero() {
                tokio::time::sleep(self.pacing_delay).await;
            }
        }

        state.save_processed(store).await?;
        info!(
            count = emails.len(),
            elapsed_ms = (Utc::now() - started).num_milliseconds(),
            "Inbox processed and saved"
        );
        Ok(())
    }
}
