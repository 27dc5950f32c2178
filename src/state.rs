//! Application state — the three process-wide documents.
//!
//! The original demo kept prompts, processed results, and saved drafts in
//! ambient session globals. Here they live in one explicit [`AppState`]
//! constructed at startup from the [`Store`] and passed by reference to
//! whoever needs them. Mutations stay in memory; each document is flushed
//! only on its explicit save call, never after every change.

use std::collections::BTreeMap;

use tracing::info;

use crate::error::StoreError;
use crate::pipeline::types::{Email, ProcessedResult, PromptSet, SavedDraft};
use crate::store::{Store, documents};

/// In-memory application state backed by the document store.
pub struct AppState {
    /// Editable prompt templates (inert in the keyword pipeline).
    pub prompts: PromptSet,
    /// Email id → pipeline result. Convention: keys must be ids present in
    /// the inbox snapshot; nothing enforces it.
    pub processed: BTreeMap<String, ProcessedResult>,
    /// Email id → user-confirmed draft.
    pub drafts: BTreeMap<String, SavedDraft>,
}

impl AppState {
    /// Load all three documents, falling back to defaults where a file is
    /// missing or unreadable.
    pub async fn load(store: &Store) -> Self {
        let prompts = store.load_or(documents::PROMPTS, PromptSet::default()).await;
        let processed = store.load_or(documents::PROCESSED, BTreeMap::new()).await;
        let drafts = store.load_or(documents::DRAFTS, BTreeMap::new()).await;
        info!(
            processed = processed.len(),
            drafts = drafts.len(),
            "Application state loaded"
        );
        Self {
            prompts,
            processed,
            drafts,
        }
    }

    /// Persist the prompt templates.
    pub async fn save_prompts(&self, store: &Store) -> Result<(), StoreError> {
        store.save(documents::PROMPTS, &self.prompts).await
    }

    /// Persist the processed-results map.
    pub async fn save_processed(&self, store: &Store) -> Result<(), StoreError> {
        store.save(documents::PROCESSED, &self.processed).await
    }

    /// Record a user-confirmed draft (with an email snapshot) and persist
    /// the drafts map.
    pub async fn save_draft(
        &mut self,
        store: &Store,
        email: &Email,
        subject: String,
        body: String,
    ) -> Result<(), StoreError> {
        self.drafts.insert(
            email.id.clone(),
            SavedDraft {
                subject,
                body,
                email: email.clone(),
            },
        );
        info!(id = %email.id, "Draft saved");
        store.save(documents::DRAFTS, &self.drafts).await
    }
}
