//! JSON document store.
//!
//! The store is a directory on disk holding three whole-document files:
//! - prompts.json   — the editable prompt templates
//! - processed.json — email id → processed pipeline result
//! - drafts.json    — email id → user-saved draft
//!
//! Each document is loaded once at startup and overwritten wholesale on
//! save (pretty-printed, no schema version field). A missing or corrupt
//! file falls back to a caller-supplied default — the original demo did
//! this silently; here the fallback is logged so corruption is at least
//! diagnosable, without changing what callers observe.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Well-known document file names.
pub mod documents {
    pub const PROMPTS: &str = "prompts.json";
    pub const PROCESSED: &str = "processed.json";
    pub const DRAFTS: &str = "drafts.json";
}

/// File-backed document store rooted at a data directory.
pub struct Store {
    base_path: PathBuf,
}

impl Store {
    /// Create a store rooted at `base_path`.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Resolve a document name to its absolute path.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Ensure the data directory exists.
    pub async fn ensure_dirs(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    /// Load a document, or the supplied default when it is missing or
    /// unreadable.
    ///
    /// Never fails: a corrupt or absent file yields `default`, with a
    /// `warn` event naming the file and the reason.
    pub async fn load_or<T>(&self, name: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_load(name).await {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!(document = name, "Document not found, using default");
                default
            }
            Err(e) => {
                warn!(document = name, error = %e, "Failed to load document, using default");
                default
            }
        }
    }

    /// Load a document, surfacing failures.
    ///
    /// Returns `Ok(None)` when the file does not exist, `Err` on read or
    /// parse failure. [`Store::load_or`] is the behavior-compatible wrapper.
    pub async fn try_load<T>(&self, name: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.resolve_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).await?;
        let doc = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(doc))
    }

    /// Serialize a document and overwrite its file.
    ///
    /// Whole-document replace; pretty-printed to match the original file
    /// format. No partial-write recovery — a crash mid-write may leave a
    /// corrupt file, which a later load masks with the default.
    pub async fn save<T>(&self, name: &str, doc: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Serialize {
            name: name.to_string(),
            source,
        })?;
        if let Some(parent) = self.resolve_path(name).parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(self.resolve_path(name), raw).await?;
        debug!(document = name, "Document saved");
        Ok(())
    }
}
