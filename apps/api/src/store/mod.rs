//! Resume persistence: one JSON document per user, addressed by
//! `<prefix><user_id>`.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; the backend is picked at startup
//! from `STORAGE_DIR` (files) or falls back to process memory.

pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

pub use file::FileStore;
pub use memory::MemoryStore;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Key-value persistence for resumes. Load on session start, save on every
/// committed edit.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<Option<ResumeRecord>, AppError>;

    async fn save(&self, user_id: &str, record: &ResumeRecord) -> Result<(), AppError>;

    /// Removes the stored record. Deleting a missing record is not an error.
    async fn delete(&self, user_id: &str) -> Result<(), AppError>;
}

/// Builds the storage key for a user.
pub fn storage_key(prefix: &str, user_id: &str) -> String {
    format!("{prefix}{user_id}")
}

/// User ids end up in file names, so only a conservative alphabet is accepted.
pub fn validate_user_id(user_id: &str) -> Result<(), AppError> {
    let valid = !user_id.is_empty()
        && user_id.len() <= 128
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "user_id '{user_id}' must be 1-128 characters of [A-Za-z0-9_-]"
        )))
    }
}

/// Picks the storage backend from configuration.
pub fn build_store(config: &Config) -> anyhow::Result<Arc<dyn ResumeStore>> {
    match &config.storage_dir {
        Some(dir) => {
            let store = FileStore::open(dir.clone(), &config.storage_key_prefix)?;
            info!("Resume store: files under {}", dir.display());
            Ok(Arc::new(store))
        }
        None => {
            info!("Resume store: in-memory (set STORAGE_DIR to persist)");
            Ok(Arc::new(MemoryStore::new(&config.storage_key_prefix)))
        }
    }
}
