use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::store::{storage_key, ResumeStore};

/// Process-local store holding serialized records, the server-side analogue
/// of browser local storage.
pub struct MemoryStore {
    prefix: String,
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn load(&self, user_id: &str) -> Result<Option<ResumeRecord>, AppError> {
        let key = storage_key(&self.prefix, user_id);
        let entries = self.entries.read().await;
        match entries.get(&key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user_id: &str, record: &ResumeRecord) -> Result<(), AppError> {
        let key = storage_key(&self.prefix, user_id);
        let json = serde_json::to_string(record)?;
        debug!("Saving {} bytes under {key}", json.len());
        self.entries.write().await.insert(key, json);
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        let key = storage_key(&self.prefix, user_id);
        self.entries.write().await.remove(&key);
        Ok(())
    }
}
