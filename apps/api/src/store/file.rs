use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::store::{storage_key, ResumeStore};

/// Stores each user's record as `<dir>/<prefix><user_id>.json`.
pub struct FileStore {
    dir: PathBuf,
    prefix: String,
}

impl FileStore {
    /// Creates the directory if needed.
    pub fn open(dir: PathBuf, prefix: &str) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage dir {}", dir.display()))?;
        Ok(Self {
            dir,
            prefix: prefix.to_string(),
        })
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir
            .join(format!("{}.json", storage_key(&self.prefix, user_id)))
    }
}

#[async_trait]
impl ResumeStore for FileStore {
    async fn load(&self, user_id: &str) -> Result<Option<ResumeRecord>, AppError> {
        let path = self.path_for(user_id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "read {} failed: {e}",
                path.display()
            ))),
        }
    }

    async fn save(&self, user_id: &str, record: &ResumeRecord) -> Result<(), AppError> {
        let path = self.path_for(user_id);
        let json = serde_json::to_vec(record)?;
        let len = json.len();

        // Each save gets its own temp file in the target dir, then an atomic
        // rename, so overlapping saves never share a partial file.
        let dir = self.dir.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&json)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("save task failed: {e}")))?
        .map_err(|e| AppError::Storage(format!("write {} failed: {e}", path.display())))?;

        debug!("Wrote {len} bytes to {}", path.display());
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        let path = self.path_for(user_id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted stored resume {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "delete {} failed: {e}",
                path.display()
            ))),
        }
    }
}
