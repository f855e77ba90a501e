use std::path::PathBuf;

use anyhow::{Context, Result};

/// Request bodies carry base64 uploads, so the limit is well above axum's 2 MB default.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Default prefix of the per-user storage key, e.g. `resumeData_42`.
pub const DEFAULT_STORAGE_KEY_PREFIX: &str = "resumeData_";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory for file-backed resume storage. In-memory storage when unset.
    pub storage_dir: Option<PathBuf>,
    pub storage_key_prefix: String,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            storage_dir: optional_env("STORAGE_DIR").map(PathBuf::from),
            storage_key_prefix: optional_env("STORAGE_KEY_PREFIX")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY_PREFIX.to_string()),
            max_body_bytes: match optional_env("MAX_BODY_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_BODY_BYTES must be a byte count")?,
                None => DEFAULT_MAX_BODY_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            storage_dir: None,
            storage_key_prefix: DEFAULT_STORAGE_KEY_PREFIX.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Treats unset and blank variables alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
