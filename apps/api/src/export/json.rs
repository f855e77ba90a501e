use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

pub const EXPORT_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub generated_at: DateTime<Utc>,
    pub redacted: bool,
    pub version: &'static str,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    #[serde(flatten)]
    resume: &'a ResumeRecord,
    metadata: ExportMetadata,
}

/// Pretty-printed record with an export `metadata` block appended.
pub fn render_json(
    record: &ResumeRecord,
    redacted: bool,
    generated_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let export = JsonExport {
        resume: record,
        metadata: ExportMetadata {
            generated_at,
            redacted,
            version: EXPORT_FORMAT_VERSION,
        },
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
