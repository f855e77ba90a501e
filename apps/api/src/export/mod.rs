//! Document export. Rendering is a black box fed by the redaction engine:
//! when redaction is requested the exported document never sees raw personal
//! info.

pub mod html;
pub mod json;

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::redaction::redact_personal_info;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Print-ready HTML. `pdf` is accepted as an alias; PDF conversion happens
    /// client side from this document.
    #[default]
    #[serde(alias = "pdf")]
    Html,
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            ExportFormat::Html => "resume",
            ExportFormat::Json => "resume-data",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// e.g. `resume-redacted-1700000000000.html`
pub fn export_file_name(format: ExportFormat, redacted: bool, at: DateTime<Utc>) -> String {
    format!(
        "{}-{}{}.{}",
        format.file_stem(),
        if redacted { "redacted-" } else { "" },
        at.timestamp_millis(),
        format.extension()
    )
}

/// Renders `record` in the requested format, redacting first when asked.
pub fn export_resume(
    record: &ResumeRecord,
    format: ExportFormat,
    redact: bool,
    at: DateTime<Utc>,
) -> Result<ExportDocument, AppError> {
    let data: Cow<'_, ResumeRecord> = if redact {
        Cow::Owned(redact_personal_info(record))
    } else {
        Cow::Borrowed(record)
    };

    let body = match format {
        ExportFormat::Html => html::render_html(&data),
        ExportFormat::Json => json::render_json(&data, redact, at)?,
    };

    Ok(ExportDocument {
        file_name: export_file_name(format, redact, at),
        content_type: format.content_type(),
        body,
    })
}
