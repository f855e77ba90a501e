//! Composition of the field rules over a whole [`ResumeRecord`].
//!
//! Only `fullName`, `email`, `phone` and `location` are ever rewritten. Every
//! other field of the record is cloned through untouched.

use serde::{Deserialize, Serialize};

use crate::models::resume::{PersonalInfo, ResumeRecord};
use crate::redaction::rules::{redact_address, redact_email, redact_name, redact_phone};

/// A personal-info field subject to redaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RedactedField {
    FullName,
    Email,
    Phone,
    Location,
}

impl RedactedField {
    /// All redactable fields in manifest order.
    pub const ALL: [RedactedField; 4] = [
        RedactedField::FullName,
        RedactedField::Email,
        RedactedField::Phone,
        RedactedField::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RedactedField::FullName => "fullName",
            RedactedField::Email => "email",
            RedactedField::Phone => "phone",
            RedactedField::Location => "location",
        }
    }

    fn value<'a>(&self, info: &'a PersonalInfo) -> &'a str {
        match self {
            RedactedField::FullName => &info.full_name,
            RedactedField::Email => &info.email,
            RedactedField::Phone => &info.phone,
            RedactedField::Location => &info.location,
        }
    }

    fn slot<'a>(&self, info: &'a mut PersonalInfo) -> &'a mut String {
        match self {
            RedactedField::FullName => &mut info.full_name,
            RedactedField::Email => &mut info.email,
            RedactedField::Phone => &mut info.phone,
            RedactedField::Location => &mut info.location,
        }
    }

    /// Applies this field's rule to a raw value.
    pub fn apply(&self, value: &str) -> String {
        match self {
            RedactedField::FullName => redact_name(value),
            RedactedField::Email => redact_email(value),
            RedactedField::Phone => redact_phone(value),
            RedactedField::Location => redact_address(value),
        }
    }
}

/// Ordered list of the fields transformed by one redaction call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RedactionManifest(Vec<RedactedField>);

impl RedactionManifest {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(RedactedField::as_str).collect()
    }
}

/// Result of redacting a record: the new record and what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Redacted {
    pub record: ResumeRecord,
    pub manifest: RedactionManifest,
}

/// Returns a copy of `record` with the personal-info fields masked.
pub fn redact_personal_info(record: &ResumeRecord) -> ResumeRecord {
    redact_with_manifest(record).record
}

/// Redacts `record` and reports which fields were transformed.
///
/// Empty fields pass through and are left out of the manifest.
pub fn redact_with_manifest(record: &ResumeRecord) -> Redacted {
    let mut redacted = record.clone();
    let mut manifest = Vec::with_capacity(RedactedField::ALL.len());

    for field in RedactedField::ALL {
        let value = field.value(&record.personal_info);
        if value.is_empty() {
            continue;
        }
        *field.slot(&mut redacted.personal_info) = field.apply(value);
        manifest.push(field);
    }

    Redacted {
        record: redacted,
        manifest: RedactionManifest(manifest),
    }
}
