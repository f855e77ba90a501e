//! PII redaction: the single implementation shared by the ingress handler,
//! preview and export.

pub mod engine;
pub mod handlers;
pub mod rules;

pub use engine::{redact_personal_info, redact_with_manifest, RedactionManifest};
