//! Live preview with an optional protected mode.
//!
//! Protected mode only changes what is rendered. The record handed to
//! [`PreviewRenderer::render`] is borrowed and never written to.

use std::borrow::Cow;

use serde::Serialize;

use crate::models::resume::ResumeRecord;
use crate::redaction::redact_personal_info;

pub const PROTECTED_BADGE: &str = "Protected Mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewRenderer {
    protected_mode: bool,
}

/// What the display layer receives for one render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewView<'a> {
    pub protected_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub resume: Cow<'a, ResumeRecord>,
}

impl PreviewRenderer {
    pub fn new(protected_mode: bool) -> Self {
        Self { protected_mode }
    }

    pub fn is_protected(&self) -> bool {
        self.protected_mode
    }

    pub fn set_protected_mode(&mut self, protected_mode: bool) {
        self.protected_mode = protected_mode;
    }

    /// Flips protected mode and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.protected_mode = !self.protected_mode;
        self.protected_mode
    }

    /// The record as it should be displayed: borrowed as-is, or a fresh
    /// redacted copy while protected.
    pub fn render<'a>(&self, record: &'a ResumeRecord) -> Cow<'a, ResumeRecord> {
        if self.protected_mode {
            Cow::Owned(redact_personal_info(record))
        } else {
            Cow::Borrowed(record)
        }
    }

    pub fn view<'a>(&self, record: &'a ResumeRecord) -> PreviewView<'a> {
        PreviewView {
            protected_mode: self.protected_mode,
            badge: self.protected_mode.then_some(PROTECTED_BADGE),
            resume: self.render(record),
        }
    }
}
