//! Writing assistance: section suggestions, starter templates and job match.
//!
//! Both capabilities sit behind traits carried in `AppState` as trait objects,
//! so the deterministic catalog backends can be swapped for an inference
//! service without touching handlers.

pub mod catalog;
pub mod handlers;
pub mod job_match;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{Education, Experience, Project, ResumeRecord, SectionType};

pub use catalog::StaticSuggestionProvider;
pub use job_match::{JobMatchReport, JobMatcher, KeywordJobMatcher};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Technical,
    Soft,
    Achievement,
    Responsibility,
    Template,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub text: String,
}

/// Prefilled content for a new entry in a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TemplateData {
    Experience(Experience),
    Education(Education),
    Project(Project),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionTemplate {
    pub title: String,
    pub description: String,
    pub data: TemplateData,
}

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Suggestions for `section`. `context` is the user's current resume, when
    /// known, and lets a backend skip what is already there.
    async fn suggest(
        &self,
        section: SectionType,
        context: Option<&ResumeRecord>,
    ) -> Result<Vec<Suggestion>, AppError>;

    async fn templates(&self, section: SectionType) -> Result<Vec<SectionTemplate>, AppError>;
}
