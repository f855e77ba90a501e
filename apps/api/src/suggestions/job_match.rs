//! Job match: compares resume skills against the skills a job title implies.
//!
//! Default: `KeywordJobMatcher` (fixed role table, deterministic). Carried in
//! `AppState` as `Arc<dyn JobMatcher>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Strong,
    Medium,
    Weak,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchReport {
    pub score: u32, // 20 – 95
    pub level: MatchLevel,
    pub missing_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub sections_to_improve: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn analyze(
        &self,
        job_title: &str,
        record: &ResumeRecord,
    ) -> Result<JobMatchReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordJobMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Role → required skills. The first role contained in the job title wins.
const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "frontend developer",
        &["react", "javascript", "typescript", "html", "css", "vue", "angular"],
    ),
    (
        "backend developer",
        &["node.js", "python", "java", "sql", "mongodb", "express", "api"],
    ),
    (
        "full stack developer",
        &["react", "node.js", "javascript", "typescript", "sql", "mongodb"],
    ),
    (
        "data scientist",
        &["python", "machine learning", "sql", "pandas", "numpy", "tensorflow"],
    ),
    (
        "product manager",
        &["leadership", "communication", "project management", "analytics"],
    ),
    (
        "software engineer",
        &["javascript", "python", "java", "git", "problem solving"],
    ),
    (
        "devops engineer",
        &["docker", "kubernetes", "aws", "ci/cd", "linux", "terraform"],
    ),
];

const FALLBACK_SKILLS: &[&str] = &["communication", "problem solving", "teamwork"];

const MIN_SCORE: f64 = 20.0;
const MAX_SCORE: f64 = 95.0;
const MAX_MISSING: usize = 5;
const MAX_MATCHING: usize = 8;

/// Pure-Rust matcher over the fixed role table. No external calls.
///
/// A resume skill matches when it contains a required skill
/// (case-insensitive); a required skill is missing when no resume skill
/// contains it.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordJobMatcher;

#[async_trait]
impl JobMatcher for KeywordJobMatcher {
    async fn analyze(
        &self,
        job_title: &str,
        record: &ResumeRecord,
    ) -> Result<JobMatchReport, AppError> {
        Ok(compute_job_match(job_title, record))
    }
}

fn required_skills_for(job_title_lower: &str) -> &'static [&'static str] {
    ROLE_SKILLS
        .iter()
        .find(|(role, _)| job_title_lower.contains(role))
        .map(|(_, skills)| *skills)
        .unwrap_or(FALLBACK_SKILLS)
}

fn compute_job_match(job_title: &str, record: &ResumeRecord) -> JobMatchReport {
    let title_lower = job_title.to_lowercase();
    let required = required_skills_for(&title_lower);

    let resume_skills: Vec<&String> = record.skills.all().collect();

    let matching_skills: Vec<String> = resume_skills
        .iter()
        .filter(|skill| {
            let skill_lower = skill.to_lowercase();
            required.iter().any(|req| skill_lower.contains(req))
        })
        .map(|skill| skill.to_string())
        .collect();

    let missing_skills: Vec<String> = required
        .iter()
        .filter(|req| {
            !resume_skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(*req))
        })
        .map(|req| req.to_string())
        .collect();

    let raw = matching_skills.len() as f64 / required.len() as f64 * 100.0;
    let score = raw.clamp(MIN_SCORE, MAX_SCORE);
    let level = if score >= 80.0 {
        MatchLevel::Strong
    } else if score >= 50.0 {
        MatchLevel::Medium
    } else {
        MatchLevel::Weak
    };

    let recommendations = vec![
        format!(
            "Add {} to your skills section",
            missing_skills
                .first()
                .map(String::as_str)
                .unwrap_or("relevant skills")
        ),
        format!("Highlight {title_lower} experience in your summary"),
        "Include quantifiable achievements in your experience".to_string(),
        "Add relevant projects that demonstrate your expertise".to_string(),
    ];

    let keyword_suggestions = required
        .iter()
        .take(3)
        .chain(["agile", "collaboration", "problem-solving"].iter())
        .map(|k| k.to_string())
        .collect();

    let sections_to_improve = if score < 70.0 {
        vec!["skills", "experience", "projects"]
    } else {
        vec!["summary"]
    }
    .into_iter()
    .map(String::from)
    .collect();

    JobMatchReport {
        score: score.round() as u32,
        level,
        missing_skills: missing_skills.into_iter().take(MAX_MISSING).collect(),
        matching_skills: matching_skills.into_iter().take(MAX_MATCHING).collect(),
        recommendations,
        keyword_suggestions,
        sections_to_improve,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
