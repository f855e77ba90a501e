//! Shared fixtures for unit tests.

use std::sync::Arc;

use serde_json::{json, Map};

use crate::config::Config;
use crate::models::resume::{
    Certification, Education, Experience, FileCategory, Gender, PersonalInfo, Project,
    ResumeRecord, Skills, UploadedFile,
};
use crate::state::AppState;
use crate::store::MemoryStore;
use crate::suggestions::{KeywordJobMatcher, StaticSuggestionProvider};

/// A fully populated record whose personal info matches the canonical
/// redaction scenario.
pub fn sample_record() -> ResumeRecord {
    ResumeRecord {
        personal_info: PersonalInfo {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            location: "123 Main St".to_string(),
            website: Some("https://johndoe.dev".to_string()),
            linkedin: Some("https://linkedin.com/in/johndoe".to_string()),
            profile_image: Some("data:image/png;base64,AAAA".to_string()),
            gender: Some(Gender::Male),
            extra: Map::new(),
        },
        summary: "Backend engineer with 8 years of experience".to_string(),
        experience: vec![Experience {
            position: "Senior Engineer".to_string(),
            company: "Acme 42".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: "Present".to_string(),
            description: "Call me at 555-123-4567".to_string(),
            achievements: Some(vec!["Cut p99 latency by 40%".to_string()]),
        }],
        education: vec![Education {
            degree: "BSc Computer Science".to_string(),
            school: "State University".to_string(),
            year: "2015".to_string(),
            gpa: Some("3.8".to_string()),
            relevant_courses: None,
        }],
        skills: Skills {
            technical: vec!["Rust".to_string(), "SQL".to_string(), "Docker".to_string()],
            soft: vec!["Communication".to_string()],
        },
        projects: vec![Project {
            name: "ledger".to_string(),
            description: "Double-entry bookkeeping <engine>".to_string(),
            technologies: vec!["Rust".to_string()],
            github: Some("https://github.com/johndoe/ledger".to_string()),
            demo: None,
        }],
        certifications: vec![Certification {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023".to_string(),
            url: None,
        }],
        uploaded_files: vec![UploadedFile {
            id: "1".to_string(),
            name: "cv.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2048,
            data: "JVBERi0=".to_string(),
            upload_date: "2024-05-01".to_string(),
            category: FileCategory::Other,
        }],
        extra: Map::from_iter([
            ("colorTheme".to_string(), json!("blue")),
            ("backgroundTheme".to_string(), json!("white-black")),
        ]),
    }
}

/// In-memory application state with the default backends.
pub fn test_state() -> AppState {
    let config = Config::default();
    AppState {
        store: Arc::new(MemoryStore::new(&config.storage_key_prefix)),
        suggestions: Arc::new(StaticSuggestionProvider),
        job_matcher: Arc::new(KeywordJobMatcher),
        config,
    }
}
