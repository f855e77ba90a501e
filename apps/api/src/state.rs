use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;
use crate::suggestions::{JobMatcher, SuggestionProvider};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume persistence. Default: in-memory; files when STORAGE_DIR is set.
    pub store: Arc<dyn ResumeStore>,
    /// Pluggable suggestion backend. Default: StaticSuggestionProvider.
    pub suggestions: Arc<dyn SuggestionProvider>,
    /// Pluggable job matcher. Default: KeywordJobMatcher.
    pub job_matcher: Arc<dyn JobMatcher>,
}
