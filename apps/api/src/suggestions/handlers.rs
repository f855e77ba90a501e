//! Axum route handlers for suggestions, templates and job match.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::SectionType;
use crate::state::AppState;
use crate::store::validate_user_id;
use crate::suggestions::{JobMatchReport, SectionTemplate, Suggestion};

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub section: SectionType,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub section: SectionType,
    pub templates: Vec<SectionTemplate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    pub job_title: String,
    /// Accepted for parity with the client form; the keyword matcher only
    /// looks at the title.
    #[serde(default)]
    #[allow(dead_code)]
    pub job_description: Option<String>,
}

/// GET /api/v1/suggestions/:section
///
/// With `user_id`, the user's stored resume is passed as context.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Path(section): Path<SectionType>,
    Query(params): Query<SuggestionQuery>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let context = match params.user_id.as_deref() {
        Some(user_id) => {
            validate_user_id(user_id)?;
            state.store.load(user_id).await?
        }
        None => None,
    };

    let suggestions = state.suggestions.suggest(section, context.as_ref()).await?;
    debug!("{} suggestions for {section:?}", suggestions.len());

    Ok(Json(SuggestionsResponse {
        section,
        suggestions,
    }))
}

/// GET /api/v1/templates/:section
pub async fn handle_templates(
    State(state): State<AppState>,
    Path(section): Path<SectionType>,
) -> Result<Json<TemplatesResponse>, AppError> {
    let templates = state.suggestions.templates(section).await?;
    Ok(Json(TemplatesResponse { section, templates }))
}

/// POST /api/v1/resumes/:user_id/job-match
pub async fn handle_job_match(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchReport>, AppError> {
    validate_user_id(&user_id)?;
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }

    let record = state
        .store
        .load(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume stored for user {user_id}")))?;

    let report = state.job_matcher.analyze(&request.job_title, &record).await?;
    debug!("Job match for user {user_id}: {}", report.score);
    Ok(Json(report))
}
