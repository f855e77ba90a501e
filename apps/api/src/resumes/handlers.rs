//! Axum route handlers for stored resumes.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::export::{export_resume, ExportFormat};
use crate::models::resume::ResumeRecord;
use crate::preview::PreviewRenderer;
use crate::state::AppState;
use crate::store::validate_user_id;

// ────────────────────────────────────────────────────────────────────────────
// Query types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub protected: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub redact: bool,
}

async fn load_required(state: &AppState, user_id: &str) -> Result<ResumeRecord, AppError> {
    validate_user_id(user_id)?;
    state
        .store
        .load(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume stored for user {user_id}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes/:user_id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    Ok(Json(load_required(&state, &user_id).await?))
}

/// PUT /api/v1/resumes/:user_id
///
/// Saves a committed edit, replacing the stored record.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(record): Json<ResumeRecord>,
) -> Result<StatusCode, AppError> {
    validate_user_id(&user_id)?;
    state.store.save(&user_id, &record).await?;
    info!("Saved resume for user {user_id}");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resumes/:user_id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    validate_user_id(&user_id)?;
    state.store.delete(&user_id).await?;
    info!("Deleted resume for user {user_id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resumes/:user_id/preview?protected=true
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<PreviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let record = load_required(&state, &user_id).await?;
    let renderer = PreviewRenderer::new(params.protected);
    debug!("Preview for user {user_id} (protected: {})", renderer.is_protected());
    // The view borrows `record`, so it is encoded before the record drops.
    let body = serde_json::to_value(renderer.view(&record))?;
    Ok(Json(body))
}

/// GET /api/v1/resumes/:user_id/export?format=html|json&redact=true
pub async fn handle_export(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let record = load_required(&state, &user_id).await?;
    let doc = export_resume(&record, params.format, params.redact, Utc::now())?;
    info!(
        "Exported {} for user {user_id} (redacted: {})",
        doc.file_name, params.redact
    );

    Ok((
        [
            (header::CONTENT_TYPE, doc.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.file_name),
            ),
        ],
        doc.body,
    ))
}
