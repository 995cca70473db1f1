//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeStatistics};
use crate::models::rows::ResumeRow;
use crate::resume::generator::generate_resume;
use crate::resume::markdown::generate_markdown;
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub developer_id: Uuid,
    pub job_offer_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub id: Uuid,
    pub resume: Resume,
    pub markdown: String,
    pub statistics: ResumeStatistics,
}

impl From<ResumeRow> for ResumeResponse {
    fn from(row: ResumeRow) -> Self {
        let resume = row.data.0;
        Self {
            id: row.id,
            statistics: resume.statistics(),
            resume,
            markdown: row.markdown,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkdownUpdate {
    pub markdown: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Tailors a stored profile to a stored job offer, writes the markdown,
/// and persists both. Nothing is stored if any LLM call fails.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<ResumeResponse>), AppError> {
    let developer = store::get_developer(&state.db, request.developer_id).await?.data.0;
    let job_offer = store::get_job_offer(&state.db, request.job_offer_id).await?.data.0;

    let resume = generate_resume(
        state.llm.as_ref(),
        &developer,
        &job_offer,
        state.config.match_temperature,
    )
    .await?;
    let markdown =
        generate_markdown(state.llm.as_ref(), &resume, state.config.writing_temperature).await?;

    let id = store::insert_resume(
        &state.db,
        request.developer_id,
        request.job_offer_id,
        &resume,
        &markdown,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ResumeResponse {
            id,
            statistics: resume.statistics(),
            resume,
            markdown,
        }),
    ))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let row = store::get_resume(&state.db, id).await?;
    Ok(Json(row.into()))
}

/// PUT /api/v1/resumes/:id/markdown
///
/// Stores the user's hand-edited markdown. The structured resume is untouched.
pub async fn handle_replace_markdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<MarkdownUpdate>,
) -> Result<Json<ResumeResponse>, AppError> {
    if update.markdown.trim().is_empty() {
        return Err(AppError::Validation("markdown cannot be empty".to_string()));
    }
    let row = store::replace_resume_markdown(&state.db, id, &update.markdown).await?;
    Ok(Json(row.into()))
}
