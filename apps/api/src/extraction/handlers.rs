//! Axum route handlers for developer profiles and job offers.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::developer::ingest_resume;
use crate::extraction::job_offer::extract_job_offer;
use crate::extraction::pdf::extract_pdf_text;
use crate::models::job_offer::JobOffer;
use crate::models::profile::Developer;
use crate::models::rows::{DeveloperRow, JobOfferRow};
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PdfExtractResponse {
    pub raw_text: String,
    pub developer: Developer,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Developer profiles
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/developers/extract
///
/// Parses pasted resume text into a profile preview. Nothing is stored.
pub async fn handle_extract_developer(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<Developer>, AppError> {
    let developer = ingest_resume(state.llm.as_ref(), &request.text).await?;
    Ok(Json(developer))
}

/// POST /api/v1/developers/extract-pdf
///
/// Multipart upload with a `file` field holding the resume PDF.
pub async fn handle_extract_developer_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PdfExtractResponse>, AppError> {
    let mut pdf: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            pdf = Some(field.bytes().await?.to_vec());
            break;
        }
    }
    let pdf = pdf.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let raw_text = extract_pdf_text(pdf).await?;
    let developer = ingest_resume(state.llm.as_ref(), &raw_text).await?;

    Ok(Json(PdfExtractResponse {
        raw_text,
        developer,
    }))
}

/// POST /api/v1/developers
pub async fn handle_create_developer(
    State(state): State<AppState>,
    Json(developer): Json<Developer>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    AppError::invalid(developer.validate())?;
    let id = store::insert_developer(&state.db, &developer).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/developers/:id
pub async fn handle_get_developer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeveloperRow>, AppError> {
    Ok(Json(store::get_developer(&state.db, id).await?))
}

/// PUT /api/v1/developers/:id
pub async fn handle_replace_developer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(developer): Json<Developer>,
) -> Result<StatusCode, AppError> {
    AppError::invalid(developer.validate())?;
    store::replace_developer(&state.db, id, &developer).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Job offers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/job-offers/extract
///
/// Parses a pasted job posting into an offer preview. Nothing is stored.
pub async fn handle_extract_job_offer(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<JobOffer>, AppError> {
    let offer = extract_job_offer(state.llm.as_ref(), &request.text).await?;
    Ok(Json(offer))
}

/// POST /api/v1/job-offers
pub async fn handle_create_job_offer(
    State(state): State<AppState>,
    Json(mut offer): Json<JobOffer>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    offer.normalize();
    AppError::invalid(offer.validate())?;
    let id = store::insert_job_offer(&state.db, &offer).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/job-offers/:id
pub async fn handle_get_job_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobOfferRow>, AppError> {
    Ok(Json(store::get_job_offer(&state.db, id).await?))
}

/// PUT /api/v1/job-offers/:id
pub async fn handle_replace_job_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut offer): Json<JobOffer>,
) -> Result<StatusCode, AppError> {
    offer.normalize();
    AppError::invalid(offer.validate())?;
    store::replace_job_offer(&state.db, id, &offer).await?;
    Ok(StatusCode::NO_CONTENT)
}
