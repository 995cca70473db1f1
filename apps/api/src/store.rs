//! Workspace store — profiles, job offers and generated resumes as JSONB documents.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_offer::JobOffer;
use crate::models::profile::Developer;
use crate::models::resume::Resume;
use crate::models::rows::{DeveloperRow, JobOfferRow, ResumeRow};

// ────────────────────────────────────────────────────────────────────────────
// Developer profiles
// ────────────────────────────────────────────────────────────────────────────

pub async fn insert_developer(pool: &PgPool, developer: &Developer) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO developer_profiles (id, data) VALUES ($1, $2)")
        .bind(id)
        .bind(Json(developer))
        .execute(pool)
        .await?;

    info!("Stored developer profile {id} ({})", developer.name);
    Ok(id)
}

pub async fn get_developer(pool: &PgPool, id: Uuid) -> Result<DeveloperRow, AppError> {
    sqlx::query_as::<_, DeveloperRow>("SELECT * FROM developer_profiles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Developer profile {id} not found")))
}

pub async fn replace_developer(
    pool: &PgPool,
    id: Uuid,
    developer: &Developer,
) -> Result<(), AppError> {
    let result =
        sqlx::query("UPDATE developer_profiles SET data = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(Json(developer))
            .execute(pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Developer profile {id} not found")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Job offers
// ────────────────────────────────────────────────────────────────────────────

pub async fn insert_job_offer(pool: &PgPool, offer: &JobOffer) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO job_offers (id, data) VALUES ($1, $2)")
        .bind(id)
        .bind(Json(offer))
        .execute(pool)
        .await?;

    info!("Stored job offer {id} ({} at {})", offer.job_title, offer.company_name);
    Ok(id)
}

pub async fn get_job_offer(pool: &PgPool, id: Uuid) -> Result<JobOfferRow, AppError> {
    sqlx::query_as::<_, JobOfferRow>("SELECT * FROM job_offers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job offer {id} not found")))
}

pub async fn replace_job_offer(pool: &PgPool, id: Uuid, offer: &JobOffer) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE job_offers SET data = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(Json(offer))
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job offer {id} not found")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Resumes
// ────────────────────────────────────────────────────────────────────────────

pub async fn insert_resume(
    pool: &PgPool,
    developer_id: Uuid,
    job_offer_id: Uuid,
    resume: &Resume,
    markdown: &str,
) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO resumes (id, developer_id, job_offer_id, data, markdown)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(developer_id)
    .bind(job_offer_id)
    .bind(Json(resume))
    .bind(markdown)
    .execute(pool)
    .await?;

    info!("Stored resume {id} for developer {developer_id} / job offer {job_offer_id}");
    Ok(id)
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// Replaces the markdown of a stored resume with the user's edited version.
pub async fn replace_resume_markdown(
    pool: &PgPool,
    id: Uuid,
    markdown: &str,
) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>(
        "UPDATE resumes SET markdown = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(markdown)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
