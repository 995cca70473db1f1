pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Developer profiles
        .route(
            "/api/v1/developers",
            post(extraction::handle_create_developer),
        )
        .route(
            "/api/v1/developers/extract",
            post(extraction::handle_extract_developer),
        )
        .route(
            "/api/v1/developers/extract-pdf",
            post(extraction::handle_extract_developer_pdf),
        )
        .route(
            "/api/v1/developers/:id",
            get(extraction::handle_get_developer).put(extraction::handle_replace_developer),
        )
        // Job offers
        .route(
            "/api/v1/job-offers",
            post(extraction::handle_create_job_offer),
        )
        .route(
            "/api/v1/job-offers/extract",
            post(extraction::handle_extract_job_offer),
        )
        .route(
            "/api/v1/job-offers/:id",
            get(extraction::handle_get_job_offer).put(extraction::handle_replace_job_offer),
        )
        // Resumes
        .route("/api/v1/resumes", post(resume::handle_generate_resume))
        .route("/api/v1/resumes/:id", get(resume::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/markdown",
            put(resume::handle_replace_markdown),
        )
        .with_state(state)
}
