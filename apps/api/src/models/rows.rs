use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job_offer::JobOffer;
use crate::models::profile::Developer;
use crate::models::resume::Resume;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DeveloperRow {
    pub id: Uuid,
    pub data: Json<Developer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobOfferRow {
    pub id: Uuid,
    pub data: Json<JobOffer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub developer_id: Uuid,
    pub job_offer_id: Uuid,
    pub data: Json<Resume>,
    pub markdown: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
