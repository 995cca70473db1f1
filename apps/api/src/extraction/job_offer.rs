//! Job offer parsing — extracts the requirement set from a raw posting.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::prompts::{JOB_OFFER_PARSE_PROMPT_TEMPLATE, JOB_OFFER_PARSE_ROLE};
use crate::extraction::{require_text, EXTRACTION_TEMPERATURE};
use crate::llm_client::prompts::{json_system, DATE_INSTRUCTION};
use crate::llm_client::{complete_json, LanguageModel};
use crate::models::job_offer::JobOffer;

/// Parses a job posting and returns a normalised `JobOffer`.
pub async fn extract_job_offer(llm: &dyn LanguageModel, text: &str) -> Result<JobOffer, AppError> {
    require_text(text)?;

    let prompt = JOB_OFFER_PARSE_PROMPT_TEMPLATE
        .replace("{date_instruction}", DATE_INSTRUCTION)
        .replace("{text}", text);

    let mut offer: JobOffer = complete_json(
        llm,
        &prompt,
        &json_system(JOB_OFFER_PARSE_ROLE),
        EXTRACTION_TEMPERATURE,
    )
    .await
    .map_err(|e| AppError::llm("Job offer extraction", e))?;

    offer.normalize();

    info!(
        "Parsed job offer '{}' at '{}': {} hard skills, {} certifications",
        offer.job_title,
        offer.company_name,
        offer.requirements.hard_skills.len(),
        offer.requirements.certifications.len()
    );

    Ok(offer)
}
