//! Resume parsing — turns raw CV text into a `Developer` with its work history.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::prompts::{
    DEVELOPER_PARSE_PROMPT_TEMPLATE, DEVELOPER_PARSE_ROLE, WORK_EXPERIENCE_PARSE_PROMPT_TEMPLATE,
    WORK_EXPERIENCE_PARSE_ROLE,
};
use crate::extraction::{require_text, EXTRACTION_TEMPERATURE};
use crate::llm_client::prompts::{json_system, DATE_INSTRUCTION};
use crate::llm_client::{complete_json, LanguageModel};
use crate::models::experience::WorkExperience;
use crate::models::profile::Developer;

#[derive(Debug, Deserialize)]
struct WorkExperienceList {
    #[serde(default)]
    work_experiences: Vec<WorkExperience>,
}

/// Extracts the profile part of a resume. Work history is left empty and
/// job preferences take their defaults.
pub async fn extract_developer(llm: &dyn LanguageModel, text: &str) -> Result<Developer, AppError> {
    require_text(text)?;

    let prompt = DEVELOPER_PARSE_PROMPT_TEMPLATE
        .replace("{date_instruction}", DATE_INSTRUCTION)
        .replace("{text}", text);

    let mut developer: Developer = complete_json(
        llm,
        &prompt,
        &json_system(DEVELOPER_PARSE_ROLE),
        EXTRACTION_TEMPERATURE,
    )
    .await
    .map_err(|e| AppError::llm("Developer extraction", e))?;

    developer.work_experiences.clear();
    Ok(developer)
}

/// Extracts every mission of a resume with its STAR-described projects.
pub async fn extract_work_experiences(
    llm: &dyn LanguageModel,
    text: &str,
) -> Result<Vec<WorkExperience>, AppError> {
    require_text(text)?;

    let prompt = build_work_experience_prompt(text, Utc::now().date_naive());
    let parsed: WorkExperienceList = complete_json(
        llm,
        &prompt,
        &json_system(WORK_EXPERIENCE_PARSE_ROLE),
        EXTRACTION_TEMPERATURE,
    )
    .await
    .map_err(|e| AppError::llm("Work experience extraction", e))?;

    Ok(parsed.work_experiences)
}

/// Full resume ingestion: profile first, then work history attached to it.
pub async fn ingest_resume(llm: &dyn LanguageModel, text: &str) -> Result<Developer, AppError> {
    let mut developer = extract_developer(llm, text).await?;
    developer.work_experiences = extract_work_experiences(llm, text).await?;

    info!(
        "Ingested resume for {}: {} skills, {} missions, {} projects",
        developer.name,
        developer.technical_skills.len(),
        developer.work_experiences.len(),
        developer
            .work_experiences
            .iter()
            .map(|w| w.projects.len())
            .sum::<usize>()
    );

    Ok(developer)
}

fn build_work_experience_prompt(text: &str, today: NaiveDate) -> String {
    WORK_EXPERIENCE_PARSE_PROMPT_TEMPLATE
        .replace("{date_instruction}", DATE_INSTRUCTION)
        .replace("{today}", &today.format("%Y-%m-%d").to_string())
        .replace("{text}", text)
}
