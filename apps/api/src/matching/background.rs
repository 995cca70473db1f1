//! Background relevance — which skills and education entries matter for the job.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system};
use crate::llm_client::{complete_json, LanguageModel};
use crate::matching::prompts::{BACKGROUND_MATCH_PROMPT_TEMPLATE, BACKGROUND_MATCH_ROLE};
use crate::models::job_offer::JobRequirements;
use crate::models::profile::{Developer, Education, Skill};

/// Raw reply of the background matcher.
#[derive(Debug, Clone, Deserialize)]
struct BackgroundReply {
    #[serde(default)]
    relevant_skills: Vec<String>,
    #[serde(default)]
    relevant_education_ids: Vec<usize>,
    #[serde(default)]
    match_explanation: String,
}

/// The developer's own entries the model judged relevant, in profile order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundMatch {
    pub relevant_skills: Vec<Skill>,
    pub relevant_education: Vec<Education>,
    pub match_explanation: String,
}

/// One LLM call over skills, education and work history.
pub async fn match_background(
    llm: &dyn LanguageModel,
    developer: &Developer,
    requirements: &JobRequirements,
    temperature: f32,
) -> Result<BackgroundMatch, AppError> {
    let prompt = build_background_prompt(developer, requirements)?;

    let reply: BackgroundReply = complete_json(
        llm,
        &prompt,
        &json_system(BACKGROUND_MATCH_ROLE),
        temperature,
    )
    .await
    .map_err(|e| AppError::llm("Background matching", e))?;

    let matched = resolve_background(developer, reply);
    info!(
        "Background match for {}: {} skills, {} education entries",
        developer.name,
        matched.relevant_skills.len(),
        matched.relevant_education.len()
    );
    Ok(matched)
}

/// Maps the model's names and ids back onto the developer's entries.
/// Names must match exactly; unknown ids are dropped.
fn resolve_background(developer: &Developer, reply: BackgroundReply) -> BackgroundMatch {
    let skill_names: HashSet<&str> = reply.relevant_skills.iter().map(String::as_str).collect();
    let relevant_skills: Vec<Skill> = developer
        .technical_skills
        .iter()
        .filter(|s| skill_names.contains(s.name.as_str()))
        .cloned()
        .collect();

    let education_ids: HashSet<usize> = reply.relevant_education_ids.iter().copied().collect();
    let unknown = education_ids
        .iter()
        .filter(|&&id| id >= developer.education.len())
        .count();
    if unknown > 0 {
        warn!("Background matcher returned {unknown} unknown education ids");
    }
    let relevant_education: Vec<Education> = developer
        .education
        .iter()
        .enumerate()
        .filter(|(i, _)| education_ids.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    BackgroundMatch {
        relevant_skills,
        relevant_education,
        match_explanation: reply.match_explanation,
    }
}

fn build_background_prompt(
    developer: &Developer,
    requirements: &JobRequirements,
) -> Result<String, AppError> {
    let background_json = serde_json::to_string_pretty(&json!({
        "skills": developer
            .technical_skills
            .iter()
            .map(|s| json!({"name": s.name, "proficiency": s.level}))
            .collect::<Vec<_>>(),
        "education": developer
            .education
            .iter()
            .enumerate()
            .map(|(id, e)| json!({
                "id": id,
                "degree": e.degree,
                "field": e.field_of_study,
                "institution": e.institution_name,
                "graduation_date": e.end_date,
            }))
            .collect::<Vec<_>>(),
        "work_experience": developer
            .work_experiences
            .iter()
            .map(|w| json!({
                "title": w.mission.job_title,
                "company": w.mission.company_name,
                "duration": format!("{} to {}", w.mission.start_date, w.mission.end_date),
                "summary": w.mission.overall_summary,
            }))
            .collect::<Vec<_>>(),
    }))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize background: {e}")))?;

    let requirements_json = serde_json::to_string_pretty(&json!({
        "hard_skills": requirements.hard_skills,
        "soft_skills": requirements.soft_skills,
        "education_level": requirements.education_level,
        "experience": {
            "years": requirements.experience.years_of_experience,
            "types": requirements.experience.relevant_experiences,
        },
    }))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize requirements: {e}")))?;

    Ok(fill_template(
        BACKGROUND_MATCH_PROMPT_TEMPLATE,
        &[
            ("background_json", background_json.as_str()),
            ("requirements_json", requirements_json.as_str()),
        ],
    ))
}
