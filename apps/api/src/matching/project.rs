//! Per-project relevance — one LLM decision per project in the candidate's history.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system};
use crate::llm_client::{complete_json, LanguageModel};
use crate::matching::prompts::{PROJECT_MATCH_PROMPT_TEMPLATE, PROJECT_MATCH_ROLE};
use crate::models::experience::Project;
use crate::models::job_offer::JobRequirements;

/// The model's structured verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectVerdict {
    pub is_match: bool,
    pub matching_reason: String,
}

/// Asks the model whether `project` is relevant to `requirements`.
///
/// Not deterministic across calls; a failed call is returned as-is.
pub async fn match_project(
    llm: &dyn LanguageModel,
    project: &Project,
    requirements: &JobRequirements,
    temperature: f32,
) -> Result<ProjectVerdict, AppError> {
    let prompt = build_project_prompt(project, requirements)?;

    let verdict: ProjectVerdict = complete_json(
        llm,
        &prompt,
        &json_system(PROJECT_MATCH_ROLE),
        temperature,
    )
    .await
    .map_err(|e| AppError::llm("Project matching", e))?;

    debug!(
        "Project '{}' match={}: {}",
        project.project_name, verdict.is_match, verdict.matching_reason
    );
    Ok(verdict)
}

fn build_project_prompt(
    project: &Project,
    requirements: &JobRequirements,
) -> Result<String, AppError> {
    let project_json = serde_json::to_string_pretty(&json!({
        "name": project.project_name,
        "description": {
            "situation": project.description.situation,
            "task": project.description.task,
            "action": project.description.action,
            "result": project.description.result,
        },
        "technologies": project.technologies,
        "achievements": project.achievements,
    }))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize project: {e}")))?;

    let requirements_json = serde_json::to_string_pretty(&json!({
        "hard_skills": requirements.hard_skills,
        "soft_skills": requirements.soft_skills,
        "experience": {
            "years": requirements.experience.years_of_experience,
            "types": requirements.experience.relevant_experiences,
        },
    }))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize requirements: {e}")))?;

    Ok(fill_template(
        PROJECT_MATCH_PROMPT_TEMPLATE,
        &[
            ("project_json", project_json.as_str()),
            ("requirements_json", requirements_json.as_str()),
        ],
    ))
}
