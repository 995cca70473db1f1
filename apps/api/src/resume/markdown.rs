//! Markdown rendering of a tailored resume. One LLM writing pass.

use chrono::Datelike;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{strip_code_fences, LanguageModel};
use crate::models::dates::month_year;
use crate::models::resume::Resume;
use crate::resume::prompts::{RESUME_WRITER_PROMPT_TEMPLATE, RESUME_WRITER_SYSTEM};

pub async fn generate_markdown(
    llm: &dyn LanguageModel,
    resume: &Resume,
    temperature: f32,
) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(&resume_document(resume))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
    let prompt = RESUME_WRITER_PROMPT_TEMPLATE.replace("{resume_json}", &resume_json);

    let text = llm
        .complete(&prompt, RESUME_WRITER_SYSTEM, temperature)
        .await
        .map_err(|e| AppError::llm("Markdown generation", e))?;

    let markdown = strip_code_fences(&text, "markdown").to_string();
    info!(
        "Generated markdown resume for {} ({} chars)",
        resume.developer.name,
        markdown.len()
    );
    Ok(markdown)
}

/// The writer's view of a resume: only what belongs on the page.
fn resume_document(resume: &Resume) -> Value {
    let developer = &resume.developer;
    let job = &resume.job_offer;

    json!({
        "job_target": {
            "title": job.job_title,
            "company": job.company_name,
            "description": job.description,
        },
        "professional_summary": resume.professional_summary,
        "contact_info": {
            "name": developer.name,
            "email": developer.contact_info.email,
            "phone": developer.contact_info.phone,
            "location": developer.contact_info.address,
            "linkedin": developer.linkedin_url,
            "github": developer.github_url,
            "website": developer.website_url,
        },
        "skills": resume
            .relevant_skills
            .iter()
            .map(|s| json!({"name": s.name, "level": s.level}))
            .collect::<Vec<_>>(),
        "experience": resume
            .relevant_experience
            .iter()
            .map(|w| json!({
                "title": w.mission.job_title,
                "company": w.mission.company_name,
                "duration": w.mission.duration_label(),
                "summary": w.mission.overall_summary,
                "projects": w.projects.iter().map(|p| json!({
                    "name": p.project_name,
                    "description": p.description,
                    "technologies": p.technologies,
                    "achievements": p.achievements,
                })).collect::<Vec<_>>(),
            }))
            .collect::<Vec<_>>(),
        // Education is not narrowed: every degree goes on the page.
        "education": developer
            .education
            .iter()
            .map(|e| json!({
                "degree": e.degree,
                "field": e.field_of_study,
                "institution": e.institution_name,
                "graduation": e.end_date.year().to_string(),
            }))
            .collect::<Vec<_>>(),
        "certifications": resume
            .relevant_certifications
            .iter()
            .map(|c| json!({
                "name": c.name,
                "issuer": c.issuing_organization,
                "date": month_year(c.issue_date),
                "expiry": c.expiration_date.map(month_year),
            }))
            .collect::<Vec<_>>(),
        "languages": resume
            .relevant_languages
            .iter()
            .map(|l| json!({"name": l.name, "level": l.proficiency}))
            .collect::<Vec<_>>(),
        "achievements": resume.highlighted_achievements,
    })
}
