//! Resume generation — orchestrates the tailoring pipeline.
//!
//! Flow: background match → one project match per project (history order)
//!       → certification / language / achievement filters → summary.
//!
//! Every LLM call runs sequentially. The first failure aborts the whole
//! generation; nothing is persisted here.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LanguageModel;
use crate::matching::background::match_background;
use crate::matching::filters::{
    professional_summary, relevant_achievements, relevant_certifications, relevant_languages,
    total_years_experience,
};
use crate::matching::project::match_project;
use crate::models::experience::WorkExperience;
use crate::models::job_offer::JobOffer;
use crate::models::profile::Developer;
use crate::models::resume::{ProjectMatch, Resume};

pub async fn generate_resume(
    llm: &dyn LanguageModel,
    developer: &Developer,
    job_offer: &JobOffer,
    match_temperature: f32,
) -> Result<Resume, AppError> {
    let requirements = &job_offer.requirements;

    info!(
        "Generating resume for {} → {} at {}",
        developer.name, job_offer.job_title, job_offer.company_name
    );

    let background = match_background(llm, developer, requirements, match_temperature).await?;

    let mut project_matches = Vec::new();
    let mut relevant_experience = Vec::new();
    for experience in &developer.work_experiences {
        let mut matched_projects = Vec::new();
        for project in &experience.projects {
            let verdict = match_project(llm, project, requirements, match_temperature).await?;
            if verdict.is_match {
                matched_projects.push(project.clone());
            }
            project_matches.push(ProjectMatch {
                company_name: experience.mission.company_name.clone(),
                project_name: project.project_name.clone(),
                is_match: verdict.is_match,
                matching_reason: verdict.matching_reason,
            });
        }

        if !matched_projects.is_empty() {
            relevant_experience.push(WorkExperience {
                mission: experience.mission.clone(),
                projects: matched_projects,
            });
        }
    }

    let years = total_years_experience(&developer.work_experiences);
    let summary = professional_summary(
        &background.relevant_skills,
        &background.relevant_education,
        years,
        job_offer,
    );

    let resume = Resume {
        developer: developer.clone(),
        job_offer: job_offer.clone(),
        professional_summary: summary,
        relevant_skills: background.relevant_skills,
        relevant_experience,
        project_matches,
        relevant_certifications: relevant_certifications(
            &developer.certifications,
            &requirements.certifications,
        ),
        relevant_education: background.relevant_education,
        relevant_languages: relevant_languages(&developer.languages, &requirements.languages),
        highlighted_achievements: relevant_achievements(
            &developer.achievements,
            &requirements.hard_skills,
            &requirements.soft_skills,
        ),
        match_explanation: background.match_explanation,
    };

    let stats = resume.statistics();
    info!(
        "Resume ready: {}/{} skills, {}/{} projects, {}/{} certifications",
        stats.skills_matched,
        stats.skills_required,
        stats.projects_matched,
        stats.projects_total,
        stats.certifications_matched,
        stats.certifications_required
    );

    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::models::job_offer::fixtures::job_offer;
    use crate::models::profile::fixtures::developer;

    const BACKGROUND_REPLY: &str = r#"{
        "relevant_skills": ["React.js", "TypeScript", "Python"],
        "relevant_education_ids": [0],
        "match_explanation": "Frontend stack and CS degree"
    }"#;

    fn scripted_pipeline() -> ScriptedModel {
        ScriptedModel::new([
            BACKGROUND_REPLY,
            r#"{"is_match": true, "matching_reason": "React.js and TypeScript"}"#,
            r#"{"is_match": true, "matching_reason": "Python and AWS"}"#,
            r#"{"is_match": false, "matching_reason": "Game engine work"}"#,
        ])
    }

    #[tokio::test]
    async fn test_generate_resume_assembles_every_section() {
        let llm = scripted_pipeline();
        let resume = generate_resume(&llm, &developer(), &job_offer(), 0.0)
            .await
            .unwrap();

        assert_eq!(
            resume.professional_summary,
            "Experienced in React.js, TypeScript, Python \
             with Bachelor's in Computer Science from Tech University \
             and 3+ years of relevant experience \
             seeking Senior Frontend Developer position at Tech Innovators Inc."
        );
        assert_eq!(resume.relevant_skills.len(), 3);
        assert_eq!(resume.relevant_education.len(), 1);
        assert_eq!(resume.relevant_certifications.len(), 1);
        assert_eq!(resume.relevant_languages.len(), 1);
        assert_eq!(resume.relevant_languages[0].name, "English");
        // "Best Team Lead" mentions no required skill verbatim.
        assert!(resume.highlighted_achievements.is_empty());
        assert_eq!(resume.match_explanation, "Frontend stack and CS degree");
    }

    #[tokio::test]
    async fn test_mission_appears_once_with_only_matching_projects() {
        let llm = scripted_pipeline();
        let resume = generate_resume(&llm, &developer(), &job_offer(), 0.0)
            .await
            .unwrap();

        assert_eq!(resume.relevant_experience.len(), 1);
        let tech_corp = &resume.relevant_experience[0];
        assert_eq!(tech_corp.mission.company_name, "Tech Corp");
        assert_eq!(tech_corp.projects.len(), 2);

        assert_eq!(resume.project_matches.len(), 3);
        let game = &resume.project_matches[2];
        assert_eq!(game.company_name, "Indie Games Studio");
        assert!(!game.is_match);
        assert_eq!(game.matching_reason, "Game engine work");
    }

    #[tokio::test]
    async fn test_projects_are_matched_in_history_order() {
        let llm = scripted_pipeline();
        generate_resume(&llm, &developer(), &job_offer(), 0.2)
            .await
            .unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[0].prompt.contains("Developer Background"));
        assert!(calls[1].prompt.contains("E-commerce Platform Redesign"));
        assert!(calls[2].prompt.contains("Cloud Infrastructure Migration"));
        assert!(calls[3].prompt.contains("Retro Mobile Game"));
        assert!(calls.iter().all(|c| c.temperature == 0.2));
    }

    #[tokio::test]
    async fn test_unmatched_project_narrows_mission() {
        let llm = ScriptedModel::new([
            BACKGROUND_REPLY,
            r#"{"is_match": false, "matching_reason": "No"}"#,
            r#"{"is_match": true, "matching_reason": "Python"}"#,
            r#"{"is_match": false, "matching_reason": "No"}"#,
        ]);
        let resume = generate_resume(&llm, &developer(), &job_offer(), 0.0)
            .await
            .unwrap();

        let projects = &resume.relevant_experience[0].projects;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_name, "Cloud Infrastructure Migration");
    }

    #[tokio::test]
    async fn test_failed_project_call_aborts_generation() {
        let llm = ScriptedModel::new([
            BACKGROUND_REPLY,
            r#"{"is_match": true, "matching_reason": "React.js"}"#,
        ])
        .then_fail(500);

        let err = generate_resume(&llm, &developer(), &job_offer(), 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(llm.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_developer_without_history_skips_project_calls() {
        let mut dev = developer();
        dev.work_experiences.clear();
        let llm = ScriptedModel::new([r#"{"relevant_skills": ["Python"]}"#]);

        let resume = generate_resume(&llm, &dev, &job_offer(), 0.0).await.unwrap();
        assert!(resume.relevant_experience.is_empty());
        assert!(resume.project_matches.is_empty());
        assert!(resume
            .professional_summary
            .starts_with("Experienced in Python and 0+ years"));
        assert_eq!(llm.calls().len(), 1);
    }
}
