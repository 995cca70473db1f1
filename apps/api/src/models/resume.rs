use serde::{Deserialize, Serialize};

use crate::models::experience::WorkExperience;
use crate::models::job_offer::JobOffer;
use crate::models::profile::{Achievement, Certification, Developer, Education, Language, Skill};

/// The model's verdict on one project of the candidate's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMatch {
    pub company_name: String,
    pub project_name: String,
    pub is_match: bool,
    pub matching_reason: String,
}

/// A resume tailored to one job offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub developer: Developer,
    pub job_offer: JobOffer,
    pub professional_summary: String,
    pub relevant_skills: Vec<Skill>,
    /// Missions with at least one matching project, narrowed to those projects.
    pub relevant_experience: Vec<WorkExperience>,
    pub project_matches: Vec<ProjectMatch>,
    pub relevant_certifications: Vec<Certification>,
    pub relevant_education: Vec<Education>,
    pub relevant_languages: Vec<Language>,
    pub highlighted_achievements: Vec<Achievement>,
    #[serde(default)]
    pub match_explanation: String,
}

/// Coverage counters shown next to a generated resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStatistics {
    pub skills_matched: usize,
    pub skills_required: usize,
    pub projects_matched: usize,
    pub projects_total: usize,
    pub certifications_matched: usize,
    pub certifications_required: usize,
}

impl Resume {
    pub fn statistics(&self) -> ResumeStatistics {
        let requirements = &self.job_offer.requirements;
        ResumeStatistics {
            skills_matched: self.relevant_skills.len(),
            skills_required: requirements.hard_skills.len(),
            projects_matched: self.project_matches.iter().filter(|m| m.is_match).count(),
            projects_total: self.project_matches.len(),
            certifications_matched: self.relevant_certifications.len(),
            certifications_required: requirements.certifications.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_offer::fixtures::job_offer;
    use crate::models::profile::fixtures::developer;

    fn verdict(project: &str, is_match: bool) -> ProjectMatch {
        ProjectMatch {
            company_name: "Tech Corp".to_string(),
            project_name: project.to_string(),
            is_match,
            matching_reason: String::new(),
        }
    }

    #[test]
    fn test_statistics_count_against_requirements() {
        let dev = developer();
        let resume = Resume {
            professional_summary: String::new(),
            relevant_skills: dev.technical_skills[..3].to_vec(),
            relevant_experience: Vec::new(),
            project_matches: vec![verdict("A", true), verdict("B", false), verdict("C", true)],
            relevant_certifications: dev.certifications.clone(),
            relevant_education: Vec::new(),
            relevant_languages: Vec::new(),
            highlighted_achievements: Vec::new(),
            match_explanation: String::new(),
            developer: dev,
            job_offer: job_offer(),
        };

        assert_eq!(
            resume.statistics(),
            ResumeStatistics {
                skills_matched: 3,
                skills_required: 4,
                projects_matched: 2,
                projects_total: 3,
                certifications_matched: 1,
                certifications_required: 1,
            }
        );
    }

    #[test]
    fn test_stored_resume_without_explanation_deserializes() {
        let dev = developer();
        let value = serde_json::json!({
            "developer": dev,
            "job_offer": job_offer(),
            "professional_summary": "Summary",
            "relevant_skills": [],
            "relevant_experience": [],
            "project_matches": [],
            "relevant_certifications": [],
            "relevant_education": [],
            "relevant_languages": [],
            "highlighted_achievements": [],
        });
        let resume: Resume = serde_json::from_value(value).unwrap();
        assert_eq!(resume.match_explanation, "");
    }
}
