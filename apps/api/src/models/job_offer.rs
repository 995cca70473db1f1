use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::dates;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    #[serde(default)]
    pub years_of_experience: u32,
    /// Kinds of experience asked for, e.g. "large-scale web applications".
    #[serde(default)]
    pub relevant_experiences: Vec<String>,
}

/// The requirement set of a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub experience: ExperienceRequirement,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub other_conditions: Vec<String>,
}

impl JobRequirements {
    /// Trims every list entry and drops the blank ones.
    pub fn normalize(&mut self) {
        for list in [
            &mut self.hard_skills,
            &mut self.soft_skills,
            &mut self.certifications,
            &mut self.experience.relevant_experiences,
            &mut self.languages,
            &mut self.other_conditions,
        ] {
            normalize_list(list);
        }
        self.education_level = self.education_level.trim().to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: JobRequirements,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(default, with = "dates::optional")]
    pub application_deadline: Option<NaiveDate>,
}

impl JobOffer {
    pub fn normalize(&mut self) {
        self.requirements.normalize();
        normalize_list(&mut self.perks);
    }

    /// Returns every problem that makes the offer unusable for tailoring.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.job_title.trim().is_empty() {
            problems.push("job_title cannot be empty".to_string());
        }
        problems
    }
}

fn normalize_list(list: &mut Vec<String>) {
    list.retain(|entry| !entry.trim().is_empty());
    for entry in list.iter_mut() {
        *entry = entry.trim().to_string();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cleans_every_list() {
        let mut offer = fixtures::job_offer();
        offer.requirements.hard_skills = vec![" Rust ".to_string(), "".to_string()];
        offer.requirements.languages = vec!["English".to_string(), " French\n".to_string()];
        offer.requirements.education_level = " Master's ".to_string();
        offer.perks = vec!["  ".to_string(), "Stock options".to_string()];

        offer.normalize();

        assert_eq!(offer.requirements.hard_skills, vec!["Rust"]);
        assert_eq!(offer.requirements.languages, vec!["English", "French"]);
        assert_eq!(offer.requirements.education_level, "Master's");
        assert_eq!(offer.perks, vec!["Stock options"]);
    }

    #[test]
    fn test_blank_deadline_deserializes_to_none() {
        let json = r#"{
            "job_title": "Backend Engineer",
            "company_name": "Acme",
            "requirements": {"hard_skills": ["Go"]},
            "application_deadline": ""
        }"#;
        let offer: JobOffer = serde_json::from_str(json).unwrap();
        assert!(offer.application_deadline.is_none());
        assert_eq!(offer.requirements.experience.years_of_experience, 0);
        assert!(offer.requirements.certifications.is_empty());
    }

    #[test]
    fn test_validate_requires_title() {
        let mut offer = fixtures::job_offer();
        assert!(offer.validate().is_empty());
        offer.job_title = String::new();
        assert_eq!(offer.validate(), vec!["job_title cannot be empty"]);
    }
}
