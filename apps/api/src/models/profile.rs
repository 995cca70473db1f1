//! Candidate profile — everything the resume extractor pulls out of a CV.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::dates;
use crate::models::experience::WorkExperience;

/// Proficiency of a technical skill.
///
/// Parsing never fails: labels outside the known synonyms fall back to
/// `Intermediate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "basic" | "beginner" | "novice" | "elementary" | "junior" => SkillLevel::Basic,
            "intermediate" | "competent" | "working knowledge" => SkillLevel::Intermediate,
            "advanced" | "proficient" | "strong" | "senior" => SkillLevel::Advanced,
            "expert" | "master" => SkillLevel::Expert,
            other => {
                warn!("Unknown skill level '{other}', using Intermediate");
                SkillLevel::Intermediate
            }
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// Proficiency of a spoken language. CEFR levels are accepted; unknown
/// labels fall back to `Intermediate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum LanguageProficiency {
    Basic,
    Intermediate,
    Fluent,
    Native,
}

impl From<String> for LanguageProficiency {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "basic" | "beginner" | "elementary" | "a1" | "a2" => LanguageProficiency::Basic,
            "intermediate" | "conversational" | "b1" | "b2" => LanguageProficiency::Intermediate,
            "fluent" | "advanced" | "proficient" | "c1" | "c2" => LanguageProficiency::Fluent,
            "native" | "mother tongue" | "bilingual" => LanguageProficiency::Native,
            other => {
                warn!("Unknown language proficiency '{other}', using Intermediate");
                LanguageProficiency::Intermediate
            }
        }
    }
}

impl fmt::Display for LanguageProficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageProficiency::Basic => "Basic",
            LanguageProficiency::Intermediate => "Intermediate",
            LanguageProficiency::Fluent => "Fluent",
            LanguageProficiency::Native => "Native",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution_name: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Education {
    /// One-line description used in the tailored summary.
    pub fn headline(&self) -> String {
        format!(
            "{} in {} from {}",
            self.degree, self.field_of_study, self.institution_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    #[serde(default, with = "dates::optional")]
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: LanguageProficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// What the candidate is looking for. Not present in a CV, so extraction
/// always falls back to `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPreferences {
    pub job_title: String,
    pub location: String,
    pub employment_type: String,
    pub remote_work: bool,
    pub salary_expectation: String,
    pub other_conditions: Vec<String>,
}

impl Default for JobPreferences {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            location: String::new(),
            employment_type: "Full-time".to_string(),
            remote_work: true,
            salary_expectation: "Negotiable".to_string(),
            other_conditions: Vec::new(),
        }
    }
}

/// The full candidate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub technical_skills: Vec<Skill>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub job_preferences: JobPreferences,
}

impl Developer {
    /// Returns every problem that makes the profile unusable for tailoring.
    /// An empty list means the profile is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("name cannot be empty".to_string());
        }

        for (i, exp) in self.work_experiences.iter().enumerate() {
            let mission = &exp.mission;
            if mission.end_date < mission.start_date {
                problems.push(format!(
                    "mission {} ({} at {}) ends before it starts",
                    i + 1,
                    mission.job_title,
                    mission.company_name
                ));
            }
        }

        for (i, edu) in self.education.iter().enumerate() {
            if edu.end_date < edu.start_date {
                problems.push(format!(
                    "education {} ({}) ends before it starts",
                    i + 1,
                    edu.institution_name
                ));
            }
        }

        problems
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_skill_level_is_case_insensitive() {
        let level: SkillLevel = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(level, SkillLevel::Advanced);
    }

    #[test]
    fn test_beginner_maps_to_basic() {
        let level: SkillLevel = serde_json::from_str(r#""Beginner""#).unwrap();
        assert_eq!(level, SkillLevel::Basic);
        let proficiency: LanguageProficiency = serde_json::from_str(r#""beginner""#).unwrap();
        assert_eq!(proficiency, LanguageProficiency::Basic);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_intermediate() {
        let level: SkillLevel = serde_json::from_str(r#""Wizard""#).unwrap();
        assert_eq!(level, SkillLevel::Intermediate);
        let proficiency: LanguageProficiency = serde_json::from_str(r#""Working""#).unwrap();
        assert_eq!(proficiency, LanguageProficiency::Intermediate);
    }

    #[test]
    fn test_common_resume_wording_is_understood() {
        let level: SkillLevel = serde_json::from_str(r#""Proficient""#).unwrap();
        assert_eq!(level, SkillLevel::Advanced);
        let c1: LanguageProficiency = serde_json::from_str(r#""C1""#).unwrap();
        assert_eq!(c1, LanguageProficiency::Fluent);
        let conversational: LanguageProficiency =
            serde_json::from_str(r#""Conversational""#).unwrap();
        assert_eq!(conversational, LanguageProficiency::Intermediate);
    }

    #[test]
    fn test_levels_serialize_as_labels() {
        assert_eq!(serde_json::to_string(&SkillLevel::Expert).unwrap(), r#""Expert""#);
        assert_eq!(
            serde_json::to_string(&LanguageProficiency::Native).unwrap(),
            r#""Native""#
        );
        assert_eq!(SkillLevel::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn test_job_preferences_default() {
        let prefs = JobPreferences::default();
        assert_eq!(prefs.employment_type, "Full-time");
        assert!(prefs.remote_work);
        assert_eq!(prefs.salary_expectation, "Negotiable");
        assert!(prefs.other_conditions.is_empty());
    }

    #[test]
    fn test_developer_without_history_or_preferences_deserializes() {
        let json = r#"{
            "name": "Jane Roe",
            "contact_info": {"email": "jane@example.com", "phone": "555"},
            "technical_skills": [{"name": "Rust", "level": "Expert"}],
            "certifications": [{
                "name": "CKA",
                "issuing_organization": "CNCF",
                "issue_date": "2022-05-01",
                "expiration_date": ""
            }]
        }"#;
        let dev: Developer = serde_json::from_str(json).unwrap();
        assert!(dev.work_experiences.is_empty());
        assert_eq!(dev.job_preferences, JobPreferences::default());
        assert!(dev.certifications[0].expiration_date.is_none());
        assert_eq!(dev.contact_info.address, "");
    }

    #[test]
    fn test_education_headline() {
        let dev = developer();
        assert_eq!(
            dev.education[0].headline(),
            "Bachelor's in Computer Science from Tech University"
        );
    }

    #[test]
    fn test_valid_developer_has_no_problems() {
        assert!(developer().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_blank_name_and_reversed_dates() {
        let mut dev = developer();
        dev.name = "   ".to_string();
        dev.work_experiences[1].mission.end_date = date(2018, 1, 1);
        dev.education[0].end_date = date(2010, 1, 1);

        let problems = dev.validate();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("name"));
        assert!(problems[1].contains("Indie Games Studio"));
        assert!(problems[2].contains("Tech University"));
    }
}
