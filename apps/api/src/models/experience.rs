use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::dates::month_year;

/// Situation / Task / Action / Result breakdown of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDescription {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

/// A bounded deliverable inside a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_name: String,
    pub description: StarDescription,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// A single employment engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub job_title: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub overall_summary: String,
}

impl Mission {
    /// "Jan 2020 - Jan 2023"
    pub fn duration_label(&self) -> String {
        format!(
            "{} - {}",
            month_year(self.start_date),
            month_year(self.end_date)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub mission: Mission,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_experience_deserializes_from_extractor_shape() {
        let json = r#"{
            "mission": {
                "job_title": "Senior Software Engineer",
                "company_name": "TechCorp Solutions",
                "start_date": "2021-01-15",
                "end_date": "2023-12-31",
                "overall_summary": "Led platform work"
            },
            "projects": [{
                "project_name": "Cloud Migration Initiative",
                "description": {
                    "situation": "Legacy monolith",
                    "task": "Lead the migration",
                    "action": "Containerized with Docker",
                    "result": "40% faster"
                },
                "technologies": ["AWS", "Docker"],
                "achievements": ["99.99% uptime"]
            }]
        }"#;
        let exp: WorkExperience = serde_json::from_str(json).unwrap();
        assert_eq!(
            exp.mission.start_date,
            NaiveDate::from_ymd_opt(2021, 1, 15).unwrap()
        );
        assert_eq!(exp.projects[0].technologies, vec!["AWS", "Docker"]);
        assert_eq!(exp.projects[0].description.result, "40% faster");
    }

    #[test]
    fn test_duration_label() {
        let mission = Mission {
            job_title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            overall_summary: String::new(),
        };
        assert_eq!(mission.duration_label(), "Jan 2020 - Jun 2023");
    }
}
