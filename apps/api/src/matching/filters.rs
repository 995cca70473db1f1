//! Deterministic filters applied after the LLM matchers. No I/O.

use crate::models::experience::WorkExperience;
use crate::models::job_offer::JobOffer;
use crate::models::profile::{Achievement, Certification, Education, Language, Skill};

/// Skills named in the summary.
const SUMMARY_SKILL_COUNT: usize = 3;

/// Certifications whose name appears verbatim in `required`, in candidate order.
pub fn relevant_certifications(
    certifications: &[Certification],
    required: &[String],
) -> Vec<Certification> {
    certifications
        .iter()
        .filter(|c| required.contains(&c.name))
        .cloned()
        .collect()
}

/// Languages whose name appears verbatim in `required`, in candidate order.
pub fn relevant_languages(languages: &[Language], required: &[String]) -> Vec<Language> {
    languages
        .iter()
        .filter(|l| required.contains(&l.name))
        .cloned()
        .collect()
}

/// Achievements mentioning any required skill, case-insensitively, in
/// either the title or the description. Skill names are used as given;
/// blank ones are skipped.
pub fn relevant_achievements(
    achievements: &[Achievement],
    hard_skills: &[String],
    soft_skills: &[String],
) -> Vec<Achievement> {
    let needles: Vec<String> = hard_skills
        .iter()
        .chain(soft_skills)
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_lowercase())
        .collect();

    achievements
        .iter()
        .filter(|a| {
            let haystack = format!("{} {}", a.title, a.description).to_lowercase();
            needles.iter().any(|n| haystack.contains(n.as_str()))
        })
        .cloned()
        .collect()
}

/// Sum of calendar-year spans across all missions. Overlaps count twice.
pub fn total_years_experience(work: &[WorkExperience]) -> i32 {
    use chrono::Datelike;

    work.iter()
        .map(|w| w.mission.end_date.year() - w.mission.start_date.year())
        .sum()
}

pub fn professional_summary(
    relevant_skills: &[Skill],
    relevant_education: &[Education],
    years: i32,
    job_offer: &JobOffer,
) -> String {
    let mut parts = Vec::with_capacity(4);

    if !relevant_skills.is_empty() {
        let names: Vec<&str> = relevant_skills
            .iter()
            .take(SUMMARY_SKILL_COUNT)
            .map(|s| s.name.as_str())
            .collect();
        parts.push(format!("Experienced in {}", names.join(", ")));
    }

    if let Some(edu) = relevant_education.first() {
        parts.push(format!("with {}", edu.headline()));
    }

    parts.push(format!("and {years}+ years of relevant experience"));
    parts.push(format!(
        "seeking {} position at {}",
        job_offer.job_title, job_offer.company_name
    ));

    parts.join(" ")
}
