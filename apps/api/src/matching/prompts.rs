// All LLM prompt constants for the Matching module.

/// Role for per-project relevance decisions.
pub const PROJECT_MATCH_ROLE: &str = "You are an expert AI recruiter analyzing the relevance \
    of a developer's project for a specific job position. Analyze the project details and job \
    requirements carefully and provide a structured evaluation of the match. \
    If at least one of the project's technologies is in the job requirements, the project is relevant. \
    Focus on: 1. Technical skills match 2. Demonstrated experience 3. Project complexity and scale.";

/// Project match prompt template. Replace `{project_json}` and `{requirements_json}`.
pub const PROJECT_MATCH_PROMPT_TEMPLATE: &str = r#"Project Details:
{project_json}

Job Requirements:
{requirements_json}

Evaluate the match between this project and the job requirements.

Return a JSON object with this EXACT schema:
{
  "is_match": true,
  "matching_reason": "Short explanation of why the project matches or does not match the job requirements"
}"#;

/// Role for whole-background relevance.
pub const BACKGROUND_MATCH_ROLE: &str = "You are an expert AI recruiter analyzing a developer's \
    background for a specific job position. Analyze their skills, education, and experience \
    against the job requirements and identify the most relevant elements. \
    Focus on: 1. Skills that directly match or are transferable \
    2. Education that meets or exceeds requirements.";

/// Background match prompt template. Replace `{background_json}` and `{requirements_json}`.
pub const BACKGROUND_MATCH_PROMPT_TEMPLATE: &str = r#"Developer Background:
{background_json}

Job Requirements:
{requirements_json}

Evaluate which elements of the developer's background are most relevant for this position.

Return a JSON object with this EXACT schema:
{
  "relevant_skills": ["Python"],
  "relevant_education_ids": [0],
  "match_explanation": "Explanation of how the background matches the job requirements"
}

HARD RULES:
1. Every entry of "relevant_skills" MUST be copied exactly from a skill "name" in the background
2. Every entry of "relevant_education_ids" MUST be an "id" from the background education list"#;
