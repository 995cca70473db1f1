// Prompt constants for markdown resume writing.

/// Role for the resume writer. The writer returns markdown, not JSON.
pub const RESUME_WRITER_SYSTEM: &str = "You are a professional resume writer. Create a polished \
    markdown resume based on the provided information. Use a clean, modern format with clear sections.

Focus on:
1. Strong professional summary
2. Relevant skills and experience
3. Quantifiable achievements
4. Clear, concise descriptions so that the resume fits on a single page

Structure the work experience section as a single paragraph per mission, with its projects \
integrated naturally into the mission description. For each project, start with the impact, \
then how the impact was achieved, then the technologies used.
Use markdown formatting to create a professional layout.
Integrate **keywords** and phrases from the job description naturally so the resume passes \
Applicant Tracking Systems.";

/// Resume writer prompt template. Replace `{resume_json}`.
pub const RESUME_WRITER_PROMPT_TEMPLATE: &str = r#"Resume Information:
{resume_json}

Create a professional markdown resume tailored for this job application.
Return only the markdown content. Do NOT wrap it in a code fence and do NOT add any other text or comments."#;
