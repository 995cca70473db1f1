// All LLM prompt constants for the Extraction module.

/// Role for resume profile parsing.
pub const DEVELOPER_PARSE_ROLE: &str = "You are an expert resume parser. \
    Extract the developer information from the resume text you are given.";

/// Developer parsing prompt template. Replace `{date_instruction}` and `{text}` before sending.
pub const DEVELOPER_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the developer profile from the resume below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Full name of the developer",
  "contact_info": {
    "email": "Email address",
    "phone": "Phone number",
    "address": "Physical address"
  },
  "linkedin_url": "LinkedIn profile URL",
  "github_url": "GitHub profile URL",
  "website_url": "Personal website URL or empty string",
  "professional_summary": "Professional summary",
  "technical_skills": [
    {"name": "Python", "level": "Advanced"}
  ],
  "soft_skills": ["Team Leadership"],
  "education": [
    {
      "institution_name": "Stanford University",
      "degree": "Master of Science",
      "field_of_study": "Computer Science",
      "start_date": "2018-09-01",
      "end_date": "2020-06-15"
    }
  ],
  "certifications": [
    {
      "name": "AWS Certified Solutions Architect",
      "issuing_organization": "Amazon Web Services",
      "issue_date": "2021-03-15",
      "expiration_date": "2024-03-15"
    }
  ],
  "languages": [
    {"name": "English", "proficiency": "Native"}
  ],
  "achievements": [
    {"title": "Best Innovation Award 2022", "description": "Led team to develop an AI-powered code review system"}
  ],
  "hobbies": ["Mountain biking"]
}

Rules:
- Skill "level" is exactly one of: "Basic", "Intermediate", "Advanced", "Expert".
- Language "proficiency" is exactly one of: "Basic", "Intermediate", "Fluent", "Native".
- {date_instruction}
- Use an empty string for text fields the resume does not mention and an empty list for missing sections.
- Do NOT extract work history here.

Resume text:
{text}"#;

/// Role for STAR work-history parsing.
pub const WORK_EXPERIENCE_PARSE_ROLE: &str = "You are an expert at analyzing work experience \
    in STAR format (Situation, Task, Action, Result).";

/// Work-history parsing prompt template. Replace `{date_instruction}` and `{text}` before sending.
pub const WORK_EXPERIENCE_PARSE_PROMPT_TEMPLATE: &str = r#"Extract detailed work experience information from the text below, describing each project with the STAR method.

Return a JSON object with this EXACT schema (no extra fields):
{
  "work_experiences": [
    {
      "mission": {
        "job_title": "Senior Software Engineer",
        "company_name": "TechCorp Solutions",
        "start_date": "2021-01-15",
        "end_date": "2023-12-31",
        "overall_summary": "High-level summary of the role"
      },
      "projects": [
        {
          "project_name": "Cloud Migration Initiative",
          "description": {
            "situation": "Context or background of the project",
            "task": "Specific responsibility or challenge",
            "action": "Steps taken to address the task",
            "result": "Measurable outcomes and impacts"
          },
          "technologies": ["AWS", "Docker", "Kubernetes"],
          "achievements": ["Reduced system latency by 40%"]
        }
      ]
    }
  ]
}

For each project:
- Break down the description into STAR components
- List the specific technologies used
- Include measurable achievements

For each mission:
- Extract precise dates. {date_instruction} A role that is still ongoing ends today: {today}
- Create a concise overall summary
- Identify the exact job title and company name

Work experience text:
{text}"#;

/// Role for job posting parsing.
pub const JOB_OFFER_PARSE_ROLE: &str = "You are an expert job offer parser. \
    Extract the job offer information from the posting you are given.";

/// Job offer parsing prompt template. Replace `{date_instruction}` and `{text}` before sending.
pub const JOB_OFFER_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the job offer from the posting below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_title": "Title of the job, e.g. Software Engineer",
  "company_name": "Name of the hiring company",
  "location": "Job location, e.g. city, remote, hybrid",
  "employment_type": "Full-time, Part-time, Contract or Freelance",
  "description": "Full job description text",
  "requirements": {
    "hard_skills": ["Python", "React"],
    "soft_skills": ["Communication"],
    "education_level": "Bachelor's",
    "certifications": ["AWS Certified Developer"],
    "experience": {
      "years_of_experience": 5,
      "relevant_experiences": ["Experience with large-scale web applications"]
    },
    "languages": ["English"],
    "other_conditions": ["Availability to travel"]
  },
  "perks": ["Health insurance"],
  "application_deadline": "2024-12-31"
}

Rules:
- "years_of_experience" is the minimum number of years as an integer; use 0 when not stated.
- List every required or preferred technical skill separately in "hard_skills".
- {date_instruction}

Job offer text:
{text}"#;
