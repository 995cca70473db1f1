// Matching: how a developer's background lines up against a job's requirements.
// LLM-backed decisions live in project/background, pure filters in filters.

pub mod background;
pub mod filters;
pub mod project;
pub mod prompts;
