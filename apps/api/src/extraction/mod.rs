// Extraction: raw resume / job posting text → structured records.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod developer;
pub mod handlers;
pub mod job_offer;
pub mod pdf;
pub mod prompts;

use crate::errors::AppError;

/// Extraction is transcription, not writing.
pub const EXTRACTION_TEMPERATURE: f32 = 0.0;

/// Rejects blank input before spending an LLM call on it.
pub(crate) fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(())
}
