//! PDF text extraction, delegated to `pdf-extract`.

use tracing::debug;

use crate::errors::AppError;

/// Pulls the text layer out of an uploaded PDF.
///
/// Parsing is CPU-bound, so it runs on the blocking pool.
pub async fn extract_pdf_text(data: Vec<u8>) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                AppError::UnprocessableEntity("Could not read PDF".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }

    debug!("Extracted {} chars from {} byte PDF", text.len(), size);
    Ok(text)
}
