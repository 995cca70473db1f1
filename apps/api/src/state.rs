use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// `LlmClient` in production; swapped for a scripted model in router tests.
    pub llm: Arc<dyn LanguageModel>,
    pub config: Config,
}
