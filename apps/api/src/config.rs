use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Temperature for project and background matching.
    pub match_temperature: f32,
    /// Temperature for the markdown resume writer.
    pub writing_temperature: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_temperature: temperature_env("MATCH_TEMPERATURE", 0.0)?,
            writing_temperature: temperature_env("WRITING_TEMPERATURE", 0.7)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn temperature_env(key: &str, default: f32) -> Result<f32> {
    match std::env::var(key) {
        Ok(raw) => parse_temperature(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_temperature(key: &str, raw: &str) -> Result<f32> {
    let value = raw
        .trim()
        .parse::<f32>()
        .with_context(|| format!("{key} must be a number"))?;
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("{key} must be between 0.0 and 1.0, got {value}");
    }
    Ok(value)
}
