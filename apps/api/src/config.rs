use std::str::FromStr;

use anyhow::{Context, Result};

use crate::analysis::analyzer::{
    AnalyzerSettings, DEFAULT_FALLBACK_WINDOW, DEFAULT_HEADER_MAX_CHARS, DEFAULT_MAX_QUESTIONS,
    DEFAULT_MAX_UPLOAD_BYTES,
};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Empty means permissive CORS.
    pub allowed_origins: Vec<String>,
    pub analyzer: AnalyzerSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),
            analyzer: AnalyzerSettings {
                max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
                header_max_chars: parse_or(&lookup, "HEADER_MAX_CHARS", DEFAULT_HEADER_MAX_CHARS)?,
                fallback_window: parse_or(&lookup, "FALLBACK_WINDOW_LINES", DEFAULT_FALLBACK_WINDOW)?,
                max_questions: parse_or(&lookup, "MAX_QUESTIONS", DEFAULT_MAX_QUESTIONS)?,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number (got '{raw}')")),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
