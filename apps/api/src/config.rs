use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_CHAT_RATE_LIMIT: u32 = 60;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a missing `GEMINI_API_KEY` switches the AI-backed
/// endpoints into their offline modes.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub chat_rate_limit_per_minute: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origins: optional_env("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            chat_rate_limit_per_minute: parse_or(
                "CHAT_RATE_LIMIT_PER_MINUTE",
                DEFAULT_CHAT_RATE_LIMIT,
            )?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when a usable model API key is configured.
    pub fn ai_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            port: 5000,
            cors_origins: Vec::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            chat_rate_limit_per_minute: DEFAULT_CHAT_RATE_LIMIT,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads a variable, treating unset and blank values the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
