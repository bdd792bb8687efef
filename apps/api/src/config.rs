use anyhow::{Context, Result};

use crate::render::i18n::Language;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Template used when a render request names an unknown template.
    pub default_template: String,
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_template: lookup("DEFAULT_TEMPLATE")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| crate::templates::registry::DEFAULT_TEMPLATE_ID.to_string()),
            default_language: match lookup("DEFAULT_LANGUAGE") {
                Some(code) => Language::from_code(&code)
                    .with_context(|| format!("DEFAULT_LANGUAGE '{code}' is not supported"))?,
                None => Language::En,
            },
        })
    }
}
