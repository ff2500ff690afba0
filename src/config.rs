use std::env;

use crate::error::{GourmetError, Result};
use crate::generator::{GeminiGenerator, gemini};

const DATABASE_URL_ENV: &str = "GOURMET_DATABASE_URL";
const API_BASE_URL_ENV: &str = "GOURMET_API_BASE_URL";
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
const GEMINI_API_BASE_URL_ENV: &str = "GEMINI_API_BASE_URL";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://gourmet.db";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3002/";

/// Runtime settings, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            gemini_api_key: None,
            gemini_model: gemini::DEFAULT_MODEL.to_string(),
            gemini_api_base_url: gemini::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            database_url: get(DATABASE_URL_ENV).unwrap_or(defaults.database_url),
            api_base_url: get(API_BASE_URL_ENV).unwrap_or(defaults.api_base_url),
            gemini_api_key: get(GEMINI_API_KEY_ENV),
            gemini_model: get(GEMINI_MODEL_ENV).unwrap_or(defaults.gemini_model),
            gemini_api_base_url: get(GEMINI_API_BASE_URL_ENV)
                .unwrap_or(defaults.gemini_api_base_url),
        }
    }

    /// Build the Gemini generator; requires `GEMINI_API_KEY`
    pub fn gemini_generator(&self) -> Result<GeminiGenerator> {
        let api_key = self.gemini_api_key.as_deref().ok_or_else(|| {
            GourmetError::Config(format!("{} environment variable not set", GEMINI_API_KEY_ENV))
        })?;

        Ok(GeminiGenerator::new(api_key)
            .with_model(&self.gemini_model)
            .with_base_url(&self.gemini_api_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ContentGenerator;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.database_url, "sqlite://gourmet.db");
        assert_eq!(config.api_base_url, "http://localhost:3002/");
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn test_config_overrides_and_blank_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("GOURMET_DATABASE_URL", "sqlite::memory:"),
            ("GEMINI_API_KEY", "key-123"),
            ("GEMINI_MODEL", "  "),
        ]));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.gemini_api_key, Some("key-123".to_string()));
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
    }

    #[test]
    fn test_gemini_generator_requires_key() {
        let config = Config::default();

        assert!(matches!(
            config.gemini_generator(),
            Err(GourmetError::Config(_))
        ));
    }

    #[test]
    fn test_gemini_generator_uses_configured_model() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "key-123"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
        ]));

        let generator = config.gemini_generator().expect("Expected a generator");

        assert_eq!(generator.model_name(), "gemini-2.0-flash");
    }
}
