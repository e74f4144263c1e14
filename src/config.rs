use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL {0:?}: {1}")]
    InvalidBaseUrl(String, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_values(
            env::var("COUNTRYINFO_BASE_URL").ok().as_deref(),
            env::var("LOG_LEVEL").ok().as_deref(),
        )
    }

    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url.unwrap_or(DEFAULT_BASE_URL))?,
            log_level: log_level
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidBaseUrl(raw.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(
            raw.to_string(),
            "URL cannot be a base".to_string(),
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_values(None, Some("  ")).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(Config::from_values(Some("not a url"), None).is_err());
        assert!(Config::from_values(Some("mailto:someone@example.com"), None).is_err());
    }

    #[test]
    fn base_url_override_replaces_env_value() {
        let config = Config::from_values(Some("http://a.example"), None)
            .unwrap()
            .with_base_url("http://b.example:9000/root/")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://b.example:9000/root/");
    }
}
