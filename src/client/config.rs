use thiserror::Error;

use crate::client::{
    constant::{CHAT_MODEL, CHAT_URL, SITE_NAME},
    session::cookie::DEFAULT_MAX_AGE,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    ///
    /// # Fields
    /// - Name of the environment variable
    /// - The rejected value
    #[error("Invalid value for {0}: {1:?}")]
    InvalidNumber(String, String),
}

/// Settings baked into the bundle at build time.
///
/// The browser has no process environment, so values are read from the build
/// environment with `option_env!` and fall back to defaults when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub site_name: String,
    /// Prefix prepended to every API path, empty for same-origin requests.
    pub api_base: String,
    /// Lifetime of the session cookies in seconds.
    pub session_max_age: u64,
    /// OpenAI-compatible chat completions endpoint used by the assistant panel.
    pub chat_url: String,
    pub chat_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: SITE_NAME.to_string(),
            api_base: String::new(),
            session_max_age: DEFAULT_MAX_AGE,
            chat_url: CHAT_URL.to_string(),
            chat_model: CHAT_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(&EnvValues {
            site_name: option_env!("ADMIN_SITE_NAME"),
            api_base: option_env!("ADMIN_API_BASE"),
            session_max_age: option_env!("ADMIN_SESSION_MAX_AGE"),
            chat_url: option_env!("ADMIN_CHAT_URL"),
            chat_model: option_env!("ADMIN_CHAT_MODEL"),
        })
    }

    pub fn from_values(values: &EnvValues) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let session_max_age = match values.session_max_age {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidNumber("ADMIN_SESSION_MAX_AGE".to_string(), value.to_string())
            })?,
            None => defaults.session_max_age,
        };

        Ok(Self {
            site_name: non_blank(values.site_name).unwrap_or(defaults.site_name),
            api_base: values
                .api_base
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            session_max_age,
            chat_url: non_blank(values.chat_url).unwrap_or(defaults.chat_url),
            chat_model: non_blank(values.chat_model).unwrap_or(defaults.chat_model),
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Raw build-time values, `None` when the variable is unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvValues<'a> {
    pub site_name: Option<&'a str>,
    pub api_base: Option<&'a str>,
    pub session_max_age: Option<&'a str>,
    pub chat_url: Option<&'a str>,
    pub chat_model: Option<&'a str>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that unset variables fall back to defaults.
    ///
    /// Expected: Ok(AppConfig::default())
    #[test]
    fn defaults_when_unset() -> Result<(), ConfigError> {
        let config = AppConfig::from_values(&EnvValues::default())?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url("/api/auth/login"), "/api/auth/login");

        Ok(())
    }

    /// Tests explicit values, including a trailing slash on the API base and a
    /// blank model name.
    ///
    /// Expected: values applied, slash trimmed, blank model defaulted
    #[test]
    fn applies_values() -> Result<(), ConfigError> {
        let config = AppConfig::from_values(&EnvValues {
            site_name: Some("Console"),
            api_base: Some("https://api.example.com/"),
            session_max_age: Some(" 3600 "),
            chat_url: Some("https://llm.example.com/v1/chat/completions"),
            chat_model: Some("  "),
        })?;

        assert_eq!(config.site_name, "Console");
        assert_eq!(
            config.api_url("/api/auth/login"),
            "https://api.example.com/api/auth/login"
        );
        assert_eq!(config.session_max_age, 3600);
        assert_eq!(config.chat_url, "https://llm.example.com/v1/chat/completions");
        assert_eq!(config.chat_model, CHAT_MODEL);

        Ok(())
    }

    /// Tests a malformed max age.
    ///
    /// Expected: Err(ConfigError::InvalidNumber)
    #[test]
    fn rejects_malformed_max_age() {
        let result = AppConfig::from_values(&EnvValues {
            session_max_age: Some("a week"),
            ..EnvValues::default()
        });

        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber(
                "ADMIN_SESSION_MAX_AGE".to_string(),
                "a week".to_string()
            ))
        );
    }
}
