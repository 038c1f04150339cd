use std::fmt;
use std::time::Duration;

use crate::headlines::generation::DEFAULT_MODEL;

const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "environment variable {name} is not set"),
            Self::Invalid(name) => write!(f, "environment variable {name} has an invalid value"),
        }
    }
}

pub struct TelegramConfig {
    pub token: String,
    pub api_id: i32,
    pub api_hash: String,
    pub db_encryption_key: String,
}

pub struct Config {
    pub telegram: TelegramConfig,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub unlock_code: Option<String>,
    pub subscribe_url: Option<String>,
    pub session_idle_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ConfigError> {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        let session_idle_timeout = match optional("SESSION_IDLE_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("SESSION_IDLE_TIMEOUT_SECS"))?,
            ),
            None => DEFAULT_SESSION_IDLE_TIMEOUT,
        };

        Ok(Self {
            telegram: TelegramConfig {
                token: required("TELEGRAM_TOKEN")?,
                api_id: required("API_ID")?
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("API_ID"))?,
                api_hash: required("API_HASH")?,
                db_encryption_key: lookup("DB_ENCRYPTION_KEY").unwrap_or_default(),
            },
            gemini_api_key: optional("GEMINI_API_KEY"),
            gemini_model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            // command arguments arrive trimmed, a padded code could never match
            unlock_code: optional("UNLOCK_CODE").map(|code| code.trim().to_owned()),
            subscribe_url: optional("SUBSCRIBE_URL"),
            session_idle_timeout,
            user_agent: optional("USER_AGENT"),
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    const TELEGRAM: [(&str, &str); 3] =
        [("TELEGRAM_TOKEN", "123:abc"), ("API_ID", "42"), ("API_HASH", "hash")];

    #[test]
    fn test_defaults() {
        let config = config(&TELEGRAM).unwrap();

        assert_eq!(config.telegram.api_id, 42);
        assert_eq!(config.telegram.db_encryption_key, "");
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.unlock_code, None);
        assert_eq!(config.subscribe_url, None);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(86400));
    }

    #[test]
    fn test_overrides() {
        let mut vars = TELEGRAM.to_vec();
        vars.extend([
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("UNLOCK_CODE", " spaced "),
            ("SUBSCRIBE_URL", "https://example.com/subscribe"),
            ("SESSION_IDLE_TIMEOUT_SECS", "600"),
        ]);
        let config = config(&vars).unwrap();

        assert_eq!(config.gemini_api_key.as_deref(), Some("key"));
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.unlock_code.as_deref(), Some("spaced"));
        assert_eq!(config.subscribe_url.as_deref(), Some("https://example.com/subscribe"));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(600));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let mut vars = TELEGRAM.to_vec();
        vars.extend([("GEMINI_API_KEY", "  "), ("UNLOCK_CODE", " \t ")]);
        let config = config(&vars).unwrap();

        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.unlock_code, None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(config(&[]).err(), Some(ConfigError::Missing("TELEGRAM_TOKEN")));

        let mut vars = TELEGRAM.to_vec();
        vars[1] = ("API_ID", "forty-two");
        assert_eq!(config(&vars).err(), Some(ConfigError::Invalid("API_ID")));

        let mut vars = TELEGRAM.to_vec();
        vars.push(("SESSION_IDLE_TIMEOUT_SECS", "-1"));
        assert_eq!(config(&vars).err(), Some(ConfigError::Invalid("SESSION_IDLE_TIMEOUT_SECS")));
    }
}
