//! Application configuration loaded from environment variables.

use std::env;

use crate::models::StreakType;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Tier used by the streak endpoint when the request names none
    pub default_streak_type: StreakType,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            default_streak_type: StreakType::WeeklyAny,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let default_streak_type = match env::var("DEFAULT_STREAK_TYPE") {
            Ok(value) => value
                .trim()
                .parse::<StreakType>()
                .map_err(|_| ConfigError::Invalid("DEFAULT_STREAK_TYPE", value))?,
            Err(_) => StreakType::WeeklyAny,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            default_streak_type,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases live in one test since they share process-wide env vars.
    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "9090");
        env::set_var("DEFAULT_STREAK_TYPE", "WEEKLY_4");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert_eq!(config.default_streak_type, StreakType::Weekly4);

        env::set_var("DEFAULT_STREAK_TYPE", "WEEKLY_9");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("DEFAULT_STREAK_TYPE", _)));

        env::remove_var("PORT");
        env::remove_var("DEFAULT_STREAK_TYPE");
    }
}
