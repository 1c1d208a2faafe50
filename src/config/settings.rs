//! Application settings and Telegram configuration.

use url::Url;

use super::DEFAULT_LOTTERY_URL;

/// Telegram Bot API configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token (obtain from `@BotFather`).
    pub bot_token: String,
}

impl TelegramConfig {
    /// Creates configuration from environment variables.
    ///
    /// Expects `BOT_TOKEN` to be set. There is deliberately no compiled-in
    /// fallback token: without a credential the process must refuse to start.
    ///
    /// # Errors
    ///
    /// Returns an error if `BOT_TOKEN` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token =
            std::env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN"))?;

        if bot_token.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("BOT_TOKEN"));
        }

        Ok(Self { bot_token })
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSettings {
    /// Lottery page opened by the `/play` link button.
    pub lottery_url: Url,
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    ///
    /// `LOTTERY_URL` overrides the compiled-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("LOTTERY_URL").unwrap_or_else(|_| DEFAULT_LOTTERY_URL.to_owned());

        let lottery_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidLotteryUrl {
            value: raw,
            source,
        })?;

        Ok(Self { lottery_url })
    }
}

impl Default for BotSettings {
    // The compiled-in default is a valid URL.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            lottery_url: Url::parse(DEFAULT_LOTTERY_URL).unwrap(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid lottery URL '{value}': {source}")]
    InvalidLotteryUrl {
        value: String,
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.lottery_url.as_str(), "https://tinyurl.com/muwymx93");
    }

    #[test]
    fn test_invalid_lottery_url_error_display() {
        let err = Url::parse("not a url").unwrap_err();
        let err = ConfigError::InvalidLotteryUrl {
            value: "not a url".to_owned(),
            source: err,
        };
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let err = ConfigError::MissingEnvVar("BOT_TOKEN");
        assert!(err.to_string().contains("BOT_TOKEN"));
    }
}
