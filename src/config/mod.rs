//! Configuration module for the lottery bot.
//!
//! Handles environment-based configuration: the Telegram bot token and the
//! lottery URL. Configuration fails closed; no credential ships in the
//! binary.

mod settings;

pub use settings::{BotSettings, ConfigError, TelegramConfig};

/// Default lottery page, overridable via `LOTTERY_URL`.
pub const DEFAULT_LOTTERY_URL: &str = "https://tinyurl.com/muwymx93";
