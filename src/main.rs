//! Lottery Bot - Main Entry Point
//!
//! A Telegram bot that replies to `/start`, `/play` and `/menu` and to the
//! inline command-menu buttons.

use anyhow::{Context, Result};
use clap::Parser;
use teloxide::Bot;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use lottery_bot::commands::{CommandRegistry, CommandRouter};
use lottery_bot::config::{BotSettings, TelegramConfig};
use lottery_bot::telegram;

/// Telegram bot serving a lottery link and an inline command menu.
#[derive(Parser, Debug)]
#[command(name = "lottery_bot")]
#[command(about = "Reply to lottery bot commands and menu buttons")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Load configuration; refuse to start without a credential.
    let tg_config = match TelegramConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Bot token not found! Please set the BOT_TOKEN environment variable.");
            return Err(e).context("Failed to load Telegram configuration from environment");
        }
    };

    let settings = BotSettings::from_env().context("Failed to load bot settings")?;
    info!("Lottery URL: {}", settings.lottery_url);

    let registry = CommandRegistry::standard();
    let router = CommandRouter::new(registry.clone(), settings.lottery_url);

    let bot = Bot::new(&tg_config.bot_token);

    // Best-effort: the bot remains functional without a fresh menu listing.
    if let Err(e) = telegram::publish_commands(&bot, &registry).await {
        warn!("Continuing without command menu: {e}");
    }

    info!("Starting lottery bot...");
    telegram::run(bot, router).await
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
