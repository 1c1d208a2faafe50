//! Telegram delivery primitives: command publication and best-effort replies.

use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::{
    BotCommand, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, Recipient,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::commands::{CommandRegistry, Reply, ReplyAction};

/// Generic apology sent when delivering the real reply fails.
pub const FALLBACK_TEXT: &str = "Sorry, an error occurred. Please try again later.";

/// Errors that can occur during Telegram operations.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Failed to publish command menu: {0}")]
    CommandPublish(#[source] RequestError),
}

/// Publishes the command registry to Telegram's command-menu facility.
///
/// Clears any previously registered list first, then sets the current one;
/// skipping the reset leaves stale entries in platform UI caches. A failed
/// reset is only noted, since there may be nothing to clear.
///
/// # Errors
///
/// Returns an error if setting the command list fails. Callers downgrade
/// this to a warning: the bot remains functional without a fresh menu
/// listing.
pub async fn publish_commands(bot: &Bot, registry: &CommandRegistry) -> Result<(), TelegramError> {
    if let Err(err) = bot.delete_my_commands().await {
        debug!("Could not delete old commands (okay if none exist): {err}");
    }

    bot.set_my_commands(bot_commands(registry))
        .await
        .map_err(TelegramError::CommandPublish)?;

    info!("Command menu published ({} commands)", registry.len());
    Ok(())
}

/// Converts the registry to the Bot API command-list representation.
#[must_use]
pub fn bot_commands(registry: &CommandRegistry) -> Vec<BotCommand> {
    registry
        .iter()
        .map(|descriptor| BotCommand::new(descriptor.name, descriptor.description))
        .collect()
}

/// Converts a reply's actions to an inline keyboard, one button per row.
#[must_use]
pub fn reply_markup(reply: &Reply) -> Option<InlineKeyboardMarkup> {
    if reply.actions.is_empty() {
        return None;
    }

    let rows = reply.actions.iter().map(|action| {
        vec![match action {
            ReplyAction::Link { label, url } => {
                InlineKeyboardButton::url(label.clone(), url.clone())
            }
            ReplyAction::Callback { label, payload } => {
                InlineKeyboardButton::callback(label.clone(), payload.clone())
            }
        }]
    });

    Some(InlineKeyboardMarkup::new(rows))
}

/// Delivers a reply, falling back to one generic apology on failure.
///
/// Delivery is best-effort: primary send, then at most one fallback send,
/// then logging only. Failures never propagate to the caller.
pub async fn deliver_reply(bot: &Bot, to: Recipient, reply: &Reply) {
    if let Err(err) = send_reply(bot, to.clone(), reply).await {
        warn!("Failed to deliver reply: {err}");

        if let Err(err) = bot.send_message(to, FALLBACK_TEXT).await {
            error!("Failed to deliver fallback reply: {err}");
        }
    }
}

async fn send_reply(bot: &Bot, to: Recipient, reply: &Reply) -> Result<(), RequestError> {
    let mut request = bot.send_message(to, reply.text.clone());

    if reply.html {
        request = request.parse_mode(ParseMode::Html);
    }

    if let Some(markup) = reply_markup(reply) {
        request = request.reply_markup(markup);
    }

    request.await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::commands::CommandRouter;

    #[test]
    fn test_bot_commands_preserve_registry() {
        let registry = CommandRegistry::standard();
        let commands = bot_commands(&registry);

        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].command, "start");
        assert_eq!(commands[0].description, "Start the bot");
        assert_eq!(commands[1].command, "play");
        assert_eq!(commands[1].description, "Open Lottery");
        assert_eq!(commands[2].command, "menu");
        assert_eq!(commands[2].description, "Show command menu");
    }

    #[test]
    fn test_reply_markup_none_without_actions() {
        let reply = Reply::text("plain");
        assert!(reply_markup(&reply).is_none());
    }

    #[test]
    fn test_reply_markup_one_button_per_row() {
        let router = CommandRouter::new(
            CommandRegistry::standard(),
            Url::parse("https://tinyurl.com/muwymx93").unwrap(),
        );
        let reply = router.handle_menu(1);

        let markup = reply_markup(&reply).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 3);
        for row in &markup.inline_keyboard {
            assert_eq!(row.len(), 1);
        }
    }

    #[test]
    fn test_reply_markup_link_button() {
        let url = Url::parse("https://tinyurl.com/muwymx93").unwrap();
        let reply = Reply::text("play").with_link("Play lottery", url);

        let markup = reply_markup(&reply).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 1);
        assert_eq!(markup.inline_keyboard[0][0].text, "Play lottery");
    }
}
