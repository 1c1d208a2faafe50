//! Update dispatcher wiring.
//!
//! Receives updates from the transport layer and feeds them to the command
//! router. The dispatcher handles overlapping updates concurrently; the
//! router is shared immutably, so no locking is involved.

use std::sync::Arc;

use anyhow::Result;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::filter_command;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message, Recipient};
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use super::client;
use crate::commands::{CommandRouter, InboundEvent};

pub type HandlerResult = Result<()>;

/// Slash commands recognized at the transport layer.
///
/// Names must match the command registry; descriptions are published from
/// the registry itself, not from this enum.
#[derive(BotCommands, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
enum Command {
    Start,
    Play,
    Menu,
}

impl Command {
    const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Play => "play",
            Self::Menu => "menu",
        }
    }
}

/// Runs the update dispatcher until shutdown (Ctrl-C).
pub async fn run(bot: Bot, router: CommandRouter) -> Result<()> {
    let router = Arc::new(router);

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .branch(filter_command::<Command, _>().endpoint(handle_command)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!("Bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .default_handler(|_| async move {})
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<CommandRouter>,
) -> HandlerResult {
    let Some(user) = msg.from.as_ref() else {
        warn!("Received {} command without sender, ignoring", cmd.name());
        return Ok(());
    };

    let event = InboundEvent::SlashCommand {
        name: cmd.name().to_owned(),
        requester_id: user.id.0,
    };

    if let Some(reply) = router.handle_event(event) {
        client::deliver_reply(&bot, Recipient::from(msg.chat.id), &reply).await;
    }

    Ok(())
}

/// Handles inline button presses.
///
/// Every callback query is acknowledged exactly once, up front, regardless
/// of whether a reply body follows; Telegram keeps the button in a pending
/// state until the acknowledgement arrives.
async fn handle_callback(
    bot: Bot,
    query: CallbackQuery,
    router: Arc<CommandRouter>,
) -> HandlerResult {
    if let Err(err) = bot.answer_callback_query(query.id.clone()).await {
        warn!("Failed to acknowledge button press: {err}");
    }

    let Some(payload) = query.data.as_deref() else {
        debug!("Received callback query without data");
        return Ok(());
    };

    let event = InboundEvent::ButtonPress {
        payload: payload.to_owned(),
        requester_id: query.from.id.0,
    };

    if let Some(reply) = router.handle_event(event) {
        // Reply into the originating chat when the message is still
        // accessible, otherwise directly to the pressing user.
        let to: Recipient = match query.message.as_ref() {
            Some(message) => message.chat().id.into(),
            None => query.from.id.into(),
        };
        client::deliver_reply(&bot, to, &reply).await;
    }

    Ok(())
}
