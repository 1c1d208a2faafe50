//! Telegram transport module.
//!
//! Integrates the command router with the Bot API: command-menu
//! publication, update dispatching, button-press acknowledgement and
//! best-effort reply delivery.

mod client;
mod dispatch;

pub use client::{FALLBACK_TEXT, TelegramError, bot_commands, deliver_reply, publish_commands, reply_markup};
pub use dispatch::{HandlerResult, run};
