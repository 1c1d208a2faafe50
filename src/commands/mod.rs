//! Command routing module.
//!
//! Maps inbound events (slash commands and inline button presses) to
//! outbound replies. Pure and transport-free; delivery lives in
//! [`crate::telegram`].

mod handler;
mod types;

pub use handler::{
    CommandRouter, MENU_TITLE, PLAY_BUTTON_TEXT, PLAY_PROMPT, START_TEXT,
};
pub use types::{
    CALLBACK_PREFIX, CommandDescriptor, CommandRegistry, InboundEvent, Reply, ReplyAction,
};
