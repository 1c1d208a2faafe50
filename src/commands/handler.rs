//! Command router implementation.

use tracing::{debug, info};
use url::Url;

use super::types::{CALLBACK_PREFIX, CommandRegistry, InboundEvent, Reply};

/// Acknowledgement text for `/start`.
pub const START_TEXT: &str =
    "Bot started. Use /play to open Lottery or /menu to see available commands.";

/// Prompt text for `/play`.
pub const PLAY_PROMPT: &str = "Click the button below to play lottery:";

/// Label of the lottery link button.
pub const PLAY_BUTTON_TEXT: &str = "Play lottery";

/// Title of the `/menu` reply.
pub const MENU_TITLE: &str = "📋 Command Menu";

/// Decorative marker prepended to menu button labels.
const MENU_MARKER: &str = "▶";

/// Maps each inbound event to at most one reply.
///
/// The router is pure and stateless beyond its immutable configuration:
/// every event carries everything needed to build its reply, so overlapping
/// events need no coordination.
pub struct CommandRouter {
    /// Canonical command registry, shared with the command-menu publication.
    registry: CommandRegistry,

    /// Lottery page opened by the `/play` link button.
    lottery_url: Url,
}

impl CommandRouter {
    /// Creates a new command router.
    #[must_use]
    pub fn new(registry: CommandRegistry, lottery_url: Url) -> Self {
        Self {
            registry,
            lottery_url,
        }
    }

    /// Returns the command registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Routes an inbound event to its reply.
    ///
    /// Returns `None` when the event calls for no reply body (unknown
    /// command names and unrecognized button payloads are defensive no-ops,
    /// never user-facing errors).
    #[must_use]
    pub fn handle_event(&self, event: InboundEvent) -> Option<Reply> {
        match event {
            InboundEvent::SlashCommand { name, requester_id } => {
                self.dispatch_name(&name, requester_id)
            }
            InboundEvent::ButtonPress {
                payload,
                requester_id,
            } => self.handle_button_press(&payload, requester_id),
        }
    }

    /// Handles `/start`: fixed acknowledgement, no actions.
    #[must_use]
    pub fn handle_start(&self, requester_id: u64) -> Reply {
        info!("Start acknowledgement for user {requester_id}");
        Reply::text(START_TEXT)
    }

    /// Handles `/play`: fixed prompt with one external-link button.
    #[must_use]
    pub fn handle_play(&self, requester_id: u64) -> Reply {
        info!("Play command for user {requester_id}");
        Reply::text(PLAY_PROMPT).with_link(PLAY_BUTTON_TEXT, self.lottery_url.clone())
    }

    /// Handles `/menu`: HTML title with one callback button per registry
    /// entry, in registry order.
    ///
    /// The direct `/menu` rendering and the `cmd_menu` button re-rendering
    /// go through this single method, so both produce identical replies.
    #[must_use]
    pub fn handle_menu(&self, requester_id: u64) -> Reply {
        info!("Menu command for user {requester_id}");

        let mut reply = Reply::html(MENU_TITLE);
        for descriptor in self.registry.iter() {
            reply = reply.with_callback(
                format!("{MENU_MARKER} {}", descriptor.name),
                descriptor.callback_payload(),
            );
        }
        reply
    }

    /// Handles an inline button press.
    ///
    /// Payloads without the `cmd_` prefix, and prefixed payloads naming an
    /// unknown command, produce no reply. Button payloads are
    /// platform-controlled, so a mismatch is silently ignored.
    #[must_use]
    pub fn handle_button_press(&self, payload: &str, requester_id: u64) -> Option<Reply> {
        let Some(name) = payload.strip_prefix(CALLBACK_PREFIX) else {
            debug!("Ignoring unprefixed callback payload: {payload:?}");
            return None;
        };

        debug!("Button press {payload:?} from user {requester_id}");
        self.dispatch_name(name, requester_id)
    }

    /// Total dispatch from command name to reply builder.
    fn dispatch_name(&self, name: &str, requester_id: u64) -> Option<Reply> {
        match name {
            "start" => Some(self.handle_start(requester_id)),
            "play" => Some(self.handle_play(requester_id)),
            "menu" => Some(self.handle_menu(requester_id)),
            _ => {
                debug!("Ignoring unknown command name: {name:?}");
                None
            }
        }
    }
}
