//! Router data model: command descriptors, inbound events and replies.

use url::Url;

/// Callback payloads produced by the menu start with this prefix.
pub const CALLBACK_PREFIX: &str = "cmd_";

/// A single entry in the command registry.
///
/// The registry is the single source of truth for both the Telegram
/// command-menu publication and the `/menu` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Command name without the leading slash (e.g. `"start"`).
    pub name: &'static str,

    /// Human-readable description shown in the Telegram command list.
    pub description: &'static str,
}

impl CommandDescriptor {
    /// Creates a new command descriptor.
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    /// Returns the callback payload that re-triggers this command.
    #[must_use]
    pub fn callback_payload(&self) -> String {
        format!("{CALLBACK_PREFIX}{}", self.name)
    }
}

/// Ordered, immutable set of all commands the bot understands.
///
/// Constructed once at startup and passed into the router; there is no
/// module-level mutable registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    entries: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Creates a registry from an explicit list of descriptors.
    #[must_use]
    pub fn new(entries: Vec<CommandDescriptor>) -> Self {
        Self { entries }
    }

    /// The standard registry: `/start`, `/play` and `/menu`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            CommandDescriptor::new("start", "Start the bot"),
            CommandDescriptor::new("play", "Open Lottery"),
            CommandDescriptor::new("menu", "Show command menu"),
        ])
    }

    /// Iterates over the descriptors in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.entries.iter()
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether a command name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|d| d.name == name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// An inbound event as delivered by the transport layer.
///
/// Ephemeral: constructed per update, consumed once, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A slash command invocation (`/start`, `/play`, `/menu`).
    SlashCommand { name: String, requester_id: u64 },

    /// An inline button press carrying an opaque payload.
    ButtonPress { payload: String, requester_id: u64 },
}

/// A labeled action attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyAction {
    /// External-link button opening a URL.
    Link { label: String, url: Url },

    /// Callback button returning an opaque payload when pressed.
    Callback { label: String, payload: String },
}

/// An outbound reply produced by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message text.
    pub text: String,

    /// Whether the text uses HTML formatting.
    pub html: bool,

    /// Buttons attached to the message, one per row.
    pub actions: Vec<ReplyAction>,
}

impl Reply {
    /// Creates a plain-text reply with no actions.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
            actions: Vec::new(),
        }
    }

    /// Creates an HTML-formatted reply with no actions.
    #[must_use]
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: true,
            actions: Vec::new(),
        }
    }

    /// Attaches an external-link action.
    #[must_use]
    pub fn with_link(mut self, label: impl Into<String>, url: Url) -> Self {
        self.actions.push(ReplyAction::Link {
            label: label.into(),
            url,
        });
        self
    }

    /// Attaches a callback action.
    #[must_use]
    pub fn with_callback(mut self, label: impl Into<String>, payload: impl Into<String>) -> Self {
        self.actions.push(ReplyAction::Callback {
            label: label.into(),
            payload: payload.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = CommandRegistry::standard();
        let names: Vec<&str> = registry.iter().map(|d| d.name).collect();
        assert_eq!(names, ["start", "play", "menu"]);
    }

    #[test]
    fn test_standard_registry_descriptions() {
        let registry = CommandRegistry::standard();
        let descriptions: Vec<&str> = registry.iter().map(|d| d.description).collect();
        assert_eq!(
            descriptions,
            ["Start the bot", "Open Lottery", "Show command menu"]
        );
    }

    #[test]
    fn test_registry_contains() {
        let registry = CommandRegistry::standard();
        assert!(registry.contains("start"));
        assert!(registry.contains("menu"));
        assert!(!registry.contains("unknown"));
    }

    #[test]
    fn test_callback_payload() {
        let desc = CommandDescriptor::new("play", "Open Lottery");
        assert_eq!(desc.callback_payload(), "cmd_play");
    }

    #[test]
    fn test_reply_builders() {
        let url = Url::parse("https://example.com/").unwrap();
        let reply = Reply::text("hello").with_link("open", url.clone());

        assert_eq!(reply.text, "hello");
        assert!(!reply.html);
        assert_eq!(
            reply.actions,
            vec![ReplyAction::Link {
                label: "open".to_owned(),
                url,
            }]
        );
    }
}
