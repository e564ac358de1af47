//! # Invocation Context
//!
//! What the host knows about a message at the time it invokes a handler:
//! who sent it, where, and the raw input with the command name stripped.

/// Where the input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// A message in a shared channel or room.
    Channel,
    /// A private message to the bot.
    Private,
}

/// The context of a single command invocation, assembled by the host and
/// handed to the handler read-only.
#[derive(Debug, Clone)]
pub struct Context {
    sender: String,
    channel: Option<String>,
    input: String,
    message_type: MessageType,
    prefixes_used: u32,
}

impl Context {
    /// A context for a command invoked in a channel.
    pub fn in_channel(channel: &str, sender: &str, input: &str) -> Context {
        Context {
            sender: sender.to_string(),
            channel: Some(channel.to_string()),
            input: input.to_string(),
            message_type: MessageType::Channel,
            prefixes_used: 1,
        }
    }

    /// A context for a command invoked over a private message.
    pub fn in_private(sender: &str, input: &str) -> Context {
        Context {
            sender: sender.to_string(),
            channel: None,
            input: input.to_string(),
            message_type: MessageType::Private,
            prefixes_used: 1,
        }
    }

    /// How many times the user wrote the command prefix, e.g. `!!hello`
    /// instead of `!hello`. Hosts use repeated prefixes to request
    /// alternative delivery of the output.
    pub fn with_prefixes_used(mut self, prefixes_used: u32) -> Context {
        self.prefixes_used = prefixes_used;
        self
    }

    /// The user that invoked the command.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// The channel the command was invoked in. `None` for private messages.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// The raw input from the user, with the command name removed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn prefixes_used(&self) -> u32 {
        self.prefixes_used
    }

    pub fn is_private(&self) -> bool {
        self.message_type == MessageType::Private
    }
}
