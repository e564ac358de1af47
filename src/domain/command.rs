//! # Command Descriptor
//!
//! The immutable descriptor a handler exposes to identify the command it
//! services, plus the builder used to construct one. A descriptor is pure
//! data; the host reads it once at registration time.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// The lowest access level a user must hold to invoke a command.
///
/// Levels are ordered, so `required <= granted` is a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Anyone, including unregistered users.
    Public,
    /// Registered users.
    User,
    /// Bot administrators.
    Admin,
}

/// A command the bot supports. Identified by its name, which is also the
/// primary way to invoke it.
///
/// Two commands are equal when their names are equal; the other fields are
/// presentation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Command {
    name: String,
    syntax: String,
    help_text: String,
    command_type: String,
    required_access_level: AccessLevel,
    access_level_downgradable: bool,
}

impl Command {
    /// Starts building a command with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn builder(name: &str) -> CommandBuilder {
        CommandBuilder::for_command(name)
    }

    /// A command of unspecified type with all the default settings.
    pub fn simple(name: &str) -> Command {
        Command::builder(name).build()
    }

    /// A command of unspecified type for admins only.
    pub fn admin(name: &str) -> Command {
        Command::builder(name)
            .requiring_access_level(AccessLevel::Admin)
            .build()
    }

    /// A command of unspecified type available to everyone, including
    /// unregistered users.
    pub fn public_access(name: &str) -> Command {
        Command::builder(name)
            .requiring_access_level(AccessLevel::Public)
            .build()
    }

    /// A command of the given type with the default settings.
    pub fn typed(command_type: &str, name: &str) -> Command {
        Command::builder(name).of_type(command_type).build()
    }

    /// A command of the given type for admins only.
    pub fn typed_admin(command_type: &str, name: &str) -> Command {
        Command::builder(name)
            .of_type(command_type)
            .requiring_access_level(AccessLevel::Admin)
            .build()
    }

    /// A command of the given type available to everyone, including
    /// unregistered users.
    pub fn typed_public(command_type: &str, name: &str) -> Command {
        Command::builder(name)
            .of_type(command_type)
            .requiring_access_level(AccessLevel::Public)
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A description of how to use the command.
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// A help text describing what the command does.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// The type of command, used for grouping related commands. Always
    /// lowercase; defaults to `"unspecified"`.
    pub fn command_type(&self) -> &str {
        &self.command_type
    }

    pub fn required_access_level(&self) -> AccessLevel {
        self.required_access_level
    }

    /// Whether the host may relax the required access level through its own
    /// configuration.
    pub fn access_level_downgradable(&self) -> bool {
        self.access_level_downgradable
    }

    /// Display ordering: by command type, then by name ignoring case.
    pub fn display_cmp(&self, other: &Command) -> Ordering {
        self.command_type
            .cmp(&other.command_type)
            .then_with(|| {
                self.name
                    .to_lowercase()
                    .cmp(&other.name.to_lowercase())
            })
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Command {}

impl Hash for Command {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Builder for [`Command`] descriptors.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    name: String,
    syntax: String,
    help_text: String,
    command_type: String,
    required_access_level: AccessLevel,
    access_level_downgradable: bool,
}

impl CommandBuilder {
    /// Creates a builder for a command with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn for_command(name: &str) -> CommandBuilder {
        assert!(!name.is_empty(), "command name must be non-empty");
        CommandBuilder {
            name: name.to_string(),
            syntax: String::new(),
            help_text: String::new(),
            command_type: "unspecified".to_string(),
            required_access_level: AccessLevel::User,
            access_level_downgradable: true,
        }
    }

    /// The default syntax description for the command.
    pub fn with_syntax(mut self, syntax: &str) -> CommandBuilder {
        self.syntax = syntax.to_string();
        self
    }

    /// The default help text for the command.
    pub fn with_help_text(mut self, help_text: &str) -> CommandBuilder {
        self.help_text = help_text.to_string();
        self
    }

    /// The type of the command. Stored lowercased so grouping is
    /// case-insensitive.
    pub fn of_type(mut self, command_type: &str) -> CommandBuilder {
        self.command_type = command_type.to_lowercase();
        self
    }

    /// The minimum access level required to use the command.
    pub fn requiring_access_level(mut self, level: AccessLevel) -> CommandBuilder {
        self.required_access_level = level;
        self
    }

    /// Allows the access level to be relaxed by host configuration.
    pub fn with_downgradable_access_level(mut self) -> CommandBuilder {
        self.access_level_downgradable = true;
        self
    }

    /// Prevents the access level from being relaxed by host configuration.
    pub fn with_non_downgradable_access_level(mut self) -> CommandBuilder {
        self.access_level_downgradable = false;
        self
    }

    pub fn build(self) -> Command {
        Command {
            name: self.name,
            syntax: self.syntax,
            help_text: self.help_text,
            command_type: self.command_type,
            required_access_level: self.required_access_level,
            access_level_downgradable: self.access_level_downgradable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cmd = Command::simple("hello");
        assert_eq!(cmd.name(), "hello");
        assert_eq!(cmd.command_type(), "unspecified");
        assert_eq!(cmd.required_access_level(), AccessLevel::User);
        assert!(cmd.access_level_downgradable());
        assert_eq!(cmd.syntax(), "");
        assert_eq!(cmd.help_text(), "");
    }

    #[test]
    fn test_builder() {
        let cmd = Command::builder("slap")
            .of_type("Bot")
            .with_help_text("Highlights users based on different criteria")
            .requiring_access_level(AccessLevel::Admin)
            .with_non_downgradable_access_level()
            .build();
        assert_eq!(cmd.command_type(), "bot");
        assert_eq!(cmd.required_access_level(), AccessLevel::Admin);
        assert!(!cmd.access_level_downgradable());
    }

    #[test]
    fn test_typed_constructors() {
        let cmd = Command::typed("Targets", "find");
        assert_eq!(cmd.command_type(), "targets");
        assert_eq!(cmd.required_access_level(), AccessLevel::User);

        let cmd = Command::typed_admin("bot", "slap");
        assert_eq!(cmd.command_type(), "bot");
        assert_eq!(cmd.required_access_level(), AccessLevel::Admin);

        let cmd = Command::typed_public("fun", "hello");
        assert_eq!(cmd.required_access_level(), AccessLevel::Public);
    }

    #[test]
    fn test_equality_is_by_name() {
        let a = Command::typed("fun", "hello");
        let b = Command::admin("hello");
        assert_eq!(a, b);
        assert_ne!(a, Command::simple("goodbye"));
    }

    #[test]
    fn test_display_ordering() {
        let a = Command::typed("bot", "Zulu");
        let b = Command::typed("bot", "alpha");
        let c = Command::typed("user", "alpha");
        assert_eq!(b.display_cmp(&a), Ordering::Less);
        assert_eq!(a.display_cmp(&c), Ordering::Less);
    }

    #[test]
    fn test_access_levels_are_ordered() {
        assert!(AccessLevel::Public < AccessLevel::User);
        assert!(AccessLevel::User < AccessLevel::Admin);
    }

    #[test]
    #[should_panic]
    fn test_empty_name_panics() {
        let _ = Command::simple("");
    }
}
