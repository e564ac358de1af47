//! # Error Types
//!
//! Errors crossing the handler contract boundary: parameter access failures,
//! handler-internal failures, malformed parsing specifications and duplicate
//! registrations.

use thiserror::Error;

/// Errors a command handler can produce while servicing an invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A parameter the handler requires was not present in the parsed set.
    #[error("missing required parameter `{0}`")]
    MissingParam(String),

    /// A parameter was present but its value could not be interpreted.
    #[error("invalid value `{value}` for parameter `{name}`")]
    InvalidParam { name: String, value: String },

    /// Handler-internal failure unrelated to parameters.
    #[error("command handling failed: {0}")]
    Failed(String),
}

/// Errors raised when building a [`CommandParser`](crate::application::parsing::CommandParser)
/// from parameter specifications.
#[derive(Debug, Error)]
pub enum ParseSpecError {
    /// Parameter names double as regex capture group names, so they are
    /// restricted to `[A-Za-z][A-Za-z0-9_]*`.
    #[error("invalid parameter name `{0}`")]
    InvalidName(String),

    #[error("duplicate parameter name `{0}`")]
    DuplicateName(String),

    #[error("invalid pattern for parameter `{name}`")]
    BadPattern {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Errors raised by the handler registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a handler for command `{0}` is already registered")]
    DuplicateCommand(String),
}
