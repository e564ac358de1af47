//! # Handler Contract
//!
//! The traits a command-handler unit implements for the host to load it:
//! declare the command it services, optionally declare parameter-parsing
//! rules, and service invocations.

use crate::application::parsing::{CommandParser, Params};
use crate::domain::command::Command;
use crate::domain::context::Context;
use crate::domain::error::HandlerError;
use crate::domain::events::DelayedEventPoster;
use crate::domain::filters::Filter;
use crate::domain::response::Response;

/// Services invocations of a single command.
///
/// Each invocation is stateless and independent: the handler gets the
/// invocation context, the parameters the host parsed out of the raw input,
/// the active filter set and a deferred-event posting capability, and must
/// return a [`Response`] synchronously. Side effects go through the supplied
/// poster, never through global state.
pub trait CommandHandler: Send + Sync {
    fn handle_command(
        &self,
        ctx: &Context,
        params: &Params,
        filters: &[Box<dyn Filter>],
        events: &mut dyn DelayedEventPoster,
    ) -> Result<Response, HandlerError>;
}

/// A loadable handler unit. The host queries it once at registration time.
pub trait CommandHandlerFactory: Send + Sync {
    /// The descriptor of the command this unit services. Must be pure and
    /// side-effect free; its name is what the unit gets registered under.
    fn handled_command(&self) -> &Command;

    /// The parsing rules the host should try, in order, against the raw
    /// input. `vec![CommandParser::empty()]` declares that the command takes
    /// no parameters; an empty `Vec` declares no parsing rules at all, in
    /// which case the host passes the raw input through unparsed.
    fn parsers(&self) -> Vec<CommandParser>;

    /// A handler instance for servicing invocations.
    fn handler(&self) -> Box<dyn CommandHandler>;
}
