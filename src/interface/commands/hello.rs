//! # Hello Command
//!
//! Greets the named user, or the world when invoked without a name.

use std::sync::Arc;

use crate::application::parsing::{CommandParser, ParamSpec, Params};
use crate::domain::command::Command;
use crate::domain::context::Context;
use crate::domain::error::{HandlerError, ParseSpecError};
use crate::domain::events::DelayedEventPoster;
use crate::domain::filters::Filter;
use crate::domain::response::Response;
use crate::domain::traits::{CommandHandler, CommandHandlerFactory};

pub struct HelloHandler;

impl CommandHandler for HelloHandler {
    fn handle_command(
        &self,
        _ctx: &Context,
        params: &Params,
        _filters: &[Box<dyn Filter>],
        _events: &mut dyn DelayedEventPoster,
    ) -> Result<Response, HandlerError> {
        let name = params.get("name").unwrap_or("world");
        Ok(Response::result("message", format!("Hello, {name}!")))
    }
}

pub struct HelloFactory {
    command: Command,
    parsers: Vec<CommandParser>,
}

impl HelloFactory {
    pub fn new() -> Result<HelloFactory, ParseSpecError> {
        let command = Command::builder("hello")
            .of_type("fun")
            .with_help_text("Greets the named user, defaulting to the whole world")
            .requiring_access_level(crate::domain::command::AccessLevel::Public)
            .build();
        let parsers = vec![
            CommandParser::new(vec![ParamSpec::new("name", "[A-Za-z]+")])?,
            CommandParser::empty(),
        ];
        Ok(HelloFactory { command, parsers })
    }

    /// Convenience for hosts registering the bundled handlers.
    pub fn shared() -> Result<Arc<HelloFactory>, ParseSpecError> {
        Ok(Arc::new(HelloFactory::new()?))
    }
}

impl CommandHandlerFactory for HelloFactory {
    fn handled_command(&self) -> &Command {
        &self.command
    }

    fn parsers(&self) -> Vec<CommandParser> {
        self.parsers.clone()
    }

    fn handler(&self) -> Box<dyn CommandHandler> {
        Box::new(HelloHandler)
    }
}
