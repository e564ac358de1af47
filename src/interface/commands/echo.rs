//! # Echo Command
//!
//! Repeats the given text back at the channel.

use std::sync::Arc;

use crate::application::parsing::{CommandParser, ParamSpec, Params};
use crate::domain::command::Command;
use crate::domain::context::Context;
use crate::domain::error::{HandlerError, ParseSpecError};
use crate::domain::events::DelayedEventPoster;
use crate::domain::filters::Filter;
use crate::domain::response::Response;
use crate::domain::traits::{CommandHandler, CommandHandlerFactory};

pub struct EchoHandler;

impl CommandHandler for EchoHandler {
    fn handle_command(
        &self,
        _ctx: &Context,
        params: &Params,
        _filters: &[Box<dyn Filter>],
        _events: &mut dyn DelayedEventPoster,
    ) -> Result<Response, HandlerError> {
        let text = params.require("text")?;
        Ok(Response::result("message", text))
    }
}

pub struct EchoFactory {
    command: Command,
    parsers: Vec<CommandParser>,
}

impl EchoFactory {
    pub fn new() -> Result<EchoFactory, ParseSpecError> {
        let parsers = vec![CommandParser::new(vec![ParamSpec::new("text", ".+")])?];
        let command = Command::builder("echo")
            .of_type("bot")
            .with_syntax(parsers[0].syntax_description().as_str())
            .with_help_text("Repeats the given text back")
            .build();
        Ok(EchoFactory { command, parsers })
    }

    pub fn shared() -> Result<Arc<EchoFactory>, ParseSpecError> {
        Ok(Arc::new(EchoFactory::new()?))
    }
}

impl CommandHandlerFactory for EchoFactory {
    fn handled_command(&self) -> &Command {
        &self.command
    }

    fn parsers(&self) -> Vec<CommandParser> {
        self.parsers.clone()
    }

    fn handler(&self) -> Box<dyn CommandHandler> {
        Box::new(EchoHandler)
    }
}
