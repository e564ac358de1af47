//! # Ping Command
//!
//! Takes no parameters at all and answers with a pong, mostly useful for
//! checking that the bot is alive.

use std::sync::Arc;

use crate::application::parsing::{CommandParser, Params};
use crate::domain::command::Command;
use crate::domain::context::Context;
use crate::domain::error::HandlerError;
use crate::domain::events::DelayedEventPoster;
use crate::domain::filters::Filter;
use crate::domain::response::Response;
use crate::domain::traits::{CommandHandler, CommandHandlerFactory};

pub struct PingHandler;

impl CommandHandler for PingHandler {
    fn handle_command(
        &self,
        _ctx: &Context,
        _params: &Params,
        _filters: &[Box<dyn Filter>],
        _events: &mut dyn DelayedEventPoster,
    ) -> Result<Response, HandlerError> {
        Ok(Response::result("message", "pong"))
    }
}

pub struct PingFactory {
    command: Command,
}

impl PingFactory {
    pub fn new() -> PingFactory {
        PingFactory {
            command: Command::builder("ping")
                .of_type("bot")
                .with_help_text("Checks that the bot is alive")
                .requiring_access_level(crate::domain::command::AccessLevel::Public)
                .build(),
        }
    }

    pub fn shared() -> Arc<PingFactory> {
        Arc::new(PingFactory::new())
    }
}

impl Default for PingFactory {
    fn default() -> Self {
        PingFactory::new()
    }
}

impl CommandHandlerFactory for PingFactory {
    fn handled_command(&self) -> &Command {
        &self.command
    }

    fn parsers(&self) -> Vec<CommandParser> {
        vec![CommandParser::empty()]
    }

    fn handler(&self) -> Box<dyn CommandHandler> {
        Box::new(PingHandler)
    }
}
