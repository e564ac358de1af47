//! # Remind Command
//!
//! Schedules a reminder for the sender. The handler does not deliver
//! anything itself; it enqueues a reminder event through the deferred
//! poster and leaves delivery to the host.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::application::parsing::{CommandParser, ParamSpec, Params};
use crate::domain::command::Command;
use crate::domain::context::Context;
use crate::domain::error::{HandlerError, ParseSpecError};
use crate::domain::events::{DelayedEvent, DelayedEventPoster};
use crate::domain::filters::Filter;
use crate::domain::response::Response;
use crate::domain::traits::{CommandHandler, CommandHandlerFactory};

// A week, in minutes.
const MAX_MINUTES: i64 = 7 * 24 * 60;

pub struct RemindHandler;

impl CommandHandler for RemindHandler {
    fn handle_command(
        &self,
        ctx: &Context,
        params: &Params,
        _filters: &[Box<dyn Filter>],
        events: &mut dyn DelayedEventPoster,
    ) -> Result<Response, HandlerError> {
        let minutes = params.int("minutes")?;
        if minutes < 1 || minutes > MAX_MINUTES {
            return Ok(Response::error("Reminders go from 1 minute up to a week"));
        }
        let message = params.require("message")?;

        let due = Utc::now() + Duration::minutes(minutes);
        events.enqueue(DelayedEvent::new(
            "reminder",
            json!({
                "recipient": ctx.sender(),
                "message": message,
                "due": due.to_rfc3339(),
            }),
        ));

        Ok(Response::result(
            "message",
            format!("Will remind you in {minutes} minute(s)"),
        ))
    }
}

pub struct RemindFactory {
    command: Command,
    parsers: Vec<CommandParser>,
}

impl RemindFactory {
    pub fn new() -> Result<RemindFactory, ParseSpecError> {
        let parsers = vec![CommandParser::new(vec![
            ParamSpec::new("minutes", "\\d+"),
            ParamSpec::new("message", ".+"),
        ])?];
        let command = Command::builder("remind")
            .of_type("user")
            .with_syntax(parsers[0].syntax_description().as_str())
            .with_help_text("Schedules a reminder to be delivered after the given number of minutes")
            .build();
        Ok(RemindFactory { command, parsers })
    }

    pub fn shared() -> Result<Arc<RemindFactory>, ParseSpecError> {
        Ok(Arc::new(RemindFactory::new()?))
    }
}

impl CommandHandlerFactory for RemindFactory {
    fn handled_command(&self) -> &Command {
        &self.command
    }

    fn parsers(&self) -> Vec<CommandParser> {
        self.parsers.clone()
    }

    fn handler(&self) -> Box<dyn CommandHandler> {
        Box::new(RemindHandler)
    }
}
