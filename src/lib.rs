//! # botcmd
//!
//! The contract a chat-bot host expects command-handler units to satisfy.
//!
//! A handler unit declares the command it services
//! ([`CommandHandlerFactory::handled_command`]), optionally declares
//! parameter-parsing rules ([`CommandHandlerFactory::parsers`]) and services
//! invocations ([`CommandHandler::handle_command`]), returning a [`Response`]
//! for the host to route. The host itself — message loop, access
//! enforcement, parser sequencing, event delivery — lives elsewhere; this
//! crate holds the boundary types, the registration table and a set of
//! bundled handlers.
//!
//! ```
//! use botcmd::{Context, BufferedEventPoster, HandlerRegistry};
//! use botcmd::interface::commands::register_bundled;
//!
//! let mut registry = HandlerRegistry::new();
//! register_bundled(&mut registry).unwrap();
//!
//! // What a host does per invocation: find the unit, try its parsers in
//! // order, hand the parsed parameters to a handler.
//! let factory = registry.factory_for("hello").unwrap();
//! let input = "Alice";
//! let params = factory
//!     .parsers()
//!     .iter()
//!     .find_map(|parser| parser.parse(input))
//!     .unwrap();
//!
//! let ctx = Context::in_channel("#demo", "alice", input);
//! let mut events = BufferedEventPoster::new();
//! let resp = factory
//!     .handler()
//!     .handle_command(&ctx, &params, &[], &mut events)
//!     .unwrap();
//! assert_eq!(resp.get("message").unwrap(), "Hello, Alice!");
//! ```

pub mod application;
pub mod domain;
pub mod interface;

pub use application::parsing::{CommandParser, Grouping, ParamSpec, Params};
pub use application::registry::HandlerRegistry;
pub use domain::command::{AccessLevel, Command, CommandBuilder};
pub use domain::context::{Context, MessageType};
pub use domain::error::{HandlerError, ParseSpecError, RegistryError};
pub use domain::events::{BufferedEventPoster, DelayedEvent, DelayedEventPoster};
pub use domain::filters::{Filter, RangeFilter, apply_filters};
pub use domain::response::Response;
pub use domain::traits::{CommandHandler, CommandHandlerFactory};
