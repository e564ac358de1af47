//! # Domain
//!
//! The value types that cross the handler contract boundary, and the traits
//! that make up the contract itself.

pub mod command;
pub mod context;
pub mod error;
pub mod events;
pub mod filters;
pub mod response;
pub mod traits;
