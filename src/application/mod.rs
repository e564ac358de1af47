//! # Application
//!
//! Parameter parsing machinery and the handler registration surface.

pub mod parsing;
pub mod registry;
