//! # Interface
//!
//! The handler units bundled with the crate.

pub mod commands;
