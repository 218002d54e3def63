//! Command-line interface definitions and handlers.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, IdModeArg};
