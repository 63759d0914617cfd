//! Command-line interface for scaffold.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InfoArgs, ResolveArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
