//! Command-line interface for copgen.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InitArgs, RegenerateDefaultsArgs, RegenerateTodoArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
