//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`].

pub mod completions;
pub mod defaults;
pub mod dispatcher;
pub mod init;
pub mod regenerate_todo;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::shell;

/// Suppressions file maintained by the external linter.
pub const TODO_FILE: &str = ".rubocop_todo.yml";

/// Flags shared by every todo-file (re)generation run.
pub const TODO_FLAGS: &str = "--no-exclude-limit --no-offense-counts --no-auto-gen-timestamp";

/// The RuboCop invocation to use, preferring the bundled one.
pub(crate) fn rubocop_command() -> String {
    if shell::command_succeeds("bundle --version") {
        "bundle exec rubocop".to_string()
    } else {
        "rubocop".to_string()
    }
}
