//! External command execution.
//!
//! Commands are plain whitespace-separated strings executed without a shell,
//! so glob arguments like `--show-cops=Style/*` reach the tool verbatim.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{CopgenError, Result};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Whether the command exited with status 0.
    pub success: bool,
}

/// Run a command with captured output, inheriting the current directory.
///
/// Returns `Err` only when the process could not be spawned; a non-zero exit
/// is reported through the result so callers can decide what failing means.
pub fn run(command: &str) -> Result<CommandResult> {
    let output = build(command, None)?.output()?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}

/// Run a command with captured output in `dir`.
pub fn run_in(command: &str, dir: &Path) -> Result<CommandResult> {
    let output = build(command, Some(dir))?.output()?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}

/// Run a command in `dir` with stdout/stderr inherited from this process.
///
/// Used for the external linter's long-running passes, where its own
/// progress output should reach the terminal directly.
pub fn run_passthrough_in(command: &str, dir: &Path) -> Result<CommandResult> {
    let status = build(command, Some(dir))?.status()?;

    Ok(CommandResult {
        exit_code: status.code(),
        stdout: String::new(),
        stderr: String::new(),
        success: status.success(),
    })
}

/// Check whether a command runs and exits successfully.
pub fn command_succeeds(command: &str) -> bool {
    build(command, None)
        .and_then(|mut cmd| Ok(cmd.output()?))
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn build(command: &str, dir: Option<&Path>) -> Result<Command> {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some((program, args)) = parts.split_first() else {
        return Err(CopgenError::CommandFailed {
            command: command.to_string(),
            code: None,
        });
    };

    tracing::debug!(command, "running");

    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout() {
        let result = run("echo hello").unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn run_reports_spawn_failure() {
        assert!(run("this-command-does-not-exist-12345").is_err());
    }

    #[test]
    fn run_empty_command_is_an_error() {
        assert!(run("").is_err());
    }

    #[test]
    fn run_in_uses_the_given_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = run_in("pwd", temp.path()).unwrap();
        assert!(result.success);
        assert!(result.stdout.trim().ends_with(
            temp.path()
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
        ));
    }

    #[test]
    fn command_succeeds_helper() {
        assert!(command_succeeds("echo ok"));
        assert!(!command_succeeds("this-command-does-not-exist-12345"));
        assert!(!command_succeeds(""));
    }
}
