//! Regenerate-todo command implementation.
//!
//! Re-runs the external linter's todo generation and reports whether the
//! suppressions file actually changed, via a content hash taken before and
//! after the run.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::cli::args::RegenerateTodoArgs;
use crate::error::Result;
use crate::generator::ROOT_CONFIG;
use crate::shell;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::{rubocop_command, TODO_FILE, TODO_FLAGS};

/// The regenerate-todo command implementation.
pub struct RegenerateTodoCommand {
    project_root: PathBuf,
}

impl RegenerateTodoCommand {
    /// Create a new regenerate-todo command.
    pub fn new(project_root: &Path, _args: RegenerateTodoArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    fn file_hash(path: &Path) -> Option<String> {
        let content = fs::read(path).ok()?;
        Some(hex::encode(Sha256::digest(content)))
    }
}

impl Command for RegenerateTodoCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        if !self.project_root.join(ROOT_CONFIG).exists() {
            out.error(".rubocop.yml not found. Run 'copgen init' first.");
            return Ok(CommandResult::failure(1));
        }

        let todo_path = self.project_root.join(TODO_FILE);
        let before = Self::file_hash(&todo_path);

        let command = format!("{} --regenerate-todo {TODO_FLAGS}", rubocop_command());
        out.message(&format!("Running: {command}"));

        let result = shell::run_passthrough_in(&command, &self.project_root)?;
        if !result.success {
            out.error(&format!("Failed to regenerate .rubocop_todo.yml: {command}"));
            return Ok(CommandResult::failure(1));
        }

        let after = Self::file_hash(&todo_path);
        out.success("Regenerated .rubocop_todo.yml");
        if before != after {
            out.message("TODO file was updated with changes");
        } else {
            out.message("TODO file unchanged (no new violations)");
        }
        out.message("Review the updated TODO file and continue fixing violations.");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use tempfile::TempDir;

    #[test]
    fn requires_root_config() {
        let temp = TempDir::new().unwrap();
        let cmd = RegenerateTodoCommand::new(temp.path(), RegenerateTodoArgs {});

        let result = cmd.execute(&Output::new(OutputMode::Quiet)).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn file_hash_is_none_for_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(RegenerateTodoCommand::file_hash(&temp.path().join("nope.yml")).is_none());
    }

    #[test]
    fn file_hash_tracks_content_changes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todo.yml");

        fs::write(&path, "a\n").unwrap();
        let first = RegenerateTodoCommand::file_hash(&path);
        fs::write(&path, "b\n").unwrap();
        let second = RegenerateTodoCommand::file_hash(&path);

        assert!(first.is_some());
        assert_ne!(first, second);

        fs::write(&path, "a\n").unwrap();
        assert_eq!(first, RegenerateTodoCommand::file_hash(&path));
    }
}
