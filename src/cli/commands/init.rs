//! Init command implementation.
//!
//! `copgen init` materializes the curated fragment set into the project,
//! renders `.rubocop.yml` against the detected plugin set, and (unless
//! skipped) asks RuboCop to generate the suppressions file.

use std::path::{Path, PathBuf};

use crate::assets;
use crate::cli::args::InitArgs;
use crate::detection::{GemEnvironment, PluginDetector};
use crate::error::{CopgenError, Result};
use crate::generator::{FragmentLayout, RootConfigGenerator, FRAGMENTS_DIR, ROOT_CONFIG};
use crate::shell;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::{rubocop_command, TODO_FILE, TODO_FLAGS};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Generated files that already exist in the project.
    fn existing_files(&self) -> Vec<PathBuf> {
        [ROOT_CONFIG, TODO_FILE]
            .iter()
            .map(|name| self.project_root.join(name))
            .filter(|path| path.exists())
            .collect()
    }

    fn generate_todo_file(&self, out: &Output) -> Result<bool> {
        out.message("Generating .rubocop_todo.yml...");

        let command = format!("{} --auto-gen-config {TODO_FLAGS}", rubocop_command());
        out.command(&command);

        let result = shell::run_passthrough_in(&command, &self.project_root)?;
        if result.success {
            out.success("Generated .rubocop_todo.yml");
        } else {
            out.error(&format!("Failed to generate .rubocop_todo.yml: {command}"));
        }
        Ok(result.success)
    }

    fn show_completion_message(&self, out: &Output) {
        out.message("");
        out.success("RuboCop setup complete!");
        out.message("");
        out.message("Next steps:");
        if self.args.skip_todo {
            out.message("  1. Run 'copgen regenerate-todo' to generate the TODO file");
            out.message("  2. Run 'bundle exec rubocop' to check your code");
        } else {
            out.message("  1. Review .rubocop_todo.yml and gradually fix violations");
            out.message("  2. Use 'copgen regenerate-todo' for future updates");
            out.message("  3. Run 'bundle exec rubocop' to check your code");
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let existing = self.existing_files();
        if !existing.is_empty() && !self.args.force {
            out.error(&CopgenError::files_exist(&existing).to_string());
            return Ok(CommandResult::failure(1));
        }

        assets::materialize_config(&self.project_root.join(FRAGMENTS_DIR))?;
        tracing::debug!(dir = FRAGMENTS_DIR, "materialized fragment set");

        let registry = GemEnvironment;
        let detector = PluginDetector::new(&registry);
        let generator = RootConfigGenerator::new(&self.project_root, &detector);
        generator.generate()?;
        out.success("Generated .rubocop.yml");

        let layout = FragmentLayout::new(&self.project_root.join(FRAGMENTS_DIR));
        for warning in layout.validate_inheritance() {
            out.warning(&warning);
        }

        if !self.args.skip_todo && !self.generate_todo_file(out)? {
            return Ok(CommandResult::failure(1));
        }

        self.show_completion_message(out);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_files_lists_only_present_ones() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ROOT_CONFIG), "").unwrap();

        let cmd = InitCommand::new(
            temp.path(),
            InitArgs {
                force: false,
                skip_todo: true,
            },
        );

        let existing = cmd.existing_files();
        assert_eq!(existing.len(), 1);
        assert!(existing[0].ends_with(ROOT_CONFIG));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ROOT_CONFIG), "existing\n").unwrap();

        let cmd = InitCommand::new(
            temp.path(),
            InitArgs {
                force: false,
                skip_todo: true,
            },
        );
        let result = cmd.execute(&Output::new(crate::ui::OutputMode::Quiet)).unwrap();

        assert!(!result.success);
        assert_eq!(
            fs::read_to_string(temp.path().join(ROOT_CONFIG)).unwrap(),
            "existing\n"
        );
    }

    #[test]
    fn force_overwrites_and_materializes_fragments() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ROOT_CONFIG), "existing\n").unwrap();
        fs::write(temp.path().join(".ruby-version"), "3.3.0\n").unwrap();

        let cmd = InitCommand::new(
            temp.path(),
            InitArgs {
                force: true,
                skip_todo: true,
            },
        );
        let result = cmd.execute(&Output::new(crate::ui::OutputMode::Quiet)).unwrap();

        assert!(result.success);
        assert!(temp.path().join(".rubocop/cops/style.yml").exists());
        let root = fs::read_to_string(temp.path().join(ROOT_CONFIG)).unwrap();
        assert!(root.contains(".rubocop/cops/style.yml"));
    }
}
