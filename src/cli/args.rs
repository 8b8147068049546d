//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// copgen - Plugin-aware RuboCop configuration generator.
#[derive(Debug, Parser)]
#[command(name = "copgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate .rubocop.yml and the .rubocop_todo.yml suppressions file
    Init(InitArgs),

    /// Regenerate .rubocop_todo.yml against the current codebase
    RegenerateTodo(RegenerateTodoArgs),

    /// Regenerate the per-department defaults fragments from RuboCop
    RegenerateDefaults(RegenerateDefaultsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Skip suppressions-file generation
    #[arg(long)]
    pub skip_todo: bool,
}

/// Arguments for the `regenerate-todo` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RegenerateTodoArgs {}

/// Arguments for the `regenerate-defaults` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RegenerateDefaultsArgs {
    /// Remove the defaults directory before regenerating
    #[arg(long)]
    pub clean: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn init_accepts_force_and_skip_todo() {
        let cli = Cli::parse_from(["copgen", "init", "--force", "--skip-todo"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.force);
                assert!(args.skip_todo);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn regenerate_defaults_accepts_clean() {
        let cli = Cli::parse_from(["copgen", "regenerate-defaults", "--clean"]);
        match cli.command {
            Commands::RegenerateDefaults(args) => assert!(args.clean),
            _ => panic!("expected regenerate-defaults"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["copgen", "init", "--verbose"]);
        assert!(cli.verbose);
    }
}
