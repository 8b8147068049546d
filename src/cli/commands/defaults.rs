//! Regenerate-defaults command implementation.
//!
//! For every department RuboCop knows about, dumps that department's default
//! configuration with the detected plugins loaded, pipes the dump through
//! the post-processing pipeline, and writes one defaults fragment per
//! department under `config/defaults/`. Afterwards the curated `config/cops/`
//! files are checked for a matching `inherit_from` reference.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::cli::args::RegenerateDefaultsArgs;
use crate::detection::{GemEnvironment, PluginDetector};
use crate::error::{CopgenError, Result};
use crate::generator::FragmentLayout;
use crate::processor::ConfigProcessor;
use crate::shell;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::rubocop_command;

/// Directory the fragment set is maintained in, relative to the project root.
const CONFIG_BASE: &str = "config";

/// Flags requesting an unmodified, fully-annotated default dump.
const SHOW_COPS_FLAGS: &str =
    "--force-default-config --display-cop-names --extra-details --display-style-guide";

/// Matches one rule-definition line; the capture is its department.
static COP_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][A-Za-z0-9/]*)/[A-Za-z0-9]+:$").unwrap());

/// The regenerate-defaults command implementation.
pub struct RegenerateDefaultsCommand {
    project_root: PathBuf,
    args: RegenerateDefaultsArgs,
}

impl RegenerateDefaultsCommand {
    /// Create a new regenerate-defaults command.
    pub fn new(project_root: &Path, args: RegenerateDefaultsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// All departments the external tool reports, sorted and deduplicated.
    fn list_departments(&self, plugin_gem_names: &[String]) -> Result<Vec<String>> {
        let command = format!(
            "{} --show-cops {SHOW_COPS_FLAGS}{}",
            rubocop_command(),
            plugin_flags(plugin_gem_names)
        );

        let result = shell::run_in(&command, &self.project_root)?;
        if !result.success {
            return Err(CopgenError::CommandFailed {
                command,
                code: result.exit_code,
            });
        }

        let departments: BTreeSet<String> = COP_LINE_RE
            .captures_iter(&result.stdout)
            .map(|caps| caps[1].to_string())
            .collect();
        Ok(departments.into_iter().collect())
    }

    fn generate_department(
        &self,
        department: &str,
        plugin_gem_names: &[String],
        processor: &ConfigProcessor,
        layout: &FragmentLayout,
        out: &Output,
    ) -> Result<()> {
        out.message(&format!("Generating {department} configuration..."));

        let base = department.to_lowercase().replace('/', "_");
        let gem_name = gem_for_department(department, plugin_gem_names);

        let command = format!(
            "{} --show-cops={department}/* {SHOW_COPS_FLAGS}{}",
            rubocop_command(),
            plugin_flags(plugin_gem_names)
        );
        out.command(&command);

        let result = shell::run_in(&command, &self.project_root)?;
        if !result.success {
            return Err(CopgenError::CommandFailed {
                command,
                code: result.exit_code,
            });
        }

        let processed = processor.process(&result.stdout, department, &gem_name, &base);
        let target = layout.defaults_path(&base);
        fs::write(&target, processed)?;
        out.success(&format!("Generated {}", target.display()));

        Ok(())
    }
}

impl Command for RegenerateDefaultsCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let registry = GemEnvironment;
        let detector = PluginDetector::new(&registry);
        let mut plugin_gem_names = detector.detect_plugin_gem_names();
        plugin_gem_names.sort();
        tracing::debug!(plugins = ?plugin_gem_names, "detected plugin gems");

        let layout = FragmentLayout::new(&self.project_root.join(CONFIG_BASE));

        if self.args.clean {
            out.message("Cleaning existing defaults...");
            match fs::remove_dir_all(layout.defaults_dir()) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        fs::create_dir_all(layout.defaults_dir())?;

        let departments = self.list_departments(&plugin_gem_names)?;
        let processor = ConfigProcessor::with_root(&self.project_root);

        for department in &departments {
            self.generate_department(department, &plugin_gem_names, &processor, &layout, out)?;
        }

        out.message("Checking cops configurations...");
        for warning in layout.validate_inheritance() {
            out.warning(&warning);
        }

        out.success("Configuration regeneration complete!");
        Ok(CommandResult::success())
    }
}

/// Gem owning a department: `rubocop-<top segment>` when that plugin gem is
/// detected, the core `rubocop` gem otherwise.
fn gem_for_department(department: &str, plugin_gem_names: &[String]) -> String {
    let top = department
        .split('/')
        .next()
        .unwrap_or(department)
        .to_lowercase();
    let candidate = format!("rubocop-{top}");

    if plugin_gem_names.contains(&candidate) {
        candidate
    } else {
        "rubocop".to_string()
    }
}

/// One `--plugin <gem>` flag pair per detected plugin, leading space included.
fn plugin_flags(plugin_gem_names: &[String]) -> String {
    plugin_gem_names
        .iter()
        .map(|gem| format!(" --plugin {gem}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gems(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn cop_line_regex_extracts_departments() {
        let dump = "Style/Alias:\n  Enabled: true\nRSpec/Rails/HaveHttpStatus:\n  Enabled: true\nnot a cop line\n";

        let departments: Vec<&str> = COP_LINE_RE
            .captures_iter(dump)
            .map(|caps| caps.get(1).unwrap().as_str())
            .collect();

        assert_eq!(departments, vec!["Style", "RSpec/Rails"]);
    }

    #[test]
    fn department_gem_prefers_detected_plugin() {
        let plugins = gems(&["rubocop-performance", "rubocop-rspec"]);

        assert_eq!(
            gem_for_department("Performance", &plugins),
            "rubocop-performance"
        );
        assert_eq!(gem_for_department("RSpec/Rails", &plugins), "rubocop-rspec");
        assert_eq!(gem_for_department("Style", &plugins), "rubocop");
    }

    #[test]
    fn department_gem_falls_back_for_unmatched_casing() {
        // "ThreadSafety" lowercases to "threadsafety", which is not the
        // gem's actual name, so the core gem is used for its doc links.
        let plugins = gems(&["rubocop-thread_safety"]);
        assert_eq!(gem_for_department("ThreadSafety", &plugins), "rubocop");
    }

    #[test]
    fn plugin_flags_are_space_separated_pairs() {
        assert_eq!(
            plugin_flags(&gems(&["rubocop-performance", "rubocop-rake"])),
            " --plugin rubocop-performance --plugin rubocop-rake"
        );
        assert_eq!(plugin_flags(&[]), "");
    }
}
