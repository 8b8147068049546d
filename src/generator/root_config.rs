//! Root `.rubocop.yml` generation.
//!
//! Decides which curated fragments belong in a project — core departments
//! always, plugin departments only while their plugin gem is installed —
//! and renders the root file from the embedded template.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::assets;
use crate::detection::PluginDetector;
use crate::error::Result;
use crate::generator::layout::FragmentLayout;
use crate::generator::template;
use crate::inflector::Inflector;
use crate::shell;

/// Departments included regardless of plugin detection.
pub const CORE_DEPARTMENTS: [&str; 8] = [
    "style", "layout", "lint", "metrics", "security", "gemspec", "bundler", "naming",
];

/// Project-local directory the fragment set is materialized into.
pub const FRAGMENTS_DIR: &str = ".rubocop";

/// Root configuration file name.
pub const ROOT_CONFIG: &str = ".rubocop.yml";

/// Optional version-pin file consulted for the target Ruby version.
const VERSION_PIN_FILE: &str = ".ruby-version";

/// Fallback when neither a pin file nor a usable `ruby` exists.
const DEFAULT_RUBY_VERSION: &str = "3.3";

/// Template the root file is rendered from.
const ROOT_TEMPLATE: &str = "rubocop.yml";

static DEPARTMENT_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# Department '([^']+)'").unwrap());

static RUBY_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\d+").unwrap());

/// Renders the root configuration for one project.
pub struct RootConfigGenerator {
    project_root: PathBuf,
    layout: FragmentLayout,
    inflector: Inflector,
    detected_plugin_gem_names: Vec<String>,
    detected_plugin_names: Vec<String>,
}

impl RootConfigGenerator {
    /// Create a generator for `project_root`, snapshotting the detected
    /// plugin set once so filtering and rendering agree.
    pub fn new(project_root: &Path, detector: &PluginDetector<'_>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            layout: FragmentLayout::new(&project_root.join(FRAGMENTS_DIR)),
            inflector: Inflector::new(),
            detected_plugin_gem_names: detector.detect_plugin_gem_names(),
            detected_plugin_names: detector.detect_plugin_names(),
        }
    }

    /// Render the root file and write it, overwriting any existing one.
    pub fn generate(&self) -> Result<PathBuf> {
        let path = self.project_root.join(ROOT_CONFIG);
        fs::write(&path, self.render()?)?;
        Ok(path)
    }

    /// Render the root file content from the embedded template.
    pub fn render(&self) -> Result<String> {
        let categories = self.filtered_categories();

        let inherit_from = if categories.is_empty() {
            " []".to_string()
        } else {
            categories
                .iter()
                .map(|c| format!("\n  - {FRAGMENTS_DIR}/cops/{c}.yml"))
                .collect()
        };

        let plugins = if self.detected_plugin_gem_names.is_empty() {
            String::new()
        } else {
            let entries: String = self
                .detected_plugin_gem_names
                .iter()
                .map(|gem| format!("  - {gem}\n"))
                .collect();
            format!("plugins:\n{entries}\n")
        };

        let vars: HashMap<&str, String> = HashMap::from([
            ("target_ruby_version", self.target_ruby_version()),
            ("inherit_from", inherit_from),
            ("plugins", plugins),
        ]);

        template::render(ROOT_TEMPLATE, assets::template(ROOT_TEMPLATE)?, &vars)
    }

    /// Available fragment categories that survive department filtering.
    pub fn filtered_categories(&self) -> Vec<String> {
        self.layout
            .available_categories()
            .into_iter()
            .filter(|category| {
                let department = self.department_for(category);
                self.is_included(&department)
            })
            .collect()
    }

    /// Owning department of a fragment category.
    ///
    /// Parsed out of the generated defaults header when possible; otherwise
    /// falls back to the identifier's first underscore-separated word, which
    /// is wrong for multi-word departments (`thread_safety` yields `thread`)
    /// but is the best guess available without the header.
    fn department_for(&self, category: &str) -> String {
        let defaults_file = self.layout.defaults_path(category);

        if let Ok(content) = fs::read_to_string(&defaults_file) {
            if let Some(caps) = DEPARTMENT_HEADER_RE.captures(&content) {
                return caps[1].to_string();
            }
            tracing::warn!(
                file = %defaults_file.display(),
                "no department header found, guessing from file name"
            );
        }

        category.split('_').next().unwrap_or(category).to_string()
    }

    fn is_included(&self, department: &str) -> bool {
        let folded = self.inflector.underscore(department);
        if CORE_DEPARTMENTS.contains(&folded.as_str()) {
            return true;
        }

        // A department's top-level segment doubles as its plugin short name.
        let top = department.split('/').next().unwrap_or(department);
        let plugin_key = self.inflector.underscore(top);
        self.detected_plugin_names.contains(&plugin_key)
    }

    /// Target Ruby version: the pin file wins, then the `ruby` on `PATH`,
    /// then a fixed default. Never an error.
    fn target_ruby_version(&self) -> String {
        let pin = self.project_root.join(VERSION_PIN_FILE);
        if let Ok(content) = fs::read_to_string(&pin) {
            if let Some(version) = content.lines().next().map(str::trim) {
                if !version.is_empty() {
                    return version.to_string();
                }
            }
        }

        if let Ok(result) = shell::run("ruby -e print(RUBY_VERSION)") {
            if result.success {
                if let Some(m) = RUBY_VERSION_RE.find(result.stdout.trim()) {
                    return m.as_str().to_string();
                }
            }
        }

        DEFAULT_RUBY_VERSION.to_string()
    }
}
