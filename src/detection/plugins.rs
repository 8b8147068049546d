//! RuboCop plugin detection.
//!
//! Terminology:
//! - plugin gem name: full gem name (`rubocop-performance`, `rubocop-rspec`),
//!   used for gem operations and `--plugin` CLI arguments
//! - plugin name: short form without the prefix (`performance`, `rspec`),
//!   used for config file matching and department filtering

use super::registry::PackageRegistry;

/// Gem metadata key that marks a gem as a lint_roller plugin.
const PLUGIN_METADATA_KEY: &str = "default_lint_roller_plugin";

/// Gem name prefix shared by RuboCop plugin gems.
const PLUGIN_GEM_PREFIX: &str = "rubocop-";

/// Detects installed RuboCop plugins through a [`PackageRegistry`].
pub struct PluginDetector<'a> {
    registry: &'a dyn PackageRegistry,
}

impl<'a> PluginDetector<'a> {
    pub fn new(registry: &'a dyn PackageRegistry) -> Self {
        Self { registry }
    }

    /// Full gem names of installed plugins, in registry order.
    ///
    /// A gem counts as a plugin when its metadata carries a non-empty
    /// `default_lint_roller_plugin` entry. No plugins installed is an
    /// ordinary empty result.
    pub fn detect_plugin_gem_names(&self) -> Vec<String> {
        self.registry
            .installed_specs()
            .into_iter()
            .filter(|spec| {
                spec.metadata
                    .get(PLUGIN_METADATA_KEY)
                    .is_some_and(|value| !value.is_empty())
            })
            .map(|spec| spec.name)
            .collect()
    }

    /// Short plugin names, derived from [`detect_plugin_gem_names`] by
    /// stripping the `rubocop-` prefix.
    ///
    /// [`detect_plugin_gem_names`]: Self::detect_plugin_gem_names
    pub fn detect_plugin_names(&self) -> Vec<String> {
        self.detect_plugin_gem_names()
            .into_iter()
            .map(|name| {
                name.strip_prefix(PLUGIN_GEM_PREFIX)
                    .map(str::to_string)
                    .unwrap_or(name)
            })
            .collect()
    }
}
