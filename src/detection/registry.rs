//! Access to the installed gem set.
//!
//! Plugin detection only needs `(name, metadata)` pairs for every installed
//! gem. [`PackageRegistry`] abstracts where those pairs come from:
//! [`GemEnvironment`] asks the real Ruby installation, while tests supply a
//! [`StaticRegistry`] with a fixed list.

use std::collections::HashMap;

use serde::Deserialize;

use crate::shell;

/// One installed gem: its name plus the free-form metadata table gems declare.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GemSpec {
    pub name: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl GemSpec {
    /// Convenience constructor for fixed registries.
    pub fn new(name: &str, metadata: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            metadata: metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Source of installed-gem information.
pub trait PackageRegistry {
    /// Every installed gem the registry knows about. An unavailable registry
    /// yields an empty list, never an error.
    fn installed_specs(&self) -> Vec<GemSpec>;
}

/// Ruby one-liner dumping every installed gem spec as JSON.
const SPEC_DUMP_COMMAND: &str = r#"ruby -rjson -e puts(Gem::Specification.map{|s|{name:s.name,metadata:s.metadata}}.to_json)"#;

/// Production registry backed by the Ruby installation on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GemEnvironment;

impl PackageRegistry for GemEnvironment {
    fn installed_specs(&self) -> Vec<GemSpec> {
        let result = match shell::run(SPEC_DUMP_COMMAND) {
            Ok(result) if result.success => result,
            Ok(result) => {
                tracing::debug!(code = ?result.exit_code, "gem spec dump failed");
                return Vec::new();
            }
            Err(e) => {
                tracing::debug!(error = %e, "gem spec dump could not run");
                return Vec::new();
            }
        };

        match serde_json::from_str(&result.stdout) {
            Ok(specs) => specs,
            Err(e) => {
                tracing::debug!(error = %e, "gem spec dump produced invalid JSON");
                Vec::new()
            }
        }
    }
}

/// Fixed-list registry for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    specs: Vec<GemSpec>,
}

impl StaticRegistry {
    pub fn new(specs: Vec<GemSpec>) -> Self {
        Self { specs }
    }
}

impl PackageRegistry for StaticRegistry {
    fn installed_specs(&self) -> Vec<GemSpec> {
        self.specs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gem_spec_deserializes_from_dump_json() {
        let json = r#"[{"name":"rubocop-performance","metadata":{"default_lint_roller_plugin":"RuboCop::Performance::Plugin"}},{"name":"rake","metadata":{}}]"#;

        let specs: Vec<GemSpec> = serde_json::from_str(json).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "rubocop-performance");
        assert_eq!(
            specs[0].metadata.get("default_lint_roller_plugin").unwrap(),
            "RuboCop::Performance::Plugin"
        );
        assert!(specs[1].metadata.is_empty());
    }

    #[test]
    fn gem_spec_tolerates_missing_metadata() {
        let specs: Vec<GemSpec> = serde_json::from_str(r#"[{"name":"rake"}]"#).unwrap();
        assert!(specs[0].metadata.is_empty());
    }

    #[test]
    fn static_registry_returns_fixed_specs() {
        let registry = StaticRegistry::new(vec![GemSpec::new("rubocop", &[])]);
        assert_eq!(registry.installed_specs().len(), 1);
    }
}
