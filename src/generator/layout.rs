//! On-disk fragment layout.
//!
//! A fragment set lives in two parallel directories: `cops/` holds the
//! curated overrides and `defaults/` the generated per-department files,
//! matched by base name. Each cops file must inherit from its defaults
//! twin.

use std::fs;
use std::path::{Path, PathBuf};

/// Paths of one fragment set.
#[derive(Debug, Clone)]
pub struct FragmentLayout {
    cops_dir: PathBuf,
    defaults_dir: PathBuf,
}

impl FragmentLayout {
    /// Layout rooted at `base` (`base/cops`, `base/defaults`).
    pub fn new(base: &Path) -> Self {
        Self {
            cops_dir: base.join("cops"),
            defaults_dir: base.join("defaults"),
        }
    }

    pub fn cops_dir(&self) -> &Path {
        &self.cops_dir
    }

    pub fn defaults_dir(&self) -> &Path {
        &self.defaults_dir
    }

    pub fn cops_path(&self, category: &str) -> PathBuf {
        self.cops_dir.join(format!("{category}.yml"))
    }

    pub fn defaults_path(&self, category: &str) -> PathBuf {
        self.defaults_dir.join(format!("{category}.yml"))
    }

    /// Base names (no extension) of the curated cops files, sorted.
    ///
    /// A missing cops directory is an empty set, not an error.
    pub fn available_categories(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.cops_dir) else {
            return Vec::new();
        };

        let mut categories: Vec<String> = entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "yml") {
                    path.file_stem()
                        .and_then(|stem| stem.to_str())
                        .map(str::to_string)
                } else {
                    None
                }
            })
            .collect();
        categories.sort();
        categories
    }

    /// Check that every cops file inherits from its defaults twin.
    ///
    /// Returns one warning per violation; never fails.
    pub fn validate_inheritance(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for category in self.available_categories() {
            let cops_file = self.cops_path(&category);
            let expected = format!("inherit_from: ../defaults/{category}.yml");

            match fs::read_to_string(&cops_file) {
                Ok(content) if content.contains(&expected) => {}
                Ok(_) => warnings.push(format!(
                    "{} does not inherit from defaults/{category}.yml",
                    cops_file.display()
                )),
                Err(e) => warnings.push(format!("{} is unreadable: {e}", cops_file.display())),
            }
        }

        warnings
    }
}
