//! Post-processing pipeline for raw `rubocop --show-cops` output.
//!
//! The external tool dumps one department's default configuration as
//! line-oriented YAML-shaped text. [`ConfigProcessor::process`] turns that
//! dump into a curated defaults fragment by applying six transformations in
//! a fixed order:
//!
//! 1. prepend a department header with the rule count
//! 2. rewrite `Enabled: false`/`Enabled: pending` to `Enabled: true`,
//!    recording the previous value in a trailing comment
//! 3. drop deprecated `AllowOnlyRestArgument:` keys
//! 4. insert a documentation link above every rule definition
//! 5. strip the project root from absolute paths
//! 6. trim trailing spaces (last, so it cleans up after earlier stages)
//!
//! Every stage is a total text-to-text function. The content is never parsed
//! as structured YAML; only its line shape matters.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Host serving the rendered cop documentation.
const DOCS_HOST: &str = "https://docs.rubocop.org";

// --- Compiled regexes for the department-independent stages ---

static ENABLED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  Enabled: (false|pending)$").unwrap());

static DEPRECATED_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*AllowOnlyRestArgument:.*\n?").unwrap());

static TRAILING_SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m) +$").unwrap());

/// Transforms one department's raw configuration dump into a polished
/// defaults fragment.
///
/// The processor holds the project root used for path normalization; aside
/// from that, `process` is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct ConfigProcessor {
    project_root: PathBuf,
}

impl Default for ConfigProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProcessor {
    /// Create a processor rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Create a processor rooted at an explicit directory.
    pub fn with_root(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
        }
    }

    /// Run the full pipeline over `content`.
    ///
    /// `department` is matched literally against rule identifiers and embedded
    /// verbatim in the header. `gem_name` and `base` only feed the
    /// documentation URL; they are not validated.
    pub fn process(&self, content: &str, department: &str, gem_name: &str, base: &str) -> String {
        let content = add_department_header(content, department);
        let content = enable_all_cops(&content);
        let content = remove_deprecated_config(&content);
        let content = add_documentation_links(&content, department, gem_name, base);
        let content = self.normalize_paths(&content);
        remove_trailing_whitespace(&content)
    }

    /// Strip the project root (plus separator) wherever it appears, turning
    /// absolute paths emitted by the external tool into repo-relative ones.
    fn normalize_paths(&self, content: &str) -> String {
        let prefix = format!("{}/", self.project_root.display());
        content.replace(&prefix, "")
    }
}

/// Prepend `# Department '<name>' (<count>):` where count is the number of
/// lines starting with `<department>/`.
fn add_department_header(content: &str, department: &str) -> String {
    let count = match Regex::new(&format!("(?m)^{}/", regex::escape(department))) {
        Ok(re) => re.find_iter(content).count(),
        Err(_) => 0,
    };
    format!("# Department '{department}' ({count}):\n{content}")
}

/// Rewrite two-space-indented `Enabled: false|pending` lines to
/// `Enabled: true`, keeping the old value in a comment. Deeper indentation
/// and lines already `true` are untouched, so the rewrite is idempotent.
fn enable_all_cops(content: &str) -> String {
    ENABLED_RE
        .replace_all(content, |caps: &regex::Captures<'_>| {
            format!("  Enabled: true # was {}", &caps[1])
        })
        .into_owned()
}

/// Drop every `AllowOnlyRestArgument:` line, whatever its indentation. The
/// key was removed upstream and keeping it makes newer RuboCop versions warn.
fn remove_deprecated_config(content: &str) -> String {
    DEPRECATED_KEY_RE.replace_all(content, "").into_owned()
}

/// Insert a `# https://docs.rubocop.org/...` comment line directly above
/// every `<department>/<rule>:` definition.
fn add_documentation_links(content: &str, department: &str, gem_name: &str, base: &str) -> String {
    let pattern = format!("(?m)^{}/(.+):$", regex::escape(department));
    let Ok(re) = Regex::new(&pattern) else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures<'_>| {
        let link = documentation_url(department, &caps[1], gem_name, base);
        format!("# {link}\n{}", &caps[0])
    })
    .into_owned()
}

/// Build the docs URL for one rule. Goes through [`Url`] so path and fragment
/// components are percent-encoded instead of pasted together.
fn documentation_url(department: &str, rule_name: &str, gem_name: &str, base: &str) -> String {
    let fragment: String = format!("{department}{rule_name}")
        .to_lowercase()
        .chars()
        .filter(|c| *c != '/' && *c != '_')
        .collect();

    let Ok(mut url) = Url::parse(DOCS_HOST) else {
        return String::new();
    };
    url.set_path(&format!("{gem_name}/cops_{base}.html"));
    url.set_fragment(Some(&fragment));
    url.to_string()
}

/// Remove runs of spaces before newlines. Tabs survive; only spaces go.
fn remove_trailing_whitespace(content: &str) -> String {
    TRAILING_SPACES_RE.replace_all(content, "").into_owned()
}
