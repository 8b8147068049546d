//! Case folding for department names.
//!
//! Department names arrive in CamelCase (`Style`, `ThreadSafety`, `RSpec`)
//! but plugin short names and the core-department allow-list are snake_case.
//! [`Inflector`] converts between the two with a literal acronym table, so
//! `RSpec` folds to `rspec` rather than `r_spec`.

/// Immutable case-folding table.
///
/// Constructed once and passed to whoever needs folding; there is no global
/// instance.
#[derive(Debug, Clone)]
pub struct Inflector {
    /// `(literal, folded)` pairs, e.g. `("RSpec", "rspec")`.
    acronyms: Vec<(String, String)>,
}

/// Acronyms that fold to a single word instead of splitting on case changes.
const DEFAULT_ACRONYMS: [&str; 3] = ["RSpec", "GetText", "RailsI18n"];

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector {
    /// Create an inflector with the default acronym table.
    pub fn new() -> Self {
        Self::with_acronyms(&DEFAULT_ACRONYMS)
    }

    /// Create an inflector with an explicit acronym list.
    pub fn with_acronyms(acronyms: &[&str]) -> Self {
        let acronyms = acronyms
            .iter()
            .map(|a| ((*a).to_string(), a.to_lowercase()))
            .collect();
        Self { acronyms }
    }

    /// Convert a CamelCase name to snake_case.
    ///
    /// Registered acronyms are folded as single words: `underscore("RSpec")`
    /// is `"rspec"`, while an unregistered `"ThreadSafety"` still splits into
    /// `"thread_safety"` via the ordinary case-boundary rule.
    pub fn underscore(&self, input: &str) -> String {
        let mut folded = input.to_string();
        for (literal, replacement) in &self.acronyms {
            while let Some(pos) = folded.find(literal.as_str()) {
                let needs_boundary = folded[..pos]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c.is_ascii_alphanumeric());
                let replacement = if needs_boundary {
                    format!("_{replacement}")
                } else {
                    replacement.clone()
                };
                folded.replace_range(pos..pos + literal.len(), &replacement);
            }
        }
        camel_to_snake(&folded)
    }
}

fn camel_to_snake(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let at_boundary = match chars.get(i.wrapping_sub(1)) {
                Some(prev) if prev.is_ascii_lowercase() || prev.is_ascii_digit() => true,
                Some(prev) if prev.is_ascii_uppercase() => {
                    chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase())
                }
                _ => false,
            };
            if at_boundary && i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
