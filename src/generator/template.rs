//! Minimal `${variable}` template substitution for the root-file template.

use std::collections::HashMap;

use crate::error::{CopgenError, Result};

/// Replace every `${name}` placeholder in `template` with its value.
///
/// Templates ship with the binary, so an unknown or unterminated
/// placeholder is a build defect and surfaces as an error.
pub fn render(name: &str, template: &str, vars: &HashMap<&str, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(CopgenError::TemplateError {
                name: name.to_string(),
                message: "unterminated ${ placeholder".to_string(),
            });
        };
        let var = &after[..end];
        match vars.get(var) {
            Some(value) => out.push_str(value),
            None => {
                return Err(CopgenError::TemplateError {
                    name: name.to_string(),
                    message: format!("unknown placeholder ${{{var}}}"),
                })
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_placeholders() {
        let result = render("t", "version: ${version}", &vars(&[("version", "3.3")])).unwrap();
        assert_eq!(result, "version: 3.3");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        assert!(render("t", "${nope}", &vars(&[])).is_err());
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        assert!(render("t", "${broken", &vars(&[])).is_err());
    }

    #[test]
    fn literal_text_passes_through() {
        let result = render("t", "plain text\n", &vars(&[])).unwrap();
        assert_eq!(result, "plain text\n");
    }
}
