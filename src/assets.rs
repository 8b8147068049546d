//! Curated configuration and templates embedded at compile time.
//!
//! The crate ships its fragment set (`config/cops`, `config/defaults`) and
//! the root-file template inside the binary, so `init` works without any
//! installation step.

use std::fs;
use std::path::Path;

use include_dir::{include_dir, Dir};

use crate::error::{CopgenError, Result};

/// Embedded curated fragment tree (`cops/` and `defaults/`).
static CONFIG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/config");

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Load an embedded template by file name.
pub fn template(name: &str) -> Result<&'static str> {
    let file = TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| CopgenError::AssetNotFound {
            name: format!("templates/{name}"),
        })?;

    file.contents_utf8().ok_or_else(|| CopgenError::TemplateError {
        name: name.to_string(),
        message: "Invalid UTF-8".to_string(),
    })
}

/// Write the embedded fragment tree under `dest`, overwriting existing files.
pub fn materialize_config(dest: &Path) -> Result<()> {
    extract_dir(&CONFIG_DIR, dest)
}

// Entry paths are relative to the embedded root, so joining onto `dest`
// reproduces the tree.
fn extract_dir(dir: &Dir<'_>, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;

    for file in dir.files() {
        let target = dest.join(file.path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, file.contents())?;
    }

    for sub in dir.dirs() {
        extract_dir(sub, dest)?;
    }

    Ok(())
}
