//! Error types for copgen operations.
//!
//! This module defines [`CopgenError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CopgenError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CopgenError::Other`) for unexpected errors
//! - The text pipeline and plugin detection never error; only orchestration does

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for copgen operations.
#[derive(Debug, Error)]
pub enum CopgenError {
    /// An embedded asset (template or curated config) is missing.
    #[error("Embedded asset not found: {name}")]
    AssetNotFound { name: String },

    /// Template rendering failed (unknown placeholder, bad UTF-8).
    #[error("Failed to render template {name}: {message}")]
    TemplateError { name: String, message: String },

    /// Generated files already exist and `--force` was not given.
    #[error("Files already exist: {files}. Use --force to overwrite.")]
    FilesExist { files: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CopgenError {
    /// Build a `FilesExist` error from the offending paths.
    pub fn files_exist(files: &[PathBuf]) -> Self {
        let files = files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        CopgenError::FilesExist { files }
    }
}

/// Result type alias for copgen operations.
pub type Result<T> = std::result::Result<T, CopgenError>;
