//! copgen - Plugin-aware RuboCop configuration generator.
//!
//! copgen produces a project's `.rubocop.yml` (and its `.rubocop_todo.yml`
//! suppressions file) by detecting which RuboCop plugin gems are installed
//! and assembling curated per-department config fragments accordingly. The
//! fragments themselves are regenerated from RuboCop's own default dump via
//! a deterministic text post-processing pipeline.
//!
//! # Modules
//!
//! - [`assets`] - Curated config and templates embedded at compile time
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Installed-plugin detection
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Department filtering and root-file rendering
//! - [`inflector`] - Case folding for department names
//! - [`processor`] - Config dump post-processing pipeline
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use copgen::processor::ConfigProcessor;
//!
//! let processor = ConfigProcessor::with_root("/home/user/project");
//! let fragment = processor.process("Style/Alias:\n  Enabled: false\n", "Style", "rubocop", "style");
//! assert!(fragment.starts_with("# Department 'Style' (1):"));
//! assert!(fragment.contains("Enabled: true # was false"));
//! ```

pub mod assets;
pub mod cli;
pub mod detection;
pub mod error;
pub mod generator;
pub mod inflector;
pub mod processor;
pub mod shell;
pub mod ui;

pub use error::{CopgenError, Result};
