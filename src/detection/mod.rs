//! Installed-plugin detection.
//!
//! - [`registry`] - access to the installed gem set
//! - [`plugins`] - plugin filtering and naming

pub mod plugins;
pub mod registry;

pub use plugins::PluginDetector;
pub use registry::{GemEnvironment, GemSpec, PackageRegistry, StaticRegistry};
