//! Configuration module for areatree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AREATREE_*)
//! 3. Project config (./areatree.toml)
//! 4. User config (~/.config/areatree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, OutputFormat, SelectionConfig, Verbosity};
