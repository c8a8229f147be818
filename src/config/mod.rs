//! Configuration module for acsym
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ACSYM_*)
//! 3. Config file (`acsym.toml` or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, resolve_config_path, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{CatalogConfig, Config, OutputConfig, SymbolsConfig, VARIANT_PLACEHOLDER};
