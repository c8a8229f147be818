//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AcsymResult;
use crate::generator::{SymbolGenerator, DEFAULT_COLOR_PREFIX, DEFAULT_IMAGE_PREFIX};
use crate::models::Language;
use crate::variant::VariantConfig;

use super::loader::{self, ConfigWarning};

/// Placeholder in `output.dir` replaced by the variant name
pub const VARIANT_PLACEHOLDER: &str = "{variant}";

/// Where to read assets from
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// `.xcassets` directories or manifest files
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// Symbol naming
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolsConfig {
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,

    #[serde(default = "default_color_prefix")]
    pub color_prefix: String,

    /// Mark generated symbols private to the generating module
    #[serde(default = "default_true")]
    pub module_private: bool,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            image_prefix: default_image_prefix(),
            color_prefix: default_color_prefix(),
            module_private: true,
        }
    }
}

fn default_image_prefix() -> String {
    DEFAULT_IMAGE_PREFIX.to_string()
}

fn default_color_prefix() -> String {
    DEFAULT_COLOR_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output directory; may contain `{variant}`
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            languages: default_languages(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("DerivedSources")
}

fn default_languages() -> Vec<Language> {
    vec![Language::Objc]
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub symbols: SymbolsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub variants: Vec<VariantConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AcsymResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AcsymResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ACSYM_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Generator configured from the `[symbols]` section
    pub fn generator(&self) -> SymbolGenerator {
        SymbolGenerator::new()
            .with_image_prefix(&self.symbols.image_prefix)
            .with_color_prefix(&self.symbols.color_prefix)
            .with_module_private(self.symbols.module_private)
    }

    /// Languages to emit, de-duplicated in configured order
    pub fn languages(&self) -> Vec<Language> {
        let mut out: Vec<Language> = Vec::new();
        for language in &self.output.languages {
            if !out.contains(language) {
                out.push(*language);
            }
        }
        out
    }

    /// Output directory for a variant, relative to `base`
    pub fn output_dir(&self, base: &Path, variant: Option<&str>) -> PathBuf {
        let raw = self.output.dir.to_string_lossy();
        let dir = match variant {
            Some(name) if raw.contains(VARIANT_PLACEHOLDER) => {
                PathBuf::from(raw.replace(VARIANT_PLACEHOLDER, name))
            }
            Some(name) => self.output.dir.join(name),
            None => PathBuf::from(raw.replace(VARIANT_PLACEHOLDER, "")),
        };
        base.join(dir)
    }
}
