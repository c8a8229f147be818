//! Build variants
//!
//! A variant is one (build configuration × platform) combination such as
//! `Debug-iphonesimulator`. Variants share the generation logic and may only
//! differ in which subset of the catalog they include. Subsets are selected
//! with gitignore-style patterns matched against catalog names.

use std::collections::HashSet;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AcsymError, AcsymResult};
use crate::models::AssetEntry;

/// Variant as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub name: String,

    /// Only these assets (all when empty)
    #[serde(default)]
    pub include: Vec<String>,

    /// Never these assets
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl VariantConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// Compiled pattern set for one variant
#[derive(Debug)]
pub struct Variant {
    name: Option<String>,
    include: Option<Gitignore>,
    exclude: Option<Gitignore>,
}

impl Variant {
    /// The single variant used when none are configured
    pub fn unnamed() -> Self {
        Self {
            name: None,
            include: None,
            exclude: None,
        }
    }

    /// Compile a configured variant's patterns
    pub fn compile(config: &VariantConfig) -> AcsymResult<Self> {
        Ok(Self {
            name: Some(config.name.clone()),
            include: build_matcher(&config.include)?,
            exclude: build_matcher(&config.exclude)?,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True if the entry belongs to this variant's subset
    pub fn includes(&self, entry: &AssetEntry) -> bool {
        let included = match &self.include {
            Some(m) => m.matched(&entry.name, false).is_ignore(),
            None => true,
        };
        let excluded = match &self.exclude {
            Some(m) => m.matched(&entry.name, false).is_ignore(),
            None => false,
        };
        included && !excluded
    }

    /// Filter entries down to this variant's subset
    pub fn select(&self, entries: &[AssetEntry]) -> Vec<AssetEntry> {
        entries
            .iter()
            .filter(|e| self.includes(e))
            .cloned()
            .collect()
    }
}

fn build_matcher(patterns: &[String]) -> AcsymResult<Option<Gitignore>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GitignoreBuilder::new("");
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| AcsymError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }

    let matcher = builder.build().map_err(|e| AcsymError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })?;
    Ok(Some(matcher))
}

/// Compile the configured variants, or the single unnamed one
pub fn compile_variants(configs: &[VariantConfig]) -> AcsymResult<Vec<Variant>> {
    if configs.is_empty() {
        return Ok(vec![Variant::unnamed()]);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for config in configs {
        if !seen.insert(config.name.as_str()) {
            return Err(AcsymError::DuplicateVariant {
                name: config.name.clone(),
            });
        }
    }

    configs.iter().map(Variant::compile).collect()
}
