//! Symbol generator
//!
//! Projects catalog entries onto string constants. The mapping is pure: the
//! same entries always produce the same `GeneratedFile`, in the same order.

use std::collections::BTreeMap;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{AcsymError, AcsymResult};
use crate::models::{AssetEntry, AssetKind, GeneratedConstant, GeneratedFile};
use crate::sanitize;

/// Default prefix for image symbols
pub const DEFAULT_IMAGE_PREFIX: &str = "ACImageName";

/// Default prefix for color symbols
pub const DEFAULT_COLOR_PREFIX: &str = "ACColorName";

/// Generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGenerator {
    image_prefix: String,
    color_prefix: String,
    module_private: bool,
}

impl Default for SymbolGenerator {
    fn default() -> Self {
        Self {
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            color_prefix: DEFAULT_COLOR_PREFIX.to_string(),
            module_private: true,
        }
    }
}

impl SymbolGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_prefix = prefix.into();
        self
    }

    pub fn with_color_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.color_prefix = prefix.into();
        self
    }

    pub fn with_module_private(mut self, module_private: bool) -> Self {
        self.module_private = module_private;
        self
    }

    pub fn prefix_for(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Color => &self.color_prefix,
            AssetKind::Image => &self.image_prefix,
        }
    }

    pub fn module_private(&self) -> bool {
        self.module_private
    }

    /// Generate the constant set for a list of entries.
    ///
    /// Output is grouped by kind (colors, then images) and sorted by catalog
    /// name within each group. Fails without partial output on the first
    /// invalid or colliding name.
    pub fn generate(&self, entries: &[AssetEntry]) -> AcsymResult<GeneratedFile> {
        sanitize::validate_prefix(&self.image_prefix)?;
        sanitize::validate_prefix(&self.color_prefix)?;

        let mut sorted: Vec<&AssetEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));

        // lowercased catalog name -> original name
        let mut seen_names: HashMap<String, &str> = HashMap::new();
        // symbol -> original name
        let mut seen_symbols: BTreeMap<String, &str> = BTreeMap::new();
        let mut constants = Vec::with_capacity(sorted.len());

        for entry in sorted {
            let symbol = sanitize::symbol_name(self.prefix_for(entry.kind), &entry.name)?;
            trace!(name = %entry.name, %symbol, "sanitized asset name");

            if let Some(existing) = seen_names.get(&entry.name.to_lowercase()) {
                return Err(AcsymError::DuplicateAssetName {
                    name: entry.name.clone(),
                    existing: existing.to_string(),
                    symbol,
                });
            }

            if let Some(existing) = seen_symbols.get(&symbol) {
                return Err(AcsymError::DuplicateAssetName {
                    name: entry.name.clone(),
                    existing: existing.to_string(),
                    symbol,
                });
            }

            seen_names.insert(entry.name.to_lowercase(), &entry.name);
            seen_symbols.insert(symbol.clone(), &entry.name);
            constants.push(GeneratedConstant {
                symbol,
                value: entry.name.clone(),
                kind: entry.kind,
            });
        }

        debug!(count = constants.len(), "generated symbols");

        Ok(GeneratedFile {
            constants,
            module_private: self.module_private,
        })
    }
}

/// Generate `(symbol, literal)` pairs for plain image names under one prefix.
pub fn generate_symbols<S: AsRef<str>>(
    names: &[S],
    prefix: &str,
) -> AcsymResult<Vec<(String, String)>> {
    let entries: Vec<AssetEntry> = names
        .iter()
        .map(|n| AssetEntry::image(n.as_ref()))
        .collect();

    SymbolGenerator::new()
        .with_image_prefix(prefix)
        .generate(&entries)
        .map(|file| file.pairs())
}
