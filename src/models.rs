//! Core data models for acsym
//!
//! - `AssetEntry`: one named resource read from a catalog
//! - `GeneratedConstant` / `GeneratedFile`: the projection of those entries
//! - `OutputFile`: a rendered artifact ready to be written
//! - Supporting enums: `AssetKind`, `Language`

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of catalog resource
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// `*.colorset`
    Color,
    /// `*.imageset`
    #[default]
    Image,
}

impl AssetKind {
    /// Catalog folder extension for this kind
    pub fn folder_extension(&self) -> &'static str {
        match self {
            AssetKind::Color => "colorset",
            AssetKind::Image => "imageset",
        }
    }

    /// Map a catalog folder extension back to a kind
    pub fn from_folder_extension(ext: &str) -> Option<Self> {
        match ext {
            "colorset" => Some(AssetKind::Color),
            "imageset" => Some(AssetKind::Image),
            _ => None,
        }
    }

    /// Word used in generated doc comments
    pub fn noun(&self) -> &'static str {
        match self {
            AssetKind::Color => "color",
            AssetKind::Image => "image",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Output language for generated symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// Objective-C header (`GeneratedAssetSymbols.h`)
    #[serde(alias = "objective-c")]
    #[value(alias = "objective-c")]
    Objc,
    /// Swift source (`GeneratedAssetSymbols.swift`)
    Swift,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Objc, Language::Swift];

    /// Parse a user-supplied language name (config, env)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "objc" | "objective-c" | "objectivec" => Some(Language::Objc),
            "swift" => Some(Language::Swift),
            _ => None,
        }
    }

    /// Identifier used in config files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Objc => "objc",
            Language::Swift => "swift",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Objc => "Objective-C",
            Language::Swift => "Swift",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named resource in an asset catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Catalog name, including any `Folder/` namespace
    pub name: String,

    pub kind: AssetKind,

    /// Where the entry was found (`None` for inline names)
    pub source_path: Option<PathBuf>,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            source_path: None,
        }
    }

    pub fn image(name: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Image)
    }

    pub fn color(name: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Color)
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }
}

/// One string constant in a generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConstant {
    /// Identifier, e.g. `ACImageNameBcsLogo`
    pub symbol: String,
    /// Literal string value, the original catalog name
    pub value: String,
    pub kind: AssetKind,
}

/// The full, ordered set of constants for one artifact
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedFile {
    pub constants: Vec<GeneratedConstant>,
    /// Mark symbols as private to the generating module
    pub module_private: bool,
}

impl GeneratedFile {
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Constants as `(symbol, value)` pairs
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.constants
            .iter()
            .map(|c| (c.symbol.clone(), c.value.clone()))
            .collect()
    }
}

/// A rendered artifact ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
    language: Language,
    variant: Option<String>,
}

impl OutputFile {
    pub fn new(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        language: Language,
        variant: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language,
            variant,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// SHA-256 of the rendered content (`sha256:<hex>`)
    pub fn hash(&self) -> String {
        hash_content(self.content.as_bytes())
    }
}

/// Compute the `sha256:<hex>` hash of some bytes
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
