//! Asset catalog reader
//!
//! Reads the named entries of an `.xcassets` directory, or of a plain
//! manifest file listing one name per line. The catalog is never modified.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{AcsymError, AcsymResult};
use crate::models::{AssetEntry, AssetKind};

/// Name of the metadata file inside every catalog folder
const CONTENTS_JSON: &str = "Contents.json";

/// The entries read from one or more catalogs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<AssetEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct FolderContents {
    #[serde(default)]
    properties: FolderProperties,
}

#[derive(Debug, Default, Deserialize)]
struct FolderProperties {
    #[serde(default, rename = "provides-namespace")]
    provides_namespace: bool,
}

impl Catalog {
    /// Load a catalog directory or a manifest file
    pub fn load(path: &Path) -> AcsymResult<Self> {
        if !path.exists() {
            return Err(AcsymError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut catalog = if path.is_dir() {
            let mut entries = Vec::new();
            walk_folder(path, None, &mut entries)?;
            Self { entries }
        } else {
            let content = fs::read_to_string(path)?;
            Self::from_manifest(&content, path)
        };

        catalog.sort();
        debug!(
            path = %path.display(),
            entries = catalog.entries.len(),
            "loaded asset catalog"
        );
        Ok(catalog)
    }

    /// Load and merge several catalogs
    pub fn load_all(paths: &[PathBuf]) -> AcsymResult<Self> {
        let mut merged = Self::default();
        for path in paths {
            merged.merge(Self::load(path)?);
        }
        Ok(merged)
    }

    /// Build a catalog from names given in memory
    pub fn from_names<I, S>(kind: AssetKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self {
            entries: names
                .into_iter()
                .map(|n| AssetEntry::new(n, kind))
                .collect(),
        };
        catalog.sort();
        catalog
    }

    /// Parse a manifest: one name per line, `#` comments, optional
    /// `image:` / `color:` kind prefix.
    pub fn from_manifest(content: &str, source: &Path) -> Self {
        let mut entries = Vec::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (kind, name) = if let Some(rest) = trimmed.strip_prefix("color:") {
                (AssetKind::Color, rest.trim())
            } else if let Some(rest) = trimmed.strip_prefix("image:") {
                (AssetKind::Image, rest.trim())
            } else {
                (AssetKind::Image, trimmed)
            };

            entries.push(AssetEntry::new(name, kind).with_source(source));
        }

        let mut catalog = Self { entries };
        catalog.sort();
        catalog
    }

    /// Append another catalog's entries
    pub fn merge(&mut self, other: Catalog) {
        self.entries.extend(other.entries);
        self.sort();
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<AssetEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    }
}

/// Xcode folder types that hold a resource acsym does not generate symbols for
const OTHER_CONTAINERS: &[&str] = &[
    "appiconset",
    "arimageset",
    "arresourcegroup",
    "brandassets",
    "complicationset",
    "cubetextureset",
    "dataset",
    "gcdashboardimage",
    "gcleaderboard",
    "gcleaderboardset",
    "iconset",
    "imagestack",
    "imagestacklayer",
    "launchimage",
    "mipmapset",
    "solidimagestack",
    "solidimagestacklayer",
    "spriteatlas",
    "sticker",
    "stickerpack",
    "stickersequence",
    "symbolset",
    "textureset",
];

fn walk_folder(
    dir: &Path,
    namespace: Option<&str>,
    entries: &mut Vec<AssetEntry>,
) -> AcsymResult<()> {
    let mut children: Vec<(PathBuf, fs::FileType)> = fs::read_dir(dir)?
        .map(|e| e.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<Result<_, _>>()?;
    // read_dir order is platform dependent
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (child, file_type) in children {
        // DirEntry::file_type does not follow links; a linked folder could loop
        if file_type.is_symlink() {
            trace!(path = %child.display(), "skipping symlink in catalog");
            continue;
        }
        if !file_type.is_dir() {
            continue;
        }

        let Some(file_name) = child.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }

        let (stem, ext) = match file_name.rsplit_once('.') {
            Some((stem, ext)) => (stem, ext),
            None => (file_name, ""),
        };

        if let Some(kind) = AssetKind::from_folder_extension(ext) {
            let name = match namespace {
                Some(ns) => format!("{}/{}", ns, stem),
                None => stem.to_string(),
            };
            trace!(%name, %kind, "found catalog entry");
            entries.push(AssetEntry::new(name, kind).with_source(&child));
            continue;
        }

        if OTHER_CONTAINERS.contains(&ext) {
            trace!(folder = %child.display(), "skipping unsupported catalog folder");
            continue;
        }

        // Group folder, possibly with a dot in its name (`Brand.2024`)
        let child_namespace = if provides_namespace(&child)? {
            Some(match namespace {
                Some(ns) => format!("{}/{}", ns, file_name),
                None => file_name.to_string(),
            })
        } else {
            namespace.map(str::to_string)
        };
        walk_folder(&child, child_namespace.as_deref(), entries)?;
    }

    Ok(())
}

fn provides_namespace(folder: &Path) -> AcsymResult<bool> {
    let contents_path = folder.join(CONTENTS_JSON);
    if !contents_path.is_file() {
        return Ok(false);
    }

    let content = fs::read_to_string(&contents_path)?;
    let contents: FolderContents =
        serde_json::from_str(&content).map_err(|e| AcsymError::InvalidContents {
            file: contents_path.clone(),
            message: e.to_string(),
        })?;

    Ok(contents.properties.provides_namespace)
}
