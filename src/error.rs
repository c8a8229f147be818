//! Error types for acsym
//!
//! Every variant is fatal to a generation pass: nothing is written once one
//! of these has been raised.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for acsym operations
pub type AcsymResult<T> = Result<T, AcsymError>;

/// Main error type for acsym operations
#[derive(Error, Debug)]
pub enum AcsymError {
    /// Asset name cannot be turned into a symbol
    #[error("invalid asset name '{name}': {reason}")]
    InvalidAssetName { name: String, reason: String },

    /// Two assets map onto the same symbol (or differ only by case)
    #[error("duplicate asset name '{name}' collides with '{existing}' (symbol {symbol})")]
    DuplicateAssetName {
        name: String,
        existing: String,
        symbol: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog path does not exist
    #[error("asset catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// A Contents.json inside the catalog could not be parsed
    #[error("invalid Contents.json in {file}: {message}")]
    InvalidContents { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Symbol prefix is not a valid identifier fragment
    #[error("invalid symbol prefix '{prefix}' - must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidPrefix { prefix: String },

    /// Variant include/exclude pattern is malformed
    #[error("invalid asset pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Requested variant is not configured
    #[error("unknown variant '{name}'")]
    UnknownVariant { name: String },

    /// Two `[[variants]]` entries share a name
    #[error("duplicate variant name '{name}'")]
    DuplicateVariant { name: String },

    /// Two variants render to the same output file
    #[error("output {path} is written by both variant '{first}' and variant '{second}'")]
    OutputCollision {
        path: PathBuf,
        first: String,
        second: String,
    },
}

impl AcsymError {
    /// Asset name this error is about, if any
    pub fn asset_name(&self) -> Option<&str> {
        match self {
            AcsymError::InvalidAssetName { name, .. }
            | AcsymError::DuplicateAssetName { name, .. } => Some(name),
            _ => None,
        }
    }

    /// File this error points at, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            AcsymError::CatalogNotFound { path } | AcsymError::OutputCollision { path, .. } => {
                Some(path)
            }
            AcsymError::InvalidContents { file, .. } | AcsymError::InvalidConfig { file, .. } => {
                Some(file)
            }
            _ => None,
        }
    }
}
