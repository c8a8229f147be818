//! acsym - asset catalog symbol generator
//!
//! acsym reads the image and color names of an asset catalog and generates a
//! source file of string constants for them, so application code can refer to
//! `ACImageNameBcsLogo` instead of the literal `"bcs-logo"`. Generation is a
//! pure function of the catalog: it is idempotent and all-or-nothing.

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod models;
pub mod plan;
pub mod sanitize;
pub mod variant;
pub mod writer;

// Re-exports for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use emit::{all_emitters, get_emitter, Emitter};
pub use error::{AcsymError, AcsymResult};
pub use generator::{generate_symbols, SymbolGenerator};
pub use models::{AssetEntry, AssetKind, GeneratedConstant, GeneratedFile, Language, OutputFile};
pub use plan::{
    build_outputs, execute_plan, plan_outputs, resolve_variants, FileStatus, GenerationPlan,
};
pub use sanitize::{pascal_case, symbol_name};
pub use variant::{Variant, VariantConfig};
