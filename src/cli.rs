use std::path::PathBuf;

use acsym::Language;
use clap::{Args, Parser, Subcommand};

/// acsym - asset catalog symbol generator
#[derive(Parser, Debug)]
#[command(name = "acsym")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events (for CI and build scripts)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./acsym.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Asset catalog (.xcassets) or manifest file; replaces [catalog].paths
    #[arg(short, long = "catalog")]
    pub catalogs: Vec<PathBuf>,

    /// Image asset names given inline
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Output directory (may contain {variant})
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix for image symbols
    #[arg(long)]
    pub prefix: Option<String>,

    /// Prefix for color symbols
    #[arg(long)]
    pub color_prefix: Option<String>,

    /// Languages to emit
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Option<Vec<Language>>,

    /// Only process this variant (repeatable)
    #[arg(long = "variant")]
    pub variants: Vec<String>,

    /// Do not mark symbols private to the generating module
    #[arg(long)]
    pub public: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate symbol files from the asset catalog
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify generated files are current (exits non-zero when stale)
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List catalog assets and their symbols
    List {
        #[command(flatten)]
        input: InputArgs,
    },
}
