//! Command implementations for the acsym binary.

pub mod check;
pub mod generate;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::debug;

use acsym::config::{resolve_config_path, CONFIG_FILE_NAME};
use acsym::{AssetEntry, AssetKind, Catalog, Config};

use crate::cli::InputArgs;

/// Everything a command needs: merged configuration plus the loaded assets
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    /// Directory relative output paths resolve against
    pub base: PathBuf,
    pub entries: Vec<AssetEntry>,
    pub only_variants: Vec<String>,
}

impl Session {
    /// Resolve configuration (CLI > env > file > defaults) and load the catalog
    pub fn load(config_path: Option<&Path>, input: &InputArgs, json: bool) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, base) = match resolve_config_path(config_path, &cwd) {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                let (config, warnings) = Config::load_with_warnings(&path)?;
                for warning in &warnings {
                    crate::ui::error::print_config_warning(warning, json);
                }
                let base = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| cwd.join(p))
                    .unwrap_or_else(|| cwd.clone());
                (config, base)
            }
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                (Config::default(), cwd.clone())
            }
        };

        let mut config = apply_cli_overrides(config.with_env_overrides(), input, &cwd);

        let catalog_paths: Vec<PathBuf> = if input.catalogs.is_empty() {
            config.catalog.paths.iter().map(|p| base.join(p)).collect()
        } else {
            input.catalogs.iter().map(|p| cwd.join(p)).collect()
        };
        config.catalog.paths = catalog_paths;

        let names = input.names.as_deref().unwrap_or_default();
        if config.catalog.paths.is_empty() && names.is_empty() {
            bail!(
                "no asset catalog given: pass --catalog, --names, or set [catalog].paths in {}",
                CONFIG_FILE_NAME
            );
        }

        let mut catalog = Catalog::load_all(&config.catalog.paths)?;
        catalog.merge(Catalog::from_names(AssetKind::Image, names));
        debug!(assets = catalog.len(), "catalog loaded");

        Ok(Self {
            config,
            base,
            entries: catalog.into_entries(),
            only_variants: input.variants.clone(),
        })
    }
}

fn apply_cli_overrides(mut config: Config, input: &InputArgs, cwd: &Path) -> Config {
    if let Some(prefix) = &input.prefix {
        config.symbols.image_prefix = prefix.clone();
    }
    if let Some(prefix) = &input.color_prefix {
        config.symbols.color_prefix = prefix.clone();
    }
    if input.public {
        config.symbols.module_private = false;
    }
    if let Some(languages) = &input.languages {
        config.output.languages = languages.clone();
    }
    if let Some(dir) = &input.output {
        // CLI paths are relative to the working directory, not the config file
        config.output.dir = cwd.join(dir);
    }
    config
}

/// Path for display: relative to the working directory when possible
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
