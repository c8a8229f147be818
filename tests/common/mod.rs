//! Common test utilities for acsym CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory plus helpers to build
//! asset catalogs and run the acsym binary in it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Environment variables that change acsym behaviour and must not leak in
const ISOLATED_VARS: &[&str] = &[
    "ACSYM_IMAGE_PREFIX",
    "ACSYM_COLOR_PREFIX",
    "ACSYM_MODULE_PRIVATE",
    "ACSYM_LANGUAGES",
    "ACSYM_OUTPUT_DIR",
    "ACSYM_LOG",
    "CI",
    "GITHUB_ACTIONS",
    "XCODE_VERSION_ACTUAL",
];

/// The header Xcode generated for the Simplr catalog
pub const SIMPLR_HEADER: &str = include_str!("../fixtures/GeneratedAssetSymbols.h");

/// Image names in the Simplr catalog
pub const SIMPLR_IMAGES: &[&str] = &["bcs-logo", "simplr-dark", "simplr-light"];

/// Result of running the acsym binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is not JSON"))
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    /// Create `<catalog>/<name>.imageset` (or `.colorset`) folders
    pub fn add_assets(&self, catalog: &str, folders: &[&str]) {
        let root = self.path(catalog);
        fs::create_dir_all(&root).unwrap();
        write_contents_json(&root, None);
        for folder in folders {
            let dir = root.join(folder);
            fs::create_dir_all(&dir).unwrap();
            write_contents_json(&dir, None);
        }
    }

    /// Create the Simplr catalog at `Simplr/Assets.xcassets`
    pub fn simplr_catalog(&self) -> &'static str {
        let catalog = "Simplr/Assets.xcassets";
        let folders: Vec<String> = SIMPLR_IMAGES
            .iter()
            .map(|n| format!("{}.imageset", n))
            .collect();
        let folders: Vec<&str> = folders.iter().map(String::as_str).collect();
        self.add_assets(catalog, &folders);
        catalog
    }

    pub fn remove_asset(&self, catalog: &str, folder: &str) {
        fs::remove_dir_all(self.path(catalog).join(folder)).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_acsym"));
        cmd.current_dir(self.project_root.path()).args(args);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run acsym");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn write_contents_json(dir: &Path, properties: Option<&str>) {
    let body = match properties {
        Some(props) => format!(
            "{{\n  \"info\" : {{ \"author\" : \"xcode\", \"version\" : 1 }},\n  \"properties\" : {}\n}}\n",
            props
        ),
        None => "{\n  \"info\" : { \"author\" : \"xcode\", \"version\" : 1 }\n}\n".to_string(),
    };
    fs::write(dir.join("Contents.json"), body).unwrap();
}

/// Mark a catalog folder as providing a namespace
pub fn provide_namespace(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    write_contents_json(dir, Some("{ \"provides-namespace\" : true }"));
}
