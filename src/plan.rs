//! Generation plan - renders everything before anything is written
//!
//! Stage 1: build_outputs() - generate and render every (variant × language)
//! artifact in memory. Any error here aborts the run with nothing written.
//! Stage 2: plan_outputs() - compare each artifact with what is on disk.
//! Stage 3: execute_plan() - write new and stale artifacts atomically.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::emit::get_emitter;
use crate::error::{AcsymError, AcsymResult};
use crate::models::{hash_content, AssetEntry, OutputFile};
use crate::variant::{compile_variants, Variant};
use crate::writer::{write_if_changed, WriteOutcome};

/// State of an artifact relative to the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No file at the destination yet
    New,
    /// File exists with different content
    Stale,
    /// File exists with identical content
    UpToDate,
}

/// One artifact with its on-disk status
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub output: OutputFile,
    pub status: FileStatus,
    /// Current content on disk, when the file exists, differs, and is UTF-8
    pub existing: Option<String>,
}

/// Result of planning a generation pass
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    pub files: Vec<PlannedFile>,
}

impl GenerationPlan {
    /// Files that need writing
    pub fn pending(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.status != FileStatus::UpToDate)
    }

    pub fn is_up_to_date(&self) -> bool {
        self.pending().next().is_none()
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

/// Result of executing a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// Compile the configured variants, keeping only those named in `only`
/// (all of them when `only` is empty).
pub fn resolve_variants(config: &Config, only: &[String]) -> AcsymResult<Vec<Variant>> {
    for name in only {
        if !config.variants.iter().any(|v| &v.name == name) {
            return Err(AcsymError::UnknownVariant { name: name.clone() });
        }
    }

    Ok(compile_variants(&config.variants)?
        .into_iter()
        .filter(|v| match v.name() {
            Some(name) => only.is_empty() || only.iter().any(|o| o == name),
            None => true,
        })
        .collect())
}

/// Render every artifact for the configured variants and languages.
///
/// `only` restricts generation to the named variants; naming a variant that
/// is not configured is an error.
pub fn build_outputs(
    entries: &[AssetEntry],
    config: &Config,
    base: &Path,
    only: &[String],
) -> AcsymResult<Vec<OutputFile>> {
    let variants = resolve_variants(config, only)?;
    let generator = config.generator();
    let languages = config.languages();
    let mut outputs = Vec::with_capacity(variants.len() * languages.len());

    for variant in &variants {
        let selected = variant.select(entries);
        debug!(
            variant = variant.name().unwrap_or("<default>"),
            assets = selected.len(),
            "selected variant subset"
        );

        let generated = generator.generate(&selected)?;
        let dir = config.output_dir(base, variant.name());

        for language in &languages {
            let emitter = get_emitter(*language);
            let path = dir.join(emitter.file_name());
            if let Some(other) = outputs.iter().find(|o: &&OutputFile| o.path() == path) {
                return Err(AcsymError::OutputCollision {
                    path,
                    first: other.variant().unwrap_or_default().to_string(),
                    second: variant.name().unwrap_or_default().to_string(),
                });
            }
            outputs.push(OutputFile::new(
                path,
                emitter.render(&generated),
                *language,
                variant.name().map(str::to_string),
            ));
        }
    }

    Ok(outputs)
}

/// Compare rendered artifacts with the files on disk. Never writes.
pub fn plan_outputs(outputs: Vec<OutputFile>) -> AcsymResult<GenerationPlan> {
    let mut plan = GenerationPlan::default();

    for output in outputs {
        let path = output.path();
        let (status, existing) = if path.is_file() {
            // Any prior content is replaceable, including bytes that are not UTF-8
            let current = fs::read(path)?;
            if hash_content(&current) == output.hash() {
                (FileStatus::UpToDate, None)
            } else {
                (FileStatus::Stale, String::from_utf8(current).ok())
            }
        } else {
            (FileStatus::New, None)
        };

        plan.files.push(PlannedFile {
            output,
            status,
            existing,
        });
    }

    Ok(plan)
}

/// Write every pending artifact. With `dry_run`, report without writing.
pub fn execute_plan(plan: &GenerationPlan, dry_run: bool) -> AcsymResult<GenerationResult> {
    let mut result = GenerationResult::default();

    for file in &plan.files {
        let path = file.output.path().to_path_buf();
        if file.status == FileStatus::UpToDate {
            result.unchanged.push(path);
            continue;
        }

        if dry_run {
            result.written.push(path);
            continue;
        }

        match write_if_changed(&path, file.output.content())? {
            WriteOutcome::Written => result.written.push(path),
            WriteOutcome::Unchanged => result.unchanged.push(path),
        }
    }

    Ok(result)
}
