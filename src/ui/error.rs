use crossterm::style::Stylize;

use acsym::config::ConfigWarning;
use acsym::AcsymError;

use crate::ui::ci::{Diagnostic, Severity};
use crate::ui::json::events::{ErrorEvent, WarningEvent};

const ANNOTATION_TITLE: &str = "acsym";

fn format_error_with(err: &anyhow::Error, supports_color: bool) -> String {
    let label = if supports_color {
        format!("{}", "[ERROR]".red().bold())
    } else {
        "[ERROR]".to_string()
    };

    let mut out = format!("{} {}\n", label, err);
    if let Some(acsym) = err.downcast_ref::<AcsymError>() {
        if let Some(name) = acsym.asset_name() {
            out.push_str(&format!("  asset: {}\n", name));
        }
        if let Some(file) = acsym.file() {
            out.push_str(&format!("  file:  {}\n", file.display()));
        }
        if let Some(fix) = fix_hint(acsym) {
            out.push_str(&format!("  fix:   {}\n", fix));
        }
    }
    out
}

fn fix_hint(err: &AcsymError) -> Option<&'static str> {
    match err {
        AcsymError::DuplicateAssetName { .. } => {
            Some("rename one of the assets so their symbols differ")
        }
        AcsymError::InvalidAssetName { .. } => {
            Some("asset names need at least one letter or digit and must not start with a digit")
        }
        AcsymError::InvalidPrefix { .. } => Some("use a prefix such as ACImageName"),
        AcsymError::UnknownVariant { .. } => Some("add a [[variants]] entry to acsym.toml"),
        AcsymError::DuplicateVariant { .. } => Some("give every [[variants]] entry its own name"),
        AcsymError::OutputCollision { .. } => {
            Some("put {variant} in [output].dir so each variant gets its own directory")
        }
        _ => None,
    }
}

/// Stable code for JSON error events
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<AcsymError>() {
        Some(AcsymError::InvalidAssetName { .. }) => "INVALID_ASSET_NAME",
        Some(AcsymError::DuplicateAssetName { .. }) => "DUPLICATE_ASSET_NAME",
        Some(AcsymError::Io(_)) => "IO",
        Some(AcsymError::CatalogNotFound { .. }) => "CATALOG_NOT_FOUND",
        Some(AcsymError::InvalidContents { .. }) => "INVALID_CONTENTS",
        Some(AcsymError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(AcsymError::InvalidPrefix { .. }) => "INVALID_PREFIX",
        Some(AcsymError::InvalidPattern { .. }) => "INVALID_PATTERN",
        Some(AcsymError::UnknownVariant { .. }) => "UNKNOWN_VARIANT",
        Some(AcsymError::DuplicateVariant { .. }) => "DUPLICATE_VARIANT",
        Some(AcsymError::OutputCollision { .. }) => "OUTPUT_COLLISION",
        None => "ERROR",
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let acsym = err.downcast_ref::<AcsymError>();

    if json {
        let event = ErrorEvent::new(error_code(err), err.to_string())
            .with_asset(acsym.and_then(AcsymError::asset_name));
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let message = err.to_string();
    let file = acsym
        .and_then(AcsymError::file)
        .map(|p| p.display().to_string());
    let diagnostic = Diagnostic::new(Severity::Error, &message).at(file.as_deref(), None);

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_xcode {
        // Xcode already shows the build log; one issue line is enough
        eprintln!("{}", diagnostic.xcode_line());
        return;
    }
    if caps.is_github_actions {
        println!("{}", diagnostic.github_annotation(ANNOTATION_TITLE));
    }

    eprint!("{}", format_error_with(err, caps.supports_color));
}

/// Surface a non-fatal config warning where the caller's tooling will see it
pub fn print_config_warning(warning: &ConfigWarning, json: bool) {
    tracing::warn!("{}", warning);

    if json {
        let _ = crate::ui::json::emit_event(&WarningEvent::new(warning.to_string()));
        return;
    }

    let message = warning.to_string();
    let file = warning.file.display().to_string();
    let diagnostic =
        Diagnostic::new(Severity::Warning, &message).at(Some(file.as_str()), warning.line);

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_xcode {
        eprintln!("{}", diagnostic.xcode_line());
    } else if caps.is_github_actions {
        println!("{}", diagnostic.github_annotation(ANNOTATION_TITLE));
    }
}
