use anyhow::{bail, Result};

use acsym::plan::{build_outputs, plan_outputs, FileStatus};

use super::{display_path, Session};
use crate::ui::diff::render_unified_diff;
use crate::ui::json::events::{CompleteEvent, FileEvent, StartEvent};

fn status_label(status: FileStatus) -> &'static str {
    match status {
        FileStatus::New => "missing",
        FileStatus::Stale => "stale",
        FileStatus::UpToDate => "up-to-date",
    }
}

pub fn cmd_check(session: &Session, json: bool, verbose: u8) -> Result<()> {
    if json {
        let _ = crate::ui::json::emit_event(&StartEvent::new("check"));
    }

    let outputs = build_outputs(
        &session.entries,
        &session.config,
        &session.base,
        &session.only_variants,
    )?;
    let plan = plan_outputs(outputs)?;
    let supports_color = crate::ui::terminal::detect_capabilities().supports_color;

    for file in &plan.files {
        let path = display_path(file.output.path());
        let status = status_label(file.status);

        if json {
            let _ = crate::ui::json::emit_event(&FileEvent::new(
                path,
                status,
                file.output.language().as_str(),
                file.output.variant(),
            ));
            continue;
        }

        println!("  {:<10} {}", status, path);
        if verbose > 0 {
            if let Some(existing) = &file.existing {
                print!(
                    "{}",
                    render_unified_diff(&path, existing, file.output.content(), supports_color)
                );
            }
        }
    }

    let out_of_date = plan.pending().count();
    if json {
        let event = if out_of_date == 0 {
            CompleteEvent::success("check")
        } else {
            CompleteEvent::failure("check")
        };
        let _ = crate::ui::json::emit_event(&event.with_stale(out_of_date));
    }

    if out_of_date > 0 {
        bail!(
            "{} generated file(s) out of date; run `acsym generate`",
            out_of_date
        );
    }

    if !json {
        println!("All {} generated file(s) up to date", plan.files.len());
    }
    Ok(())
}
