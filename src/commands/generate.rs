use anyhow::Result;

use acsym::plan::{build_outputs, execute_plan, plan_outputs};

use super::{display_path, Session};
use crate::ui::json::events::{CompleteEvent, FileEvent, StartEvent};

pub fn cmd_generate(session: &Session, dry_run: bool, json: bool) -> Result<()> {
    if json {
        let _ = crate::ui::json::emit_event(&StartEvent::new("generate"));
    }

    let outputs = build_outputs(
        &session.entries,
        &session.config,
        &session.base,
        &session.only_variants,
    )?;
    let plan = plan_outputs(outputs)?;
    let result = execute_plan(&plan, dry_run)?;

    let written_label = if dry_run { "would write" } else { "written" };

    for file in &plan.files {
        let path = file.output.path();
        let status = if result.written.iter().any(|p| p == path) {
            written_label
        } else {
            "unchanged"
        };

        if json {
            let _ = crate::ui::json::emit_event(&FileEvent::new(
                display_path(path),
                status,
                file.output.language().as_str(),
                file.output.variant(),
            ));
        } else {
            println!("  {:<11} {}", status, display_path(path));
        }
    }

    if json {
        let _ = crate::ui::json::emit_event(
            &CompleteEvent::success("generate")
                .with_counts(result.written.len(), result.unchanged.len()),
        );
    } else {
        println!(
            "{} {} file(s), {} unchanged",
            if dry_run { "Would write" } else { "Wrote" },
            result.written.len(),
            result.unchanged.len()
        );
    }

    Ok(())
}
