use anyhow::Result;

use acsym::plan::resolve_variants;

use super::Session;
use crate::ui::json::events::{AssetEvent, CompleteEvent, StartEvent};

pub fn cmd_list(session: &Session, json: bool) -> Result<()> {
    if json {
        let _ = crate::ui::json::emit_event(&StartEvent::new("list"));
    }

    let generator = session.config.generator();
    let variants = resolve_variants(&session.config, &session.only_variants)?;

    for variant in &variants {
        let generated = generator.generate(&variant.select(&session.entries))?;

        if !json {
            if let Some(name) = variant.name() {
                println!("{} ({} assets)", name, generated.len());
            }
        }

        let indent = if variant.name().is_some() { "  " } else { "" };
        for constant in &generated.constants {
            if json {
                let _ = crate::ui::json::emit_event(&AssetEvent::new(
                    &constant.value,
                    constant.kind.noun(),
                    &constant.symbol,
                    variant.name(),
                ));
            } else {
                println!(
                    "{}{:<6} {} = \"{}\"",
                    indent,
                    constant.kind.noun(),
                    constant.symbol,
                    constant.value
                );
            }
        }
    }

    if json {
        let _ = crate::ui::json::emit_event(&CompleteEvent::success("list"));
    }
    Ok(())
}
