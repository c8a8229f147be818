//! Swift emitter

use std::fmt::Write;

use super::escaping::escape_swift;
use super::Emitter;
use crate::models::{GeneratedFile, Language};

#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftEmitter;

impl Emitter for SwiftEmitter {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn file_name(&self) -> &'static str {
        "GeneratedAssetSymbols.swift"
    }

    fn render(&self, file: &GeneratedFile) -> String {
        let visibility = if file.module_private {
            "internal"
        } else {
            "public"
        };

        let mut out = String::from("import Foundation\n");
        for constant in &file.constants {
            let _ = writeln!(
                out,
                "\n/// The \"{}\" asset catalog {} resource.",
                constant.value,
                constant.kind.noun()
            );
            let _ = writeln!(
                out,
                "{} let {}: String = \"{}\"",
                visibility,
                constant.symbol,
                escape_swift(&constant.value)
            );
        }
        out
    }
}
