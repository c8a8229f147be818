//! Objective-C header emitter
//!
//! Output matches the header Xcode writes to `DerivedSources`, so the file
//! can replace it byte for byte.

use std::fmt::Write;

use super::escaping::escape_objc;
use super::Emitter;
use crate::models::{GeneratedFile, Language};

/// Macro used to mark symbols `swift_private`
const PRIVATE_MACRO: &str = "AC_SWIFT_PRIVATE";

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcEmitter;

impl Emitter for ObjcEmitter {
    fn language(&self) -> Language {
        Language::Objc
    }

    fn file_name(&self) -> &'static str {
        "GeneratedAssetSymbols.h"
    }

    fn render(&self, file: &GeneratedFile) -> String {
        let mut out = String::new();
        out.push_str("#import <Foundation/Foundation.h>\n\n");

        if file.module_private {
            let _ = writeln!(out, "#if __has_attribute(swift_private)");
            let _ = writeln!(
                out,
                "#define {} __attribute__((swift_private))",
                PRIVATE_MACRO
            );
            let _ = writeln!(out, "#else");
            let _ = writeln!(out, "#define {}", PRIVATE_MACRO);
            let _ = writeln!(out, "#endif\n");
        }

        let marker = if file.module_private {
            format!(" {}", PRIVATE_MACRO)
        } else {
            String::new()
        };

        for constant in &file.constants {
            let _ = writeln!(
                out,
                "/// The \"{}\" asset catalog {} resource.",
                constant.value,
                constant.kind.noun()
            );
            let _ = writeln!(
                out,
                "static NSString * const {}{} = @\"{}\";\n",
                constant.symbol,
                marker,
                escape_objc(&constant.value)
            );
        }

        if file.module_private {
            let _ = writeln!(out, "#undef {}", PRIVATE_MACRO);
        }

        out
    }
}
