#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let catalog = acsym::Catalog::from_manifest(content, Path::new("assets.txt"));
        let _ = acsym::SymbolGenerator::new().generate(catalog.entries());
    }
});
