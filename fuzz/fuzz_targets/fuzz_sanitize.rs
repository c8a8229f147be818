#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Any successful symbol must be a usable identifier
        if let Ok(symbol) = acsym::symbol_name("ACImageName", name) {
            assert!(acsym::sanitize::is_identifier(&symbol));
        }
    }
});
