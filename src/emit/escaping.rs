//! String literal escaping for generated sources
//!
//! Catalog names never contain control characters (the sanitizer rejects
//! them), so only backslashes and double quotes need escaping.

/// Escape a value for an Objective-C `@"..."` literal
pub fn escape_objc(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape a value for a Swift `"..."` literal
pub fn escape_swift(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
