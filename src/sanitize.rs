//! Catalog name → identifier sanitization
//!
//! A catalog name is split on every character that is not ASCII alphanumeric.
//! Each segment gets its first character uppercased; the rest of the segment
//! is kept as written. `simplr-dark` becomes `SimplrDark`, `Icons/closeButton`
//! becomes `IconsCloseButton`.

use crate::error::{AcsymError, AcsymResult};

/// Convert a catalog name into a PascalCase identifier fragment
pub fn pascal_case(name: &str) -> AcsymResult<String> {
    if name.trim().is_empty() {
        return Err(invalid(name, "name is empty"));
    }

    if name.chars().any(char::is_control) {
        return Err(invalid(name, "name contains control characters"));
    }

    let mut out = String::with_capacity(name.len());
    for segment in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
    {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() {
        return Err(invalid(name, "name has no alphanumeric characters"));
    }

    Ok(out)
}

/// Build the full symbol name for a catalog name under a prefix
pub fn symbol_name(prefix: &str, name: &str) -> AcsymResult<String> {
    let fragment = pascal_case(name)?;
    let symbol = format!("{}{}", prefix, fragment);

    if symbol.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(name, "symbol would start with a digit"));
    }

    Ok(symbol)
}

/// Check that a prefix can start an identifier
pub fn validate_prefix(prefix: &str) -> AcsymResult<()> {
    let mut chars = prefix.chars();
    let valid = match chars.next() {
        None => true,
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
    };

    if valid {
        Ok(())
    } else {
        Err(AcsymError::InvalidPrefix {
            prefix: prefix.to_string(),
        })
    }
}

/// True if `s` is a complete C / Swift identifier
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && validate_prefix(s).is_ok()
}

fn invalid(name: &str, reason: &str) -> AcsymError {
    AcsymError::InvalidAssetName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
