//! Input validation patterns.
//!
//! Patterns compile once on first use and are immutable afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("hex pattern is valid"));

static SAFE_PACKAGE_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._]+$").expect("package name pattern is valid"));

/// Non-empty and made of hex digits only.
pub fn is_hex_string(s: &str) -> bool {
    HEX_PATTERN.is_match(s)
}

/// Whether a package name is safe to use as a catalog lookup key.
///
/// Not a full package-name grammar: it only rejects anything outside
/// `[a-zA-Z0-9._]`.
pub fn is_safe_package_name(name: Option<&str>) -> bool {
    match name {
        Some(name) if !name.is_empty() => SAFE_PACKAGE_NAME_PATTERN.is_match(name),
        _ => false,
    }
}
