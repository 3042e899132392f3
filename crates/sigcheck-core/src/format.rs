//! Display rendering of fingerprints.

use crate::fingerprint::FINGERPRINT_HEX_LEN;
use crate::validate::is_hex_string;

/// Default placeholder for input that is not a valid fingerprint.
pub const BAD_FINGERPRINT: &str = "Bad fingerprint";

/// Render a fingerprint as space-separated two-character groups.
///
/// Returns `None` unless `fingerprint` is exactly 64 hex characters. Case
/// is preserved as given.
pub fn render_fingerprint(fingerprint: &str) -> Option<String> {
    if fingerprint.len() != FINGERPRINT_HEX_LEN || !is_hex_string(fingerprint) {
        return None;
    }

    // validated as ASCII above, so byte chunks are whole characters
    let groups: Vec<&str> = fingerprint
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect();
    Some(groups.join(" "))
}

/// Render a fingerprint for display, or return `placeholder` if it is invalid.
pub fn format_fingerprint(fingerprint: &str, placeholder: &str) -> String {
    render_fingerprint(fingerprint).unwrap_or_else(|| placeholder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_pairs_with_single_spaces() {
        let fp = "AB".repeat(32);
        let out = format_fingerprint(&fp, BAD_FINGERPRINT);

        assert_eq!(out.split(' ').count(), 32);
        assert_eq!(out.matches(' ').count(), 31);
        assert!(out.split(' ').all(|g| g == "AB"));
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
        assert_eq!(out.replace(' ', ""), fp);
    }

    #[test]
    fn preserves_case() {
        let fp = format!("{}{}", "ab".repeat(16), "CD".repeat(16));
        let out = render_fingerprint(&fp).unwrap();
        assert!(out.starts_with("ab ab"));
        assert!(out.ends_with("CD CD"));
    }

    #[test]
    fn invalid_input_yields_placeholder() {
        assert_eq!(format_fingerprint("", "n/a"), "n/a");
        assert_eq!(format_fingerprint(&"AB".repeat(31), "n/a"), "n/a");
        assert_eq!(format_fingerprint(&"AB".repeat(33), "n/a"), "n/a");

        let mut non_hex = "AB".repeat(32);
        non_hex.replace_range(10..11, "G");
        assert_eq!(format_fingerprint(&non_hex, "n/a"), "n/a");

        // 64 bytes but not 64 ASCII characters
        let multibyte = format!("{}é", "A".repeat(62));
        assert_eq!(multibyte.len(), 64);
        assert_eq!(render_fingerprint(&multibyte), None);
    }
}
