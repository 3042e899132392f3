//! Property tests for fingerprints, legacy hashes and display grouping.

use proptest::prelude::*;
use sigcheck_core::{
    fingerprint_from_bytes, fingerprint_from_hex_key, format_fingerprint, legacy_sig_hash,
    render_fingerprint, MIN_KEY_LEN,
};

const PLACEHOLDER: &str = "invalid";

fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

proptest! {
    #[test]
    fn long_keys_fingerprint_to_64_uppercase_hex(key in prop::collection::vec(any::<u8>(), MIN_KEY_LEN..2048)) {
        let fp = fingerprint_from_bytes(&key).expect("fingerprint for long key");
        prop_assert_eq!(fp.as_str().len(), 64);
        prop_assert!(fp.as_str().chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));

        let again = fingerprint_from_bytes(&key).expect("fingerprint for long key");
        prop_assert_eq!(fp, again);
    }

    #[test]
    fn short_keys_have_no_fingerprint(key in prop::collection::vec(any::<u8>(), 0..MIN_KEY_LEN)) {
        prop_assert!(fingerprint_from_bytes(&key).is_none());
    }

    #[test]
    fn non_hex_key_strings_have_no_fingerprint(
        key in prop::collection::vec(any::<u8>(), MIN_KEY_LEN..512),
        pos in any::<prop::sample::Index>(),
        bad in "[g-zG-Z !#:_\\-]",
    ) {
        let mut key_hex = hex::encode(&key);
        let at = pos.index(key_hex.len());
        key_hex.replace_range(at..at + 1, &bad);
        prop_assert!(fingerprint_from_hex_key(&key_hex).is_none());
    }

    #[test]
    fn legacy_hash_is_md5_of_lowercase_hex_text(cert in prop::collection::vec(any::<u8>(), 0..1024)) {
        let expected = md5_hex(hex::encode(&cert).as_bytes());
        prop_assert_eq!(legacy_sig_hash(&cert), expected);
    }

    #[test]
    fn valid_fingerprints_group_into_32_pairs(fp in "[0-9a-fA-F]{64}") {
        let out = format_fingerprint(&fp, PLACEHOLDER);
        let groups: Vec<&str> = out.split(' ').collect();
        prop_assert_eq!(groups.len(), 32);
        prop_assert!(groups.iter().all(|g| g.len() == 2));
        prop_assert_eq!(out.replace(' ', ""), fp);
    }

    #[test]
    fn wrong_length_yields_placeholder(fp in "[0-9a-fA-F]{0,200}") {
        prop_assume!(fp.len() != 64);
        prop_assert_eq!(format_fingerprint(&fp, PLACEHOLDER), PLACEHOLDER);
        prop_assert!(render_fingerprint(&fp).is_none());
    }

    #[test]
    fn non_hex_yields_placeholder(
        prefix in "[0-9A-F]{0,63}",
        bad in "[g-zG-Z ]",
    ) {
        let mut fp = prefix;
        fp.push_str(&bad);
        while fp.len() < 64 {
            fp.push('A');
        }
        prop_assert_eq!(format_fingerprint(&fp, PLACEHOLDER), PLACEHOLDER);
    }
}

#[test]
fn fingerprint_from_hex_matches_bytes() {
    let key: Vec<u8> = (0..=255).cycle().take(1000).collect();
    assert_eq!(
        fingerprint_from_hex_key(&hex::encode(&key)),
        fingerprint_from_bytes(&key)
    );
}
