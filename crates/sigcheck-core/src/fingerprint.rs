//! Signing-certificate trust fingerprints.
//!
//! A fingerprint is the SHA-256 digest of the raw DER bytes of a signing
//! certificate, rendered as 64 uppercase hex characters. This is the value
//! `keytool -list -v` prints, and what catalogs record as the trusted
//! signer of a package.

use std::fmt;

use serde::Serialize;

use crate::digest::DigestAlgorithm;
use crate::error::{FingerprintError, FingerprintResult};
use crate::validate::is_hex_string;

/// Minimum size of key material that can be fingerprinted.
///
/// Anything shorter cannot be a real signing certificate. The bound is a
/// compatibility threshold, not a cryptographic one.
pub const MIN_KEY_LEN: usize = 256;

/// Length of a rendered fingerprint in hex characters.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Canonical uppercase hex SHA-256 fingerprint of a signing certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Compare against a recorded fingerprint, ignoring ASCII case.
    pub fn matches(&self, recorded: &str) -> bool {
        self.0.eq_ignore_ascii_case(recorded.trim())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

/// Fingerprint raw certificate bytes.
///
/// Returns `None` for empty or too-short key material, or if the digest
/// could not be computed.
pub fn fingerprint_from_bytes(key: &[u8]) -> Option<Fingerprint> {
    match try_fingerprint(key) {
        Ok(fp) => Some(fp),
        Err(e) => {
            tracing::warn!(len = key.len(), error = %e, "unable to get certificate fingerprint");
            None
        }
    }
}

/// Fingerprint a hex-encoded certificate.
///
/// Returns `None` if the string is empty, contains a non-hex character or
/// does not decode, and otherwise behaves like [`fingerprint_from_bytes`].
pub fn fingerprint_from_hex_key(key_hex: &str) -> Option<Fingerprint> {
    match try_fingerprint_hex(key_hex) {
        Ok(fp) => Some(fp),
        Err(e) => {
            tracing::warn!(error = %e, "signing key certificate was blank or not hex");
            None
        }
    }
}

/// Whether `key` fingerprints to the `recorded` trusted fingerprint.
///
/// Key material that cannot be fingerprinted never matches.
pub fn fingerprint_matches(key: &[u8], recorded: &str) -> bool {
    fingerprint_from_bytes(key).is_some_and(|fp| fp.matches(recorded))
}

/// Fingerprint raw certificate bytes, reporting why it failed.
pub fn try_fingerprint(key: &[u8]) -> FingerprintResult<Fingerprint> {
    if key.len() < MIN_KEY_LEN {
        return Err(FingerprintError::InvalidInputLength {
            len: key.len(),
            min: MIN_KEY_LEN,
        });
    }

    let digest = DigestAlgorithm::Sha256.digest(key);
    Ok(Fingerprint(hex::encode_upper(digest)))
}

/// Fingerprint a hex-encoded certificate, reporting why it failed.
pub fn try_fingerprint_hex(key_hex: &str) -> FingerprintResult<Fingerprint> {
    if key_hex.is_empty() {
        return Err(FingerprintError::InvalidHexEncoding {
            reason: "empty key string".to_string(),
        });
    }
    if !is_hex_string(key_hex) {
        return Err(FingerprintError::InvalidHexEncoding {
            reason: "non-hex character in key string".to_string(),
        });
    }

    let key = hex::decode(key_hex).map_err(|e| FingerprintError::InvalidHexEncoding {
        reason: e.to_string(),
    })?;
    try_fingerprint(&key)
}
