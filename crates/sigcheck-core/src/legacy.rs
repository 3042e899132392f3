//! Legacy package signature hash.
//!
//! Older catalog entries identify a signer by the MD5 of the *lowercase hex
//! text* of the certificate, not of the certificate bytes. Existing records
//! depend on this exact encoding, so it must not be changed to hash the raw
//! bytes.

use crate::digest::DigestAlgorithm;
use crate::error::FingerprintResult;

/// Legacy signature hash of raw certificate bytes, as lowercase hex.
///
/// Returns an empty string if the digest could not be computed.
pub fn legacy_sig_hash(cert: &[u8]) -> String {
    match try_legacy_sig_hash(cert) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "unable to compute legacy signature hash");
            String::new()
        }
    }
}

/// Legacy signature hash, reporting digest failures.
pub fn try_legacy_sig_hash(cert: &[u8]) -> FingerprintResult<String> {
    let algorithm = DigestAlgorithm::from_name("md5")?;
    let hex_text = hex::encode(cert);
    Ok(hex::encode(algorithm.digest(hex_text.as_bytes())))
}
