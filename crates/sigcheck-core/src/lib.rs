//! Signing-certificate fingerprints and file integrity digests.
//!
//! This crate answers the two trust questions a package catalog client asks:
//!
//! - does this signing certificate match a recorded trusted fingerprint?
//! - does this file's content match an expected checksum?
//!
//! It provides:
//!
//! - Named digest algorithms (SHA-256, SHA-512, legacy MD5)
//! - SHA-256 trust fingerprints of raw DER certificate bytes
//! - The legacy MD5-over-hex signature hash used by older catalog records
//! - Streaming file digests that never surface I/O failures to the caller
//! - Display grouping of fingerprints
//!
//! Certificate parsing is the caller's job: every entry point takes raw bytes,
//! a hex string, or a file path.
//!
//! # Quick Start
//!
//! ```no_run
//! use sigcheck_core::{digest_file, fingerprint_from_bytes, format_fingerprint, BAD_FINGERPRINT};
//!
//! let cert = std::fs::read("signer.der").unwrap();
//! if let Some(fp) = fingerprint_from_bytes(&cert) {
//!     println!("{}", format_fingerprint(fp.as_str(), BAD_FINGERPRINT));
//! }
//!
//! match digest_file("app.apk", "sha256") {
//!     Some(hex) => println!("sha256: {hex}"),
//!     None => println!("integrity could not be established"),
//! }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `SIGCHECK_CHUNK_SIZE` | Bytes per read when hashing files (default: 4096) |

pub mod config;
pub mod digest;
pub mod error;
pub mod fingerprint;
pub mod format;
pub mod integrity;
pub mod legacy;
pub mod progress;
pub mod validate;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use config::{IntegrityConfig, DEFAULT_CHUNK_SIZE};
pub use digest::{
    digest_hex, digest_reader, digest_reader_with_progress, hash_bytes, DigestAlgorithm,
    StreamingDigest,
};
pub use error::{FingerprintError, FingerprintResult, IoFailureKind};
pub use fingerprint::{
    fingerprint_from_bytes, fingerprint_from_hex_key, fingerprint_matches, try_fingerprint,
    try_fingerprint_hex, Fingerprint, FINGERPRINT_HEX_LEN, MIN_KEY_LEN,
};
pub use format::{format_fingerprint, render_fingerprint, BAD_FINGERPRINT};
pub use integrity::{digest_file, verify_file, FileHasher};
pub use legacy::{legacy_sig_hash, try_legacy_sig_hash};
pub use progress::{bytes_to_kb, percent};
pub use validate::{is_hex_string, is_safe_package_name};
