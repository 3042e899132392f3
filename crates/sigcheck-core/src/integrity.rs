//! File integrity digests.
//!
//! Files are streamed through a fresh accumulator in bounded chunks. Files
//! may be deleted by another process while being read, and devices with a
//! failing filesystem return EIO mid-read. Neither is reported to the
//! caller: a missing digest means "integrity could not be established",
//! whatever the cause. Only the diagnostic log differs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::IntegrityConfig;
use crate::digest::{digest_reader_with_progress, DigestAlgorithm};
use crate::error::{FingerprintError, FingerprintResult, IoFailureKind};
use crate::progress::{bytes_to_kb, percent};

/// Streaming file hasher.
#[derive(Debug, Clone, Default)]
pub struct FileHasher {
    config: IntegrityConfig,
}

impl FileHasher {
    pub fn new(config: IntegrityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntegrityConfig {
        &self.config
    }

    /// Hex digest of the file at `path`, or `None` if it could not be read
    /// to the end or the algorithm is unknown.
    pub fn digest_file(&self, path: &Path, algorithm: &str) -> Option<String> {
        recover(path, self.try_digest_file(path, algorithm))
    }

    /// Whether the file digest equals `expected` (hex, any case).
    pub fn verify_file(&self, path: &Path, algorithm: &str, expected: &str) -> bool {
        let Some(actual) = self.digest_file(path, algorithm) else {
            return false;
        };

        let matched = actual.eq_ignore_ascii_case(expected.trim());
        if !matched {
            tracing::warn!(
                path = %path.display(),
                expected = %expected,
                actual = %actual,
                "file digest mismatch"
            );
        }
        matched
    }

    /// Hex digest of the file at `path`, reporting why it failed.
    pub fn try_digest_file(&self, path: &Path, algorithm: &str) -> FingerprintResult<String> {
        let algorithm = DigestAlgorithm::from_name(algorithm)?;
        let file = File::open(path).map_err(|e| FingerprintError::io(path, &e))?;
        let total = file.metadata().map(|m| m.len()).unwrap_or(0);
        self.digest_stream(path, file, algorithm, total)
    }

    /// Hash `reader` as the content of `path`; `total` is its expected length, 0 if unknown.
    fn digest_stream<R: Read>(
        &self,
        path: &Path,
        reader: R,
        algorithm: DigestAlgorithm,
        total: u64,
    ) -> FingerprintResult<String> {
        digest_reader_with_progress(
            reader,
            algorithm,
            self.config.effective_chunk_size(),
            |read_total| {
                if total > 0 {
                    tracing::trace!(
                        path = %path.display(),
                        kb = bytes_to_kb(read_total),
                        percent = percent(read_total.min(total), total),
                        "hashing"
                    );
                }
            },
        )
        .map_err(|e| FingerprintError::io(path, &e))
    }
}

/// Hex digest of the file at `path` with the default chunk size.
///
/// See [`FileHasher::digest_file`].
pub fn digest_file(path: impl AsRef<Path>, algorithm: &str) -> Option<String> {
    FileHasher::default().digest_file(path.as_ref(), algorithm)
}

/// Whether the file at `path` has the `expected` digest.
///
/// See [`FileHasher::verify_file`].
pub fn verify_file(path: impl AsRef<Path>, algorithm: &str, expected: &str) -> bool {
    FileHasher::default().verify_file(path.as_ref(), algorithm, expected)
}

/// Collapse a failed digest to `None`, logging why.
fn recover(path: &Path, result: FingerprintResult<String>) -> Option<String> {
    match result {
        Ok(hex) => Some(hex),
        Err(e) => {
            log_failure(path, &e);
            None
        }
    }
}

fn log_failure(path: &Path, err: &FingerprintError) {
    match err {
        FingerprintError::Io {
            kind: IoFailureKind::StorageFault,
            message,
            ..
        } => {
            tracing::warn!(
                path = %path.display(),
                error = %message,
                "potential filesystem corruption while hashing file"
            );
        }
        FingerprintError::Io {
            kind: IoFailureKind::Vanished,
            message,
            ..
        } => {
            tracing::debug!(path = %path.display(), error = %message, "file vanished while hashing");
        }
        FingerprintError::Io { message, .. } => {
            tracing::debug!(path = %path.display(), error = %message, "failed to hash file");
        }
        other => {
            tracing::error!(path = %path.display(), error = %other, "failed to hash file");
        }
    }
}
