//! Error types for fingerprinting and integrity checks.
//!
//! None of these cross the public boundary of the fingerprint, legacy or
//! integrity entry points: they are logged where they are recovered and turned
//! into an absent result. They are public so callers using the `try_*`
//! helpers and the CLI can classify failures.

use std::fmt;
use std::path::PathBuf;

/// Fingerprint and digest errors.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// Key material is too short to be a signing certificate.
    #[error("key is {len} bytes, shorter than the {min} byte minimum")]
    InvalidInputLength { len: usize, min: usize },

    /// Hex key string is empty, has a non-hex character, or is malformed.
    #[error("invalid hex encoding: {reason}")]
    InvalidHexEncoding { reason: String },

    /// Requested digest algorithm is not available.
    #[error("unsupported digest algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// File could not be opened or read to the end.
    #[error("{kind} while reading {}: {message}", path.display())]
    Io {
        kind: IoFailureKind,
        path: PathBuf,
        message: String,
    },
}

impl FingerprintError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad caller input
            Self::InvalidInputLength { .. } => 1,
            Self::InvalidHexEncoding { .. } => 1,
            Self::UnsupportedAlgorithm { .. } => 1,

            // Integrity could not be established; not a mismatch
            Self::Io { .. } => 1,
        }
    }

    /// Build an I/O error, classifying the underlying failure.
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            kind: IoFailureKind::classify(err),
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Diagnostic category of a file read failure.
///
/// Only the log line depends on this. Every category yields the same absent
/// result at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFailureKind {
    /// The storage layer failed to read (EIO, filesystem corruption).
    StorageFault,
    /// The file no longer exists, e.g. deleted by another process.
    Vanished,
    /// Anything else (permissions, is-a-directory, ...).
    Other,
}

// errno values are stable on every unix we run on
#[cfg(unix)]
const ENOENT: i32 = 2;
#[cfg(unix)]
const EIO: i32 = 5;

impl IoFailureKind {
    /// Classify from structured error data, falling back to the message text.
    pub fn classify(err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::Vanished;
        }

        #[cfg(unix)]
        {
            match err.raw_os_error() {
                Some(EIO) => return Self::StorageFault,
                Some(ENOENT) => return Self::Vanished,
                _ => {}
            }
        }

        Self::classify_message(&err.to_string())
    }

    /// Best-effort classification of an error message.
    pub fn classify_message(message: &str) -> Self {
        if message.contains("EIO") || message.contains("I/O error") {
            Self::StorageFault
        } else if message.contains("ENOENT") || message.contains("No such file") {
            Self::Vanished
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for IoFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StorageFault => "storage fault",
            Self::Vanished => "file vanished",
            Self::Other => "i/o failure",
        };
        f.write_str(s)
    }
}

/// Result type for fingerprint operations.
pub type FingerprintResult<T> = Result<T, FingerprintError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn classify_not_found_kind() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(IoFailureKind::classify(&err), IoFailureKind::Vanished);
    }

    #[cfg(unix)]
    #[test]
    fn classify_raw_os_errors() {
        let eio = io::Error::from_raw_os_error(EIO);
        assert_eq!(IoFailureKind::classify(&eio), IoFailureKind::StorageFault);

        let enoent = io::Error::from_raw_os_error(ENOENT);
        assert_eq!(IoFailureKind::classify(&enoent), IoFailureKind::Vanished);
    }

    #[test]
    fn classify_falls_back_to_message() {
        let err = io::Error::other("read failed: EIO (I/O error)");
        assert_eq!(IoFailureKind::classify(&err), IoFailureKind::StorageFault);

        let err = io::Error::other("open failed: ENOENT (No such file or directory)");
        assert_eq!(IoFailureKind::classify(&err), IoFailureKind::Vanished);

        let err = io::Error::other("permission denied");
        assert_eq!(IoFailureKind::classify(&err), IoFailureKind::Other);
    }

    #[test]
    fn exit_codes() {
        let err = FingerprintError::InvalidInputLength { len: 3, min: 256 };
        assert_eq!(err.exit_code(), 1);

        let err = FingerprintError::UnsupportedAlgorithm { name: "crc32".into() };
        assert_eq!(err.exit_code(), 1);

        let err = FingerprintError::io("/tmp/x", &io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/tmp/x"));
    }
}
