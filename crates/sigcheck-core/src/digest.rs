//! Named digest algorithms and the hashing primitives built on them.
//!
//! Every call builds its own hasher, so concurrent callers never share a
//! mutable digest object.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use sha2::{Digest, Sha256, Sha512};

use crate::error::{FingerprintError, FingerprintResult};

/// Digest algorithms available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-256, used for trust fingerprints and file checksums.
    Sha256,
    /// SHA-512.
    Sha512,
    /// MD5, kept only for legacy signature hashes.
    Md5,
}

impl DigestAlgorithm {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Md5 => "md5",
        }
    }

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
            Self::Md5 => 16,
        }
    }

    /// Digest length in hex characters.
    pub fn hex_len(&self) -> usize {
        self.output_len() * 2
    }

    /// Look up an algorithm by case-insensitive name.
    pub fn from_name(name: &str) -> FingerprintResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            "md5" => Ok(Self::Md5),
            _ => Err(FingerprintError::UnsupportedAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// A fresh accumulator for this algorithm.
    pub fn hasher(&self) -> StreamingDigest {
        match self {
            Self::Sha256 => StreamingDigest::Sha256(Sha256::new()),
            Self::Sha512 => StreamingDigest::Sha512(Sha512::new()),
            Self::Md5 => StreamingDigest::Md5(md5::Context::new()),
        }
    }

    /// Digest `bytes` in one shot, returning raw digest bytes.
    pub fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(bytes).to_vec(),
            Self::Sha512 => Sha512::digest(bytes).to_vec(),
            Self::Md5 => md5::compute(bytes).0.to_vec(),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Live digest accumulator fed chunk by chunk.
pub enum StreamingDigest {
    Sha256(Sha256),
    Sha512(Sha512),
    Md5(md5::Context),
}

impl StreamingDigest {
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha512(h) => Digest::update(h, data),
            Self::Md5(ctx) => ctx.consume(data),
        }
    }

    /// Consume the accumulator and return raw digest bytes.
    pub fn finalize(self) -> Vec<u8> {
        match self {
            Self::Sha256(h) => h.finalize().to_vec(),
            Self::Sha512(h) => h.finalize().to_vec(),
            #[allow(deprecated)]
            Self::Md5(ctx) => ctx.compute().0.to_vec(),
        }
    }

    /// Consume the accumulator and return the lowercase hex digest.
    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

impl fmt::Debug for StreamingDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha256(_) => "sha256",
            Self::Sha512(_) => "sha512",
            Self::Md5(_) => "md5",
        };
        f.debug_tuple("StreamingDigest").field(&name).finish()
    }
}

/// Digest `bytes` with the named algorithm, as lowercase hex.
pub fn digest_hex(bytes: &[u8], algorithm: &str) -> FingerprintResult<String> {
    let algorithm = DigestAlgorithm::from_name(algorithm)?;
    Ok(hex::encode(algorithm.digest(bytes)))
}

/// One-shot digest of `bytes` as lowercase hex, or `None` when the
/// algorithm is not available.
pub fn hash_bytes(bytes: &[u8], algorithm: &str) -> Option<String> {
    match digest_hex(bytes, algorithm) {
        Ok(hex) => Some(hex),
        Err(e) => {
            tracing::error!(algorithm, error = %e, "digest algorithm not available");
            None
        }
    }
}

/// Stream `reader` through a fresh accumulator in chunks of `chunk_size`.
pub fn digest_reader<R: Read>(
    reader: R,
    algorithm: DigestAlgorithm,
    chunk_size: usize,
) -> std::io::Result<String> {
    digest_reader_with_progress(reader, algorithm, chunk_size, |_| {})
}

/// Like [`digest_reader`], calling `on_chunk` with the running byte count
/// after each chunk is hashed.
///
/// Nothing is returned unless the stream is read to the end.
pub fn digest_reader_with_progress<R, F>(
    mut reader: R,
    algorithm: DigestAlgorithm,
    chunk_size: usize,
    mut on_chunk: F,
) -> std::io::Result<String>
where
    R: Read,
    F: FnMut(u64),
{
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0_u8; chunk_size.max(1)];
    let mut read_total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        read_total += n as u64;
        on_chunk(read_total);
    }

    Ok(hasher.finalize_hex())
}
