//! Integrity hasher configuration.

use serde::{Deserialize, Serialize};

/// Chunk size used when streaming files, matching the historical read buffer.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Smallest accepted chunk size.
pub const MIN_CHUNK_SIZE: usize = 512;

/// Largest accepted chunk size, so a read never buffers a whole large file.
pub const MAX_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// File hashing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityConfig {
    /// Bytes read per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

impl IntegrityConfig {
    /// Create config from environment variables.
    ///
    /// | Environment Variable | Description |
    /// |---------------------|-------------|
    /// | `SIGCHECK_CHUNK_SIZE` | Bytes per read (default: 4096) |
    pub fn from_env() -> Self {
        Self {
            chunk_size: std::env::var("SIGCHECK_CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_chunk_size),
        }
    }

    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Chunk size clamped to the accepted range.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
    }
}
