//! `sigcheck digest` - Print the digest of a file.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use sigcheck_core::{FileHasher, IntegrityConfig};

use crate::exit_codes;

#[derive(Args, Debug)]
pub struct DigestArgs {
    /// File to hash
    pub file: PathBuf,

    /// Digest algorithm (sha256, sha512, md5)
    #[arg(long, short, env = "SIGCHECK_DEFAULT_ALGORITHM", default_value = "sha256")]
    pub algorithm: String,

    /// Bytes per read (overrides SIGCHECK_CHUNK_SIZE)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Print a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DigestOutput<'a> {
    path: String,
    algorithm: &'a str,
    digest: &'a str,
}

pub(crate) fn file_hasher(chunk_size: Option<usize>) -> FileHasher {
    let config = IntegrityConfig::from_env();
    let config = match chunk_size {
        Some(size) => config.with_chunk_size(size),
        None => config,
    };
    FileHasher::new(config)
}

pub fn cmd_digest(args: DigestArgs) -> i32 {
    let hasher = file_hasher(args.chunk_size);
    let digest = match hasher.try_digest_file(&args.file, &args.algorithm) {
        Ok(digest) => digest,
        Err(e) => {
            tracing::debug!(error = ?e, "digest failed");
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };

    if args.json {
        let out = DigestOutput {
            path: args.file.display().to_string(),
            algorithm: &args.algorithm,
            digest: &digest,
        };
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to encode JSON: {e}");
                return exit_codes::INTERNAL_ERROR;
            }
        }
    } else {
        println!("{digest}  {}", args.file.display());
    }
    exit_codes::SUCCESS
}
