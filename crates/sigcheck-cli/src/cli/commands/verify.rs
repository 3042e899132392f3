//! `sigcheck verify` - Check a file against an expected digest.

use std::path::PathBuf;

use clap::Args;

use super::digest::file_hasher;
use crate::exit_codes;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// File to check
    pub file: PathBuf,

    /// Expected digest (hex, any case)
    #[arg(long)]
    pub expected: String,

    /// Digest algorithm (sha256, sha512, md5)
    #[arg(long, short, env = "SIGCHECK_DEFAULT_ALGORITHM", default_value = "sha256")]
    pub algorithm: String,

    /// Bytes per read (overrides SIGCHECK_CHUNK_SIZE)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Quiet mode - only exit code, no output
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn cmd_verify(args: VerifyArgs) -> i32 {
    let hasher = file_hasher(args.chunk_size);
    // a missing digest counts as a failed verification
    if hasher.verify_file(&args.file, &args.algorithm, &args.expected) {
        if !args.quiet {
            println!("OK: {}", args.file.display());
        }
        exit_codes::SUCCESS
    } else {
        if !args.quiet {
            eprintln!("FAILED: {}", args.file.display());
        }
        exit_codes::INTEGRITY_FAILURE
    }
}
