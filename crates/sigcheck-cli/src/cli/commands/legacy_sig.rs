//! `sigcheck legacy-sig` - Print the legacy signature hash of a certificate.

use std::path::PathBuf;

use clap::Args;

use sigcheck_core::legacy_sig_hash;

use super::read_cert;
use crate::exit_codes;

#[derive(Args, Debug)]
pub struct LegacySigArgs {
    /// DER certificate file
    pub cert: PathBuf,
}

pub fn cmd_legacy_sig(args: LegacySigArgs) -> i32 {
    let bytes = match read_cert(&args.cert) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {e:#}");
            return exit_codes::INTERNAL_ERROR;
        }
    };

    let hash = legacy_sig_hash(&bytes);
    if hash.is_empty() {
        eprintln!("error: legacy signature hash could not be computed");
        return exit_codes::NO_RESULT;
    }
    println!("{hash}");
    exit_codes::SUCCESS
}
