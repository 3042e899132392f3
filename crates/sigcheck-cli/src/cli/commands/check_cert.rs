//! `sigcheck check-cert` - Check a certificate against a trusted fingerprint.

use std::path::PathBuf;

use clap::Args;

use sigcheck_core::fingerprint_matches;

use super::read_cert;
use crate::exit_codes;

#[derive(Args, Debug)]
pub struct CheckCertArgs {
    /// DER certificate file
    pub cert: PathBuf,

    /// Recorded trusted fingerprint (64 hex characters, spaces or colons allowed)
    #[arg(long)]
    pub expected: String,

    /// Quiet mode - only exit code, no output
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn cmd_check_cert(args: CheckCertArgs) -> i32 {
    let bytes = match read_cert(&args.cert) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {e:#}");
            return exit_codes::INTERNAL_ERROR;
        }
    };

    let expected = normalize_fingerprint(&args.expected);
    if fingerprint_matches(&bytes, &expected) {
        if !args.quiet {
            println!("trusted: {}", args.cert.display());
        }
        exit_codes::SUCCESS
    } else {
        if !args.quiet {
            eprintln!("untrusted: {}", args.cert.display());
        }
        exit_codes::INTEGRITY_FAILURE
    }
}

/// Strip the separators people paste from `keytool` or display output.
fn normalize_fingerprint(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_display_separators() {
        assert_eq!(normalize_fingerprint("AB CD:EF\n"), "ABCDEF");
        assert_eq!(normalize_fingerprint("abcdef"), "abcdef");
    }
}
