use clap::{Parser, Subcommand};

use super::commands::{check_cert, digest, fingerprint, legacy_sig, verify};

#[derive(Parser)]
#[command(
    name = "sigcheck",
    version,
    about = "Signing-certificate fingerprints and file integrity checks for package catalogs"
)]
pub struct Cli {
    /// Log diagnostics at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the SHA-256 trust fingerprint of a DER certificate
    Fingerprint(fingerprint::FingerprintArgs),
    /// Print the legacy (MD5 over hex text) signature hash of a DER certificate
    LegacySig(legacy_sig::LegacySigArgs),
    /// Print the digest of a file
    Digest(digest::DigestArgs),
    /// Check a file against an expected digest
    Verify(verify::VerifyArgs),
    /// Check a DER certificate against a recorded trusted fingerprint
    CheckCert(check_cert::CheckCertArgs),
}
