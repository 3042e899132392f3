//! `sigcheck` subcommands.
//!
//! Each command reports its own errors and returns its exit code.

pub mod check_cert;
pub mod digest;
pub mod fingerprint;
pub mod legacy_sig;
pub mod verify;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> i32 {
    match cli.cmd {
        Command::Fingerprint(args) => fingerprint::cmd_fingerprint(args),
        Command::LegacySig(args) => legacy_sig::cmd_legacy_sig(args),
        Command::Digest(args) => digest::cmd_digest(args),
        Command::Verify(args) => verify::cmd_verify(args),
        Command::CheckCert(args) => check_cert::cmd_check_cert(args),
    }
}

/// Read raw DER certificate bytes.
pub(crate) fn read_cert(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read certificate: {}", path.display()))
}
