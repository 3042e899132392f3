//! `sigcheck fingerprint` - Print the trust fingerprint of a certificate.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use sigcheck_core::{
    fingerprint_from_bytes, fingerprint_from_hex_key, format_fingerprint, Fingerprint,
    BAD_FINGERPRINT,
};

use super::read_cert;
use crate::exit_codes;

#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// DER certificate file, or a hex key string with --hex
    pub cert: String,

    /// Treat CERT as a hex-encoded certificate instead of a file path
    #[arg(long)]
    pub hex: bool,

    /// Print the fingerprint in space-separated pairs
    #[arg(long, conflicts_with = "json")]
    pub display: bool,

    /// Print a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FingerprintOutput<'a> {
    fingerprint: &'a Fingerprint,
    display: String,
}

pub fn cmd_fingerprint(args: FingerprintArgs) -> i32 {
    match run_fingerprint(&args) {
        Ok(Some(fp)) => {
            print_fingerprint(&args, &fp);
            exit_codes::SUCCESS
        }
        Ok(None) => {
            eprintln!("error: not a valid signing key, no fingerprint computed");
            exit_codes::NO_RESULT
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_codes::INTERNAL_ERROR
        }
    }
}

fn run_fingerprint(args: &FingerprintArgs) -> Result<Option<Fingerprint>> {
    if args.hex {
        return Ok(fingerprint_from_hex_key(args.cert.trim()));
    }
    let bytes = read_cert(&PathBuf::from(&args.cert))?;
    Ok(fingerprint_from_bytes(&bytes))
}

fn print_fingerprint(args: &FingerprintArgs, fp: &Fingerprint) {
    let display = format_fingerprint(fp.as_str(), BAD_FINGERPRINT);
    if args.json {
        let out = FingerprintOutput {
            fingerprint: fp,
            display,
        };
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("error: failed to encode JSON: {e}"),
        }
    } else if args.display {
        println!("{display}");
    } else {
        println!("{fp}");
    }
}
