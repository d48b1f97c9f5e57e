//! Command line interface for the architecture probe.
//!
//! Parses arguments, resolves the architecture, and prints the canonical
//! classifier for consumption by packaging scripts.

use clap::Parser;

use crate::arch::Architecture;
use crate::error::Result;

/// Host architecture probe for packaging scripts
#[derive(Parser, Debug)]
#[command(
    name = "hostarch",
    version,
    about = "Prints the canonical architecture classifier for the current host",
    long_about = "Maps the host-reported processor architecture to the canonical classifier \
used to name architecture-specific artifacts (x86_64, aarch64, loongarch64).

Usage:
  hostarch
  hostarch --raw amd64

Exit code 0 = recognized architecture, classifier printed to stdout."
)]
pub struct Args {
    /// Classify this raw architecture name instead of the host-reported one
    #[arg(short, long, value_name = "VALUE")]
    pub raw: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();

    let arch = match &args.raw {
        Some(raw) => Architecture::from_raw(raw)?,
        None => Architecture::current()?,
    };

    println!("{}", arch.classifier());
    Ok(0)
}
