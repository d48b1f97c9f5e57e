//! Hostarch - host architecture probe for packaging tooling.
//!
//! This binary resolves the current host's processor architecture to its
//! canonical classifier and prints it for packaging scripts.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match hostarch::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
