//! # Cipherpad CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Problems with the commands file itself (missing, unreadable) are part of a
//! normal run and are reported on stdout. Only failures around the run, such
//! as a malformed configuration file, end up here.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
