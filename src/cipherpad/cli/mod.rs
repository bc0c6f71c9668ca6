//! # CLI Layer
//!
//! One possible client for the cipherpad library. This is the only place that
//! knows about terminal I/O, exit codes and colors.
//!
//! - `setup.rs`: clap arguments, version string, logging bootstrap
//! - `commands.rs`: context wiring (config, store, API) and the file run
//! - `print.rs`: turns `CmdResult` values into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
