//! # Cipherpad Architecture
//!
//! Cipherpad runs a small line-oriented command language over an in-memory
//! collection of records, each holding a text encrypted with a classical cipher
//! (character substitution or alphabetic shift). The binary reads a commands
//! file; everything else is a library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, sets up logging          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Driver (driver.rs)                                         │
//! │  - Reads a commands file line by line                       │
//! │  - Skips blanks and `#` comments, hands results back        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store                                           │
//! │  - Parses a line (parser.rs) and dispatches it              │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - ADD / REM / PRINT business logic                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns regular Rust
//! types. It never writes to stdout/stderr and never exits the process. A
//! malformed command is a value (an error-level [`api::CmdMessage`]), not a
//! failure, so a caller can always continue with the next line.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for running commands
//! - [`cipher`]: Substitution and shift ciphers
//! - [`commands`]: Business logic for each command
//! - [`config`]: Configuration management
//! - [`driver`]: Commands file processing
//! - [`error`]: Error types
//! - [`filter`]: REM conditions
//! - [`integer`]: Unbounded integers for shift and length arguments
//! - [`model`]: The `Record` type
//! - [`parser`]: The command language
//! - [`store`]: Storage abstraction and the in-memory implementation

pub mod api;
pub mod cipher;
pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod filter;
pub mod integer;
pub mod model;
pub mod parser;
pub mod store;
