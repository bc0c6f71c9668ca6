//! # API Facade
//!
//! [`CipherpadApi`] is the single entry point for running commands. It owns the
//! record store for the lifetime of a session and is a **thin facade**:
//!
//! - **Parses** a raw line into a [`Command`]
//! - **Dispatches** to the matching handler in `commands/*.rs`
//! - **Returns** a structured [`CmdResult`], never prints
//!
//! Malformed lines are not errors at this level. A [`CommandError`] becomes an
//! error-level message on the result and the store is left untouched, so a
//! caller can keep feeding lines.
//!
//! ## Generic Over RecordStore
//!
//! `CipherpadApi<S: RecordStore>` works with any store; the binary and the
//! tests both use `InMemoryStore`.
//!
//! [`CommandError`]: crate::error::CommandError

use crate::commands;
use crate::filter::RemoveFilter;
use crate::parser::{AddRequest, Command};
use crate::store::RecordStore;
use tracing::{debug, warn};

pub struct CipherpadApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> CipherpadApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parse and run one line of the command language.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        match Command::parse(line) {
            Ok(Some(command)) => {
                debug!(?command, "dispatching");
                self.dispatch(command)
            }
            Ok(None) => CmdResult::default(),
            Err(e) => {
                warn!(line, error = %e, "command rejected");
                CmdResult::default().with_message(CmdMessage::error(e.to_string()))
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> CmdResult {
        match command {
            Command::Add(request) => self.add(request),
            Command::Remove(filter) => self.remove(&filter),
            Command::Print => self.print(),
        }
    }

    pub fn add(&mut self, request: AddRequest) -> CmdResult {
        commands::add::run(&mut self.store, request)
    }

    pub fn remove(&mut self, filter: &RemoveFilter) -> CmdResult {
        commands::remove::run(&mut self.store, filter)
    }

    pub fn print(&self) -> CmdResult {
        commands::print::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::{CmdMessage, CmdResult, DisplayRecord, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> CipherpadApi<InMemoryStore> {
        CipherpadApi::new(InMemoryStore::new())
    }

    fn contents(result: &CmdResult) -> Vec<&str> {
        result.messages.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn execute_dispatches_add() {
        let mut api = api();
        let result = api.execute(r#"ADD SHIFT "Hi there" bob 2024-01-01 3"#);
        assert_eq!(contents(&result), ["Added SHIFT cipher for owner 'bob'"]);
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn execute_dispatches_remove() {
        let mut api = api();
        api.execute(r#"ADD SHIFT "one" Alice 2024-01-01 1"#);
        api.execute(r#"ADD SHIFT "two" Bob 2024-01-01 1"#);
        let result = api.execute(r#"REM owner == "Alice""#);
        assert_eq!(result.removed_count, 1);
        assert_eq!(contents(&result), ["Removed 1 items"]);
        assert_eq!(api.store().records()[0].owner(), "Bob");
    }

    #[test]
    fn execute_dispatches_print() {
        let mut api = api();
        api.execute(r#"ADD SUBSTITUTION "abc" carol 2024-02-02 "abc" "xyz""#);
        let result = api.execute("PRINT");
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].record.encrypted_text(), "xyz");
    }

    #[test]
    fn rejected_line_becomes_error_message_and_keeps_state() {
        let mut api = api();
        api.execute(r#"ADD SHIFT "keep" a d 1"#);

        let result = api.execute("FOO bar");
        assert!(result.has_errors());
        assert_eq!(contents(&result), ["Unknown command: FOO"]);

        let result = api.execute(r#"ADD SHIFT "Hi" bob 2024-01-01"#);
        assert_eq!(contents(&result), ["Invalid SHIFT command format"]);

        let result = api.execute("REM length > lots");
        assert_eq!(contents(&result), ["Invalid length value"]);

        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn integer_arguments_beyond_i64_are_accepted() {
        let mut api = api();
        let result = api.execute(r#"ADD SHIFT "abc" o d 100000000000000000000"#);
        assert_eq!(contents(&result), ["Added SHIFT cipher for owner 'o'"]);
        api.execute(r#"ADD SHIFT "defg" p d 1"#);
        assert_eq!(api.store().len(), 2);

        let result = api.execute("REM length > 99999999999999999999");
        assert_eq!(contents(&result), ["Removed 0 items"]);

        let result = api.execute("PRINT");
        assert_eq!(
            result.listed_records[0].record.describe(),
            "SHIFT: owner='o', date='d', shift=100000000000000000000, original='abc', \
             encrypted='wxy', decrypted='abc'"
        );

        let result = api.execute("REM length < 99999999999999999999");
        assert_eq!(contents(&result), ["Removed 2 items"]);
    }

    #[test]
    fn blank_line_is_a_no_op() {
        let mut api = api();
        let result = api.execute("   ");
        assert!(result.messages.is_empty());
        assert!(result.listed_records.is_empty());
    }

    #[test]
    fn into_store_hands_back_records() {
        let mut api = api();
        api.execute(r#"ADD SHIFT "x" a d 1"#);
        assert_eq!(api.into_store().len(), 1);
    }
}
