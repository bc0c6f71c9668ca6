//! # Storage Layer
//!
//! The [`RecordStore`] trait is the seam between the command handlers and
//! wherever records live. Records are kept in insertion order and no field is
//! unique; the only mutations are append and predicate-based removal.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a plain vector, discarded at process exit.
//!   Nothing is persisted between runs.

use crate::model::Record;

pub mod memory;

/// Ordered collection of records.
pub trait RecordStore {
    /// Append a record at the end.
    fn push(&mut self, record: Record);

    /// All records in insertion order.
    fn records(&self) -> &[Record];

    /// Remove every record for which `remove` returns true, keeping the
    /// relative order of the rest. Returns how many were removed.
    fn remove_where<F>(&mut self, remove: F) -> usize
    where
        F: FnMut(&Record) -> bool;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
