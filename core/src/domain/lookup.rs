//! Result of asking the OS which processes hold a port.

use super::ProcessRecord;

/// Outcome of one locator query.
///
/// Keeps "the tool said nothing is there" apart from "the tool could not
/// answer", even though both read as an empty list to most callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// At least one process holds the port.
    Found(Vec<ProcessRecord>),
    /// The query ran and matched nothing.
    Empty,
    /// The query could not be answered.
    Failed(String),
}

impl Lookup {
    /// Build from a record list, mapping an empty list to [`Lookup::Empty`].
    pub fn from_records(records: Vec<ProcessRecord>) -> Self {
        if records.is_empty() {
            Lookup::Empty
        } else {
            Lookup::Found(records)
        }
    }

    /// Borrow the located records; empty unless [`Lookup::Found`].
    pub fn records(&self) -> &[ProcessRecord] {
        match self {
            Lookup::Found(records) => records,
            Lookup::Empty | Lookup::Failed(_) => &[],
        }
    }

    /// Take the located records; empty unless [`Lookup::Found`].
    pub fn into_records(self) -> Vec<ProcessRecord> {
        match self {
            Lookup::Found(records) => records,
            Lookup::Empty | Lookup::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Lookup::Failed(_))
    }
}
