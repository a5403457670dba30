//! Memory Access Type Definitions.
//!
//! This module defines the kinds of word accesses the execution engine can
//! issue against simulated memory. Faults carry the access kind so the
//! diagnostic names which operation hit the bad address.

use std::fmt;

/// Kind of memory access being performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Word load (`mem_read32`).
    Read,
    /// Word store (`mem_write32`).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}
