//! Error definitions for the memory backend.
//!
//! This module defines every failure the memory subsystem reports. It provides:
//! 1. **Load Errors:** IO, format, size and parse failures while building an address space.
//! 2. **Memory Faults:** Runtime invalid-address conditions raised by word accesses.
//! 3. **Configuration Errors:** Malformed or inconsistent memory-map configuration.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::data::AccessType;

/// Failure while loading a program image into the address space.
///
/// Every variant names the hex file involved so the shell can report it
/// without extra context.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The hex file could not be opened or read.
    #[error("{}: Unable to open file: {source}", .path.display())]
    Io {
        /// Path of the hex file.
        path: PathBuf,
        /// Underlying host IO error.
        #[source]
        source: io::Error,
    },

    /// The file size is not a whole number of hex lines.
    #[error(
        "{}: File size {file_size} is not a multiple of the {line_len}-byte line width",
        .path.display()
    )]
    Format {
        /// Path of the hex file.
        path: PathBuf,
        /// Size of the file in bytes.
        file_size: u64,
        /// Expected width of each line in bytes.
        line_len: u64,
    },

    /// The number of lines disagrees with the word count implied by the file size.
    #[error(
        "{}: Expected {expected} lines from the file size, found {found}",
        .path.display()
    )]
    LineCount {
        /// Path of the hex file.
        path: PathBuf,
        /// Word count derived from the file size.
        expected: u64,
        /// Lines actually read before the mismatch was detected.
        found: u64,
    },

    /// The decoded image does not fit in its region.
    #[error(
        "{}: File is too large for memory region ({size:#x} > {max_size:#x} bytes)",
        .path.display()
    )]
    TooLarge {
        /// Path of the hex file.
        path: PathBuf,
        /// Size the image would occupy in bytes.
        size: u64,
        /// Maximum size of the region in bytes.
        max_size: u32,
    },

    /// A line is not a 32-bit hexadecimal value.
    #[error(
        "{}: Line {line}: Unable to parse '{text}' as a 32-bit unsigned hexadecimal integer",
        .path.display()
    )]
    Parse {
        /// Path of the hex file.
        path: PathBuf,
        /// Zero-based line number of the offending line.
        line: usize,
        /// Offending line with its terminator stripped.
        text: String,
    },
}

impl LoadError {
    /// Returns the path of the hex file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Format { path, .. }
            | Self::LineCount { path, .. }
            | Self::TooLarge { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }
}

/// Invalid-address condition raised by a word access.
///
/// Raising a fault through [`crate::core::CpuState`] latches the halted flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryFault {
    /// No allocated region contains the whole word.
    #[error("invalid memory address {addr:#010x} on {access}")]
    Unmapped {
        /// Faulting simulated address.
        addr: u32,
        /// Kind of access that faulted.
        access: AccessType,
    },

    /// The address is not word aligned.
    #[error("misaligned memory address {addr:#010x} on {access}")]
    Misaligned {
        /// Faulting simulated address.
        addr: u32,
        /// Kind of access that faulted.
        access: AccessType,
    },
}

impl MemoryFault {
    /// Returns the faulting simulated address.
    pub const fn addr(&self) -> u32 {
        match *self {
            Self::Unmapped { addr, .. } | Self::Misaligned { addr, .. } => addr,
        }
    }

    /// Returns the kind of access that faulted.
    pub const fn access(&self) -> AccessType {
        match *self {
            Self::Unmapped { access, .. } | Self::Misaligned { access, .. } => access,
        }
    }
}

/// Failure while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("{}: Unable to read configuration: {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying host IO error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Two segments of the memory map are out of order.
    #[error("memory map: {lower} ({lower_addr:#010x}) must lie below {upper} ({upper_addr:#010x})")]
    NotAscending {
        /// Name of the segment expected to be lower.
        lower: &'static str,
        /// Start address of the lower segment.
        lower_addr: u32,
        /// Name of the segment expected to be higher.
        upper: &'static str,
        /// Start address of the higher segment.
        upper_addr: u32,
    },

    /// A memory-map value is not a multiple of the word size.
    #[error("memory map: {field} ({value:#010x}) is not word aligned")]
    Misaligned {
        /// Name of the offending field.
        field: &'static str,
        /// Configured value.
        value: u32,
    },

    /// The stack size does not fit below the stack end.
    #[error("memory map: stack size {stack_size:#x} exceeds stack end {stack_end:#010x}")]
    StackTooLarge {
        /// Configured stack end.
        stack_end: u32,
        /// Configured stack size.
        stack_size: u32,
    },
}
