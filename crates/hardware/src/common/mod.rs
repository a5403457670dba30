//! Common utilities and types used throughout the memory backend.
//!
//! This module provides the building blocks shared by the region catalog, the
//! address space and the machine state. It includes:
//! 1. **Address Helpers:** Alignment and overflow-free range arithmetic on `u32` addresses.
//! 2. **Constants:** The default memory map, word size and hex line width.
//! 3. **Memory Access:** The read/write access kinds carried by faults.
//! 4. **Error Handling:** Load errors, memory faults and configuration errors.
//! 5. **Register Management:** The RV32 integer register file.

/// Alignment and range arithmetic on simulated addresses.
pub mod addr;

/// Memory map and size constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::{ConfigError, LoadError, MemoryFault};
pub use reg::RegisterFile;
