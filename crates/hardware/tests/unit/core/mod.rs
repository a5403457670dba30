//! # Machine State Tests
//!
//! Fail-stop word access through `CpuState`.

/// Unit tests for `mem_read32`, `mem_write32` and the halted flag.
pub mod cpu_memory;
