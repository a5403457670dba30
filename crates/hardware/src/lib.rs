//! RV32 simulator memory backend.
//!
//! This crate models the simulated machine's memory as five fixed regions and
//! provides the only path by which the execution engine reads and writes it:
//! 1. **Memory:** Region catalog, hex image loader, address space and word codec.
//! 2. **Core:** Machine state (PC, halted flag, registers) and the `mem_read32` /
//!    `mem_write32` entry points.
//! 3. **Simulation:** Program load, unload and restart.
//! 4. **Configuration:** JSON-configurable memory map.
//!
//! ```no_run
//! use std::path::Path;
//! use rvmem_core::{Config, CpuState};
//! use rvmem_core::sim::loader;
//!
//! let mut cpu = CpuState::new(&Config::default());
//! loader::load_program(&mut cpu, Path::new("build/hello"))?;
//! let first = cpu.mem_read32(cpu.pc);
//! assert!(!cpu.halted, "text segment starts mapped: {first:#x}");
//! # Ok::<(), rvmem_core::common::LoadError>(())
//! ```

/// Common types and constants (addresses, access kinds, errors, registers).
pub mod common;
/// Memory map configuration.
pub mod config;
/// Machine state and memory entry points.
pub mod core;
/// ABI register assignments.
pub mod isa;
/// Regions, catalog, hex loader, address space and codec.
pub mod memory;
/// Program loading.
pub mod sim;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Machine state; construct with `CpuState::new`.
pub use crate::core::CpuState;
/// Live collection of regions for one program.
pub use crate::memory::AddressSpace;
