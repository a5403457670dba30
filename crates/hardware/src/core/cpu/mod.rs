//! CPU State Definition and Initialization.
//!
//! This module defines `CpuState`, the container for the architectural state
//! of the simulated RV32 machine. It holds:
//! 1. **Registers:** The program counter and the 32 integer registers.
//! 2. **Run Control:** The latched halted flag checked by the execution loop.
//! 3. **Memory:** The address space of the currently loaded program.

/// Word access entry points (`mem_read32`, `mem_write32`).
pub mod memory;

use std::path::{Path, PathBuf};

use crate::common::RegisterFile;
use crate::config::Config;
use crate::memory::{AddressSpace, RegionCatalog};

/// Architectural state of the simulated machine.
///
/// Exactly one `CpuState` and its address space are live at a time; the
/// simulation loop owns it exclusively.
#[derive(Debug, Default)]
pub struct CpuState {
    /// Program counter.
    pub pc: u32,
    /// Set when the simulation must not proceed; latched by invalid accesses.
    pub halted: bool,
    /// Integer registers.
    pub regs: RegisterFile,
    /// Simulated memory.
    pub memory: AddressSpace,
    /// Log every successful word access at `trace` level.
    pub trace_accesses: bool,
    pub(crate) program: Option<PathBuf>,
}

impl CpuState {
    /// Creates a machine with no program loaded, using the configured memory map.
    ///
    /// The configuration is expected to be validated
    /// (see [`crate::config::MemoryMapConfig::validate`]).
    pub fn new(config: &Config) -> Self {
        Self {
            memory: AddressSpace::new(RegionCatalog::from_config(&config.memory_map)),
            trace_accesses: config.general.trace_accesses,
            ..Self::default()
        }
    }

    /// Path prefix of the currently loaded program, if any.
    pub fn program(&self) -> Option<&Path> {
        self.program.as_deref()
    }

    /// Clears the registers, program counter and halted flag.
    ///
    /// Memory contents are left untouched.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.halted = false;
        self.regs.clear();
    }
}
