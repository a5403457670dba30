//! RV32 General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 integer
//! registers of the simulated machine. It provides:
//! 1. **Storage:** 32 registers of 32 bits each (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` is hardwired to zero.
//! 3. **Observability:** A dump helper for the shell's register display.

use std::fmt;

/// Number of integer registers.
pub const NUM_REGS: usize = 32;

/// General-purpose register file of the RV32 machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Resets every register to zero.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Returns a value that formats the register file in pairs, one pair per line.
    pub const fn dump(&self) -> RegisterDump<'_> {
        RegisterDump(self)
    }
}

/// Display adapter returned by [`RegisterFile::dump`].
#[derive(Debug)]
pub struct RegisterDump<'a>(&'a RegisterFile);

impl fmt::Display for RegisterDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.0.read(i),
                i + 1,
                self.0.read(i + 1)
            )?;
        }
        Ok(())
    }
}
