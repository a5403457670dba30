//! Memory Access Entry Points.
//!
//! This module is the only path by which the execution engine touches
//! simulated memory. It provides:
//! 1. **Fallible Access:** `try_read32` / `try_write32` return the fault explicitly.
//! 2. **Fail-Stop Access:** `mem_read32` / `mem_write32` report the fault, latch the
//!    halted flag and, for reads, return 0. The halted flag is the authoritative
//!    failure signal; a returned 0 carries no meaning on its own.
//! 3. **Shell Helpers:** Host location lookup and range validation.

use super::CpuState;
use crate::common::MemoryFault;

impl CpuState {
    /// Reads the little-endian word at `addr`, latching `halted` on failure.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::Misaligned`] or [`MemoryFault::Unmapped`].
    pub fn try_read32(&mut self, addr: u32) -> Result<u32, MemoryFault> {
        match self.memory.read_word(addr) {
            Ok(value) => {
                if self.trace_accesses {
                    tracing::trace!("MEM read  [{addr:#010x}] -> {value:#010x}");
                }
                Ok(value)
            }
            Err(fault) => Err(self.raise(fault)),
        }
    }

    /// Writes `value` little-endian at `addr`, latching `halted` on failure.
    ///
    /// No byte is written unless the whole word is addressable.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::Misaligned`] or [`MemoryFault::Unmapped`].
    pub fn try_write32(&mut self, addr: u32, value: u32) -> Result<(), MemoryFault> {
        match self.memory.write_word(addr, value) {
            Ok(()) => {
                if self.trace_accesses {
                    tracing::trace!("MEM write [{addr:#010x}] <- {value:#010x}");
                }
                Ok(())
            }
            Err(fault) => Err(self.raise(fault)),
        }
    }

    /// Reads the word at `addr`.
    ///
    /// On an invalid address the fault is logged, the machine is halted and 0
    /// is returned.
    pub fn mem_read32(&mut self, addr: u32) -> u32 {
        self.try_read32(addr).unwrap_or(0)
    }

    /// Writes `value` at `addr`.
    ///
    /// On an invalid address the fault is logged, the machine is halted and
    /// memory is left unchanged.
    pub fn mem_write32(&mut self, addr: u32, value: u32) {
        let _ = self.try_write32(addr, value);
    }

    /// Host bytes from `addr` to the end of its region, if `addr` is mapped.
    pub fn find_address(&self, addr: u32) -> Option<&[u8]> {
        self.memory.translate(addr)
    }

    /// Returns `true` if `[start, end]` lies within a single region.
    ///
    /// The caller must ensure `start < end`.
    pub fn range_valid(&self, start: u32, end: u32) -> bool {
        self.memory.range_valid(start, end)
    }

    fn raise(&mut self, fault: MemoryFault) -> MemoryFault {
        tracing::error!(
            addr = fault.addr(),
            access = %fault.access(),
            "Encountered {fault}. Halting simulation."
        );
        self.halted = true;
        fault
    }
}
