//! Program Loader and Machine Initialization.
//!
//! This module attaches a program to the machine state. It performs:
//! 1. **Loading:** Builds the address space from `<program><suffix>` hex images.
//! 2. **Entry State:** Points the PC at user text, `sp` at the stack end and `gp`
//!    at user data.
//! 3. **Unloading / Restart:** Releases the regions, or reloads the current program
//!    from scratch.

use std::path::Path;

use crate::common::LoadError;
use crate::core::CpuState;
use crate::isa::abi;

/// Loads the program at `program_path` into `cpu`.
///
/// Any previously loaded program is released first. On success the processor
/// is reset (registers cleared, halted flag lowered) and the PC, stack pointer
/// and global pointer are initialized from the catalog. On failure no region
/// stays allocated and the registers are left untouched.
///
/// # Errors
///
/// The [`LoadError`] of the first region that failed to load.
pub fn load_program(cpu: &mut CpuState, program_path: &Path) -> Result<(), LoadError> {
    cpu.program = None;
    cpu.memory.load(program_path)?;

    cpu.reset();
    let entry = cpu.memory.catalog().entry_state();
    cpu.pc = entry.pc;
    cpu.regs.write(abi::REG_SP, entry.sp);
    cpu.regs.write(abi::REG_GP, entry.gp);
    cpu.program = Some(program_path.to_path_buf());

    tracing::info!(
        program = %program_path.display(),
        pc = entry.pc,
        "program loaded"
    );
    Ok(())
}

/// Releases every region of the loaded program. Safe to call repeatedly and
/// after a failed load.
pub fn unload_program(cpu: &mut CpuState) {
    cpu.memory.unload();
    cpu.program = None;
}

/// Resets the processor and reloads the current program from its hex images,
/// discarding any memory writes made since it was loaded.
///
/// With no program loaded only the processor state is reset.
///
/// # Errors
///
/// The [`LoadError`] from reloading; the machine is then left unloaded.
pub fn restart_program(cpu: &mut CpuState) -> Result<(), LoadError> {
    let program = cpu.program.take();
    cpu.reset();
    match program {
        Some(path) => load_program(cpu, &path),
        None => Ok(()),
    }
}
