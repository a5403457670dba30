//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines the ABI register indices the loader initializes (`sp`, `gp`), along
//! with `zero`, `ra` and `a0` for callers that address registers by ABI name.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp). Set to the stack end on load.
pub const REG_SP: usize = 2;
/// Register x3 (global pointer, gp). Set to the user data base on load.
pub const REG_GP: usize = 3;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
