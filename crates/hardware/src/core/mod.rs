//! Core processor state.
//!
//! This module contains the machine state the memory backend is attached to:
//! program counter, halted flag, register file and address space, together
//! with the word access entry points the execution engine calls.

/// CPU state definition and memory entry points.
pub mod cpu;

pub use self::cpu::CpuState;
