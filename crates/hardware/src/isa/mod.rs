//! Instruction set definitions consumed by the memory backend.
//!
//! Only the ABI register assignments are needed here; decode and execute
//! live in the execution engine.

/// ABI register name constants.
pub mod abi;
