//! # Unit Components
//!
//! Organizes the unit tests by crate module: shared types, configuration,
//! the memory subsystem, the machine state entry points and the loader.


/// Unit tests for configuration defaults, parsing and validation.
pub mod config;

/// Unit tests for `mem_read32` / `mem_write32` and the halted flag.
pub mod core;


/// Unit tests for program load, unload and restart.
pub mod sim;
