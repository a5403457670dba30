//! Program loading.
//!
//! Provides the load, unload and restart operations that attach a program's
//! hex images to the machine state and set its initial registers.

/// Program load, unload and restart.
pub mod loader;
