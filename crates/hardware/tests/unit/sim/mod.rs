//! # Loader Tests
//!
//! Program load, unload and restart on the machine state.
