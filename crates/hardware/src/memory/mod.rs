//! Simulated Memory.
//!
//! This module implements the region-based memory backend. It provides:
//! 1. **Buffer:** Host storage for a single region (`RegionBuffer`).
//! 2. **Region:** Roles, catalog templates and live regions.
//! 3. **Catalog:** The immutable five-entry memory map.
//! 4. **Hex Loader:** ASCII hex image parsing into region buffers.
//! 5. **Address Space:** Load/unload lifecycle, translation and word access.
//! 6. **Codec:** Little-endian word encode/decode.

/// Host buffer backing a region.
pub mod buffer;

/// Region catalog derived from the memory map.
pub mod catalog;

/// Little-endian word codec.
pub mod codec;

/// Hex image loader.
pub mod hex;

/// Region roles, templates and live regions.
pub mod region;

/// Address space: lifecycle, translation and word access.
pub mod space;

pub use self::catalog::{EntryState, RegionCatalog};
pub use self::region::{Region, RegionRole, RegionTemplate};
pub use self::space::AddressSpace;
