//! Simulated address helpers.
//!
//! The simulated machine is RV32, so every address is a plain `u32`. This module
//! collects the small amount of arithmetic shared by translation and the dump
//! helpers. It provides:
//! 1. **Alignment:** Word-alignment checks used by the access entry points.
//! 2. **Range Arithmetic:** Overflow-free end-address computation for regions.

use super::constants::WORD_ALIGN_MASK;

/// Returns `true` if `addr` lies on a 4-byte word boundary.
#[inline(always)]
pub const fn is_word_aligned(addr: u32) -> bool {
    addr & WORD_ALIGN_MASK == 0
}

/// Computes the exclusive end of a span starting at `base` with `size` bytes.
///
/// The result is widened to `u64` so a region reaching the top of the 32-bit
/// address space does not wrap.
///
/// # Arguments
///
/// * `base` - First address of the span.
/// * `size` - Length of the span in bytes.
///
/// # Returns
///
/// One past the last address of the span.
#[inline(always)]
pub const fn span_end(base: u32, size: u32) -> u64 {
    base as u64 + size as u64
}
