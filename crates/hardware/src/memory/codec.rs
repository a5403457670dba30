//! Little-endian word codec.
//!
//! Encodes and decodes one 32-bit word at a host byte location, least
//! significant byte first. Callers pass the tail of a region buffer starting
//! at the translated offset; bounds were already established by translation,
//! so these helpers only require the slice to hold at least four bytes.

use crate::common::constants::WORD_SIZE;

const WORD_BYTES: usize = WORD_SIZE as usize;

/// Reads the little-endian word stored in the first four bytes of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` holds fewer than four bytes; translation guarantees it
/// does not.
#[inline(always)]
pub fn read_word(bytes: &[u8]) -> u32 {
    let mut word = [0u8; WORD_BYTES];
    word.copy_from_slice(&bytes[..WORD_BYTES]);
    u32::from_le_bytes(word)
}

/// Writes `value` little-endian into the first four bytes of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` holds fewer than four bytes; translation guarantees it
/// does not.
#[inline(always)]
pub fn write_word(bytes: &mut [u8], value: u32) {
    bytes[..WORD_BYTES].copy_from_slice(&value.to_le_bytes());
}
