//! Global System Constants.
//!
//! This module defines the fixed memory map of the simulated machine and the
//! sizes used by the word codec and the hex image loader. It includes:
//! 1. **Memory Map:** Base addresses of the user and kernel segments and the stack bounds.
//! 2. **Word Constants:** Width and alignment of a simulated memory word.
//! 3. **Hex Image Constants:** Fixed line width of a hex image file.

/// Start of the user text segment, where the program's instructions live.
pub const USER_TEXT_START: u32 = 0x0040_0000;

/// Start of the user data segment, holding global variables.
pub const USER_DATA_START: u32 = 0x1000_0000;

/// One past the highest stack address; the initial stack pointer.
pub const STACK_END: u32 = 0x7FF0_0000;

/// Size of the stack segment in bytes (1 MiB).
pub const STACK_SIZE: u32 = 0x0010_0000;

/// Lowest stack address.
pub const STACK_START: u32 = STACK_END - STACK_SIZE;

/// Start of the kernel text segment.
pub const KERNEL_TEXT_START: u32 = 0x8000_0000;

/// Start of the kernel data segment.
pub const KERNEL_DATA_START: u32 = 0x9000_0000;

/// Number of regions in the address space.
pub const NUM_MEM_REGIONS: usize = 5;

/// Size of a simulated memory word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Mask selecting the misaligned low bits of a word address.
pub const WORD_ALIGN_MASK: u32 = WORD_SIZE - 1;

/// Number of hexadecimal digits encoding one word in a hex image.
pub const HEX_DIGITS_PER_WORD: u64 = 8;

/// Length of a hex image line in bytes, including the trailing newline.
pub const HEX_LINE_LEN: u64 = HEX_DIGITS_PER_WORD + 1;
