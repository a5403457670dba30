//! Memory regions.
//!
//! A region is one contiguous span of simulated memory with its own base
//! address, capacity and host buffer. It provides:
//! 1. **Roles:** The five segments of the memory map and their hex file suffixes.
//! 2. **Templates:** Immutable (role, base, capacity) triples held by the catalog.
//! 3. **Regions:** Live, optionally allocated spans derived from a template.
//!
//! A region's addressable range is `[base_addr, base_addr + size)`; capacity
//! beyond `size` up to `max_size` is never addressable.

use std::fmt;

use super::buffer::RegionBuffer;
use crate::common::addr::span_end;

/// Segment of the memory map a region implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionRole {
    /// User program instructions.
    UserText,
    /// User global variables.
    UserData,
    /// Program stack; allocated at full capacity, never file-initialized.
    Stack,
    /// Kernel instructions.
    KernelText,
    /// Kernel global variables.
    KernelData,
}

impl RegionRole {
    /// All roles in ascending address order.
    pub const ALL: [Self; 5] = [
        Self::UserText,
        Self::UserData,
        Self::Stack,
        Self::KernelText,
        Self::KernelData,
    ];

    /// Position of the role in the catalog.
    pub const fn index(self) -> usize {
        match self {
            Self::UserText => 0,
            Self::UserData => 1,
            Self::Stack => 2,
            Self::KernelText => 3,
            Self::KernelData => 4,
        }
    }

    /// Short name of the role, as used in hex file suffixes and the shell.
    pub const fn name(self) -> &'static str {
        match self {
            Self::UserText => "text",
            Self::UserData => "data",
            Self::Stack => "stack",
            Self::KernelText => "ktext",
            Self::KernelData => "kdata",
        }
    }

    /// Suffix appended to the program path to find this region's hex image,
    /// or `None` for the stack.
    pub const fn hex_suffix(self) -> Option<&'static str> {
        match self {
            Self::UserText => Some(".text.hex"),
            Self::UserData => Some(".data.hex"),
            Self::Stack => None,
            Self::KernelText => Some(".ktext.hex"),
            Self::KernelData => Some(".kdata.hex"),
        }
    }
}

impl fmt::Display for RegionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable description of one region in the memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionTemplate {
    /// Segment this template describes.
    pub role: RegionRole,
    /// First simulated address of the region.
    pub base_addr: u32,
    /// Largest size the region may be allocated with.
    pub max_size: u32,
}

/// A live region of the address space.
#[derive(Debug)]
pub struct Region {
    template: RegionTemplate,
    size: u32,
    buffer: Option<RegionBuffer>,
}

impl Region {
    /// Creates an unallocated, zero-size region from a catalog template.
    pub const fn new(template: RegionTemplate) -> Self {
        Self {
            template,
            size: 0,
            buffer: None,
        }
    }

    /// Segment this region implements.
    pub const fn role(&self) -> RegionRole {
        self.template.role
    }

    /// First simulated address of the region.
    pub const fn base_addr(&self) -> u32 {
        self.template.base_addr
    }

    /// Capacity of the region in bytes.
    pub const fn max_size(&self) -> u32 {
        self.template.max_size
    }

    /// Allocated size of the region in bytes; zero while unallocated.
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// One past the last addressable byte, widened so it cannot wrap.
    pub const fn end_addr(&self) -> u64 {
        span_end(self.template.base_addr, self.size)
    }

    /// Returns `true` once the region owns a host buffer.
    pub const fn is_allocated(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns `true` if `addr` lies in `[base_addr, base_addr + size)`.
    pub const fn contains(&self, addr: u32) -> bool {
        self.template.base_addr <= addr && (addr as u64) < self.end_addr()
    }

    /// Byte offset of `addr` within the region, if the region contains it.
    pub const fn offset_of(&self, addr: u32) -> Option<usize> {
        if self.contains(addr) {
            Some((addr - self.template.base_addr) as usize)
        } else {
            None
        }
    }

    /// Contents of the region, or an empty slice while unallocated.
    pub fn bytes(&self) -> &[u8] {
        match &self.buffer {
            Some(buffer) => buffer.as_slice(),
            None => &[],
        }
    }

    /// Mutable contents of the region, or an empty slice while unallocated.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        match &mut self.buffer {
            Some(buffer) => buffer.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Allocates a zeroed buffer at the region's full capacity.
    pub(crate) fn allocate_full(&mut self) {
        self.install(RegionBuffer::new(self.template.max_size as usize));
    }

    /// Takes ownership of `buffer` as the region's storage.
    ///
    /// The caller guarantees `buffer.len() <= max_size`.
    pub(crate) fn install(&mut self, buffer: RegionBuffer) {
        debug_assert!(buffer.len() <= self.template.max_size as usize);
        self.size = buffer.len() as u32;
        self.buffer = Some(buffer);
    }

    /// Releases the region's buffer, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        self.buffer = None;
        self.size = 0;
    }
}
