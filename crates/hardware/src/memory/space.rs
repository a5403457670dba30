//! Address space.
//!
//! The address space is the live set of regions for one running program. It
//! performs:
//! 1. **Load:** Rebuilds all five regions from the catalog, allocating the stack
//!    and filling the other regions from `<program><suffix>` hex images.
//! 2. **Unload:** Drops every region buffer.
//! 3. **Translation:** Maps a simulated address to the region and byte offset holding it.
//! 4. **Word Access:** Aligned, bounds-checked little-endian word reads and writes.
//!
//! A failed load drops the regions built so far; callers never observe a
//! partially loaded address space.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::catalog::RegionCatalog;
use super::codec;
use super::hex;
use super::region::{Region, RegionRole};
use crate::common::addr::is_word_aligned;
use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, LoadError, MemoryFault};

/// The collection of allocated regions for one program.
#[derive(Debug, Default)]
pub struct AddressSpace {
    catalog: RegionCatalog,
    regions: Vec<Region>,
}

impl AddressSpace {
    /// Creates an empty address space over the given catalog.
    pub const fn new(catalog: RegionCatalog) -> Self {
        Self {
            catalog,
            regions: Vec::new(),
        }
    }

    /// The catalog this address space is built from.
    pub const fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Live regions in ascending address order; empty while unloaded.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region implementing `role`, if a program is loaded.
    pub fn region(&self, role: RegionRole) -> Option<&Region> {
        self.regions.iter().find(|r| r.role() == role)
    }

    /// Returns `true` while a program is loaded.
    pub fn is_loaded(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Loads the program whose hex images share the prefix `program_path`.
    ///
    /// Any previously loaded program is released first. The stack is
    /// allocated at full capacity; every other region is loaded from
    /// `program_path` followed by its role's suffix.
    ///
    /// # Errors
    ///
    /// Returns the first region's [`LoadError`]; the address space is left
    /// empty in that case.
    pub fn load(&mut self, program_path: &Path) -> Result<(), LoadError> {
        self.unload();

        let mut regions = Vec::with_capacity(self.catalog.templates().len());
        for template in self.catalog.templates() {
            let mut region = Region::new(*template);
            match template.role.hex_suffix() {
                None => region.allocate_full(),
                Some(suffix) => {
                    let hex_path = hex_image_path(program_path, suffix);
                    if let Err(err) = hex::load_hex_file(&mut region, &hex_path) {
                        tracing::warn!(role = %template.role, "region load failed: {err}");
                        return Err(err);
                    }
                }
            }
            tracing::trace!(
                role = %region.role(),
                base = region.base_addr(),
                size = region.size(),
                "region ready"
            );
            regions.push(region);
        }

        self.regions = regions;
        Ok(())
    }

    /// Releases every region buffer. Safe to call when nothing is loaded.
    pub fn unload(&mut self) {
        self.regions.clear();
    }

    /// Finds the region containing `addr`.
    pub fn find_region(&self, addr: u32) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(addr))
    }

    /// Translates `addr` to the host bytes from that address to the end of
    /// its region, or `None` if no region contains it.
    pub fn translate(&self, addr: u32) -> Option<&[u8]> {
        self.regions.iter().find_map(|r| {
            let offset = r.offset_of(addr)?;
            Some(&r.bytes()[offset..])
        })
    }

    /// Mutable counterpart of [`AddressSpace::translate`].
    pub fn translate_mut(&mut self, addr: u32) -> Option<&mut [u8]> {
        self.regions.iter_mut().find_map(|r| {
            let offset = r.offset_of(addr)?;
            Some(&mut r.bytes_mut()[offset..])
        })
    }

    /// Returns `true` if the inclusive range `[start, end]` lies inside a
    /// single region. Ranges spanning two adjacent regions are rejected.
    ///
    /// The caller must ensure `start < end`.
    pub fn range_valid(&self, start: u32, end: u32) -> bool {
        debug_assert!(start < end, "range_valid requires start < end");
        self.regions
            .iter()
            .any(|r| r.contains(start) && r.contains(end))
    }

    /// Reads the little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::Misaligned`] for an address that is not 4-byte aligned,
    /// [`MemoryFault::Unmapped`] if no region holds all four bytes.
    pub fn read_word(&self, addr: u32) -> Result<u32, MemoryFault> {
        let bytes = self.word_bytes(addr, AccessType::Read)?;
        Ok(codec::read_word(bytes))
    }

    /// Writes `value` little-endian at `addr`.
    ///
    /// Nothing is written unless all four bytes are addressable.
    ///
    /// # Errors
    ///
    /// Same as [`AddressSpace::read_word`].
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), MemoryFault> {
        check_alignment(addr, AccessType::Write)?;
        let bytes = self
            .translate_mut(addr)
            .filter(|b| b.len() >= WORD_SIZE as usize)
            .ok_or(MemoryFault::Unmapped {
                addr,
                access: AccessType::Write,
            })?;
        codec::write_word(bytes, value);
        Ok(())
    }

    /// Reads every word from `start` through `end` inclusive.
    ///
    /// `start` must be word aligned and the range must satisfy
    /// [`AddressSpace::range_valid`]. An empty vector is returned when
    /// `start > end`.
    ///
    /// # Errors
    ///
    /// The fault for the first address that cannot be read.
    pub fn dump_words(&self, start: u32, end: u32) -> Result<Vec<(u32, u32)>, MemoryFault> {
        if start > end {
            return Ok(Vec::new());
        }
        if start < end && !self.range_valid(start, end) {
            let addr = if self.find_region(start).is_some() {
                end
            } else {
                start
            };
            return Err(MemoryFault::Unmapped {
                addr,
                access: AccessType::Read,
            });
        }

        (start..=end)
            .step_by(WORD_SIZE as usize)
            .map(|addr| self.read_word(addr).map(|word| (addr, word)))
            .collect()
    }

    fn word_bytes(&self, addr: u32, access: AccessType) -> Result<&[u8], MemoryFault> {
        check_alignment(addr, access)?;
        self.translate(addr)
            .filter(|b| b.len() >= WORD_SIZE as usize)
            .ok_or(MemoryFault::Unmapped { addr, access })
    }
}

fn check_alignment(addr: u32, access: AccessType) -> Result<(), MemoryFault> {
    if !is_word_aligned(addr) {
        return Err(MemoryFault::Misaligned { addr, access });
    }
    Ok(())
}

/// Joins the program path and a region suffix without inserting a separator.
fn hex_image_path(program_path: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(program_path.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}
