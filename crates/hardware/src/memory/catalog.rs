//! Region catalog.
//!
//! The catalog is the immutable table of the five region templates making up
//! the machine's memory map, in ascending address order. An address space
//! copies from it on every program load and never mutates it.

use super::region::{RegionRole, RegionTemplate};
use crate::common::constants::NUM_MEM_REGIONS;
use crate::config::MemoryMapConfig;

/// Register values a freshly loaded program starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryState {
    /// Initial program counter (user text base).
    pub pc: u32,
    /// Initial stack pointer (end of the stack region).
    pub sp: u32,
    /// Initial global pointer (user data base).
    pub gp: u32,
}

/// Fixed, ordered table of region templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionCatalog {
    templates: [RegionTemplate; NUM_MEM_REGIONS],
    entry: EntryState,
}

impl RegionCatalog {
    /// Derives the catalog from a memory map.
    ///
    /// Each region's capacity runs up to the next segment's base; kernel data
    /// runs to the top of the 32-bit address space. The map is expected to
    /// have passed [`MemoryMapConfig::validate`].
    pub const fn from_config(map: &MemoryMapConfig) -> Self {
        let stack_start = map.stack_start();
        let templates = [
            RegionTemplate {
                role: RegionRole::UserText,
                base_addr: map.user_text_start,
                max_size: map.user_data_start.wrapping_sub(map.user_text_start),
            },
            RegionTemplate {
                role: RegionRole::UserData,
                base_addr: map.user_data_start,
                max_size: stack_start.wrapping_sub(map.user_data_start),
            },
            RegionTemplate {
                role: RegionRole::Stack,
                base_addr: stack_start,
                max_size: map.stack_size,
            },
            RegionTemplate {
                role: RegionRole::KernelText,
                base_addr: map.kernel_text_start,
                max_size: map.kernel_data_start.wrapping_sub(map.kernel_text_start),
            },
            RegionTemplate {
                role: RegionRole::KernelData,
                base_addr: map.kernel_data_start,
                max_size: u32::MAX - map.kernel_data_start,
            },
        ];

        Self {
            templates,
            entry: EntryState {
                pc: map.user_text_start,
                sp: map.stack_end,
                gp: map.user_data_start,
            },
        }
    }

    /// All templates in ascending address order.
    pub const fn templates(&self) -> &[RegionTemplate] {
        &self.templates
    }

    /// Template for the given role.
    pub const fn get(&self, role: RegionRole) -> &RegionTemplate {
        &self.templates[role.index()]
    }

    /// Register values applied after a successful load.
    pub const fn entry_state(&self) -> EntryState {
        self.entry
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::from_config(&MemoryMapConfig::default())
    }
}
