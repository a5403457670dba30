//! Configuration system for the memory backend.
//!
//! This module defines the configuration structures used to parameterize the
//! simulated memory map. It provides:
//! 1. **Defaults:** The standard RV32 teaching-machine memory map.
//! 2. **Structures:** `Config` with general options and the memory map.
//! 3. **Validation:** Alignment and ordering checks so the derived regions stay
//!    disjoint and every region base is a word address.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_file`)
//! or taken from `Config::default()` for the CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::addr::is_word_aligned;
use crate::common::constants;

/// Default configuration constants for the simulator.
///
/// These values define the baseline memory map when a field is not present
/// in the JSON configuration.
mod defaults {
    use crate::common::constants;

    /// Base address of the user text segment.
    pub const fn user_text_start() -> u32 {
        constants::USER_TEXT_START
    }

    /// Base address of the user data segment.
    pub const fn user_data_start() -> u32 {
        constants::USER_DATA_START
    }

    /// One past the top of the stack.
    pub const fn stack_end() -> u32 {
        constants::STACK_END
    }

    /// Stack size in bytes.
    pub const fn stack_size() -> u32 {
        constants::STACK_SIZE
    }

    /// Base address of the kernel text segment.
    pub const fn kernel_text_start() -> u32 {
        constants::KERNEL_TEXT_START
    }

    /// Base address of the kernel data segment.
    pub const fn kernel_data_start() -> u32 {
        constants::KERNEL_DATA_START
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvmem_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory_map.user_text_start, 0x0040_0000);
/// assert!(!config.general.trace_accesses);
/// ```
///
/// Deserializing a partial memory map; missing fields take their defaults:
///
/// ```
/// use rvmem_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_accesses": true },
///     "memory_map": { "stack_size": 65536 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_accesses);
/// assert_eq!(config.memory_map.stack_size, 0x1_0000);
/// assert_eq!(config.memory_map.stack_end, 0x7FF0_0000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory map the region catalog is derived from.
    #[serde(default)]
    pub memory_map: MemoryMapConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and a layout error if
    /// the memory map fails [`MemoryMapConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.memory_map.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every successful word access at `trace` level.
    #[serde(default)]
    pub trace_accesses: bool,
}

/// Memory map of the simulated machine.
///
/// The five regions are derived from these values: user text runs up to the
/// user data base, user data up to the stack bottom, the stack spans
/// `stack_size` bytes below `stack_end`, kernel text runs up to the kernel
/// data base and kernel data runs to the top of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryMapConfig {
    /// Base address of the user text segment.
    #[serde(default = "defaults::user_text_start")]
    pub user_text_start: u32,
    /// Base address of the user data segment.
    #[serde(default = "defaults::user_data_start")]
    pub user_data_start: u32,
    /// One past the highest stack address.
    #[serde(default = "defaults::stack_end")]
    pub stack_end: u32,
    /// Stack size in bytes.
    #[serde(default = "defaults::stack_size")]
    pub stack_size: u32,
    /// Base address of the kernel text segment.
    #[serde(default = "defaults::kernel_text_start")]
    pub kernel_text_start: u32,
    /// Base address of the kernel data segment.
    #[serde(default = "defaults::kernel_data_start")]
    pub kernel_data_start: u32,
}

impl Default for MemoryMapConfig {
    fn default() -> Self {
        Self {
            user_text_start: constants::USER_TEXT_START,
            user_data_start: constants::USER_DATA_START,
            stack_end: constants::STACK_END,
            stack_size: constants::STACK_SIZE,
            kernel_text_start: constants::KERNEL_TEXT_START,
            kernel_data_start: constants::KERNEL_DATA_START,
        }
    }
}

impl MemoryMapConfig {
    /// Lowest stack address.
    ///
    /// Only meaningful for a validated map, where `stack_size <= stack_end`.
    pub const fn stack_start(&self) -> u32 {
        self.stack_end.wrapping_sub(self.stack_size)
    }

    /// Checks that every bound is word aligned and that the segments are
    /// strictly ascending so the derived regions cannot overlap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Misaligned`] for the first bound that is not a
    /// multiple of the word size, [`ConfigError::StackTooLarge`] if the stack
    /// would start below address zero, or [`ConfigError::NotAscending`] naming
    /// the first pair of segments that are out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("user_text_start", self.user_text_start),
            ("user_data_start", self.user_data_start),
            ("stack_end", self.stack_end),
            ("stack_size", self.stack_size),
            ("kernel_text_start", self.kernel_text_start),
            ("kernel_data_start", self.kernel_data_start),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !is_word_aligned(*v)) {
            return Err(ConfigError::Misaligned { field, value });
        }

        if self.stack_size > self.stack_end {
            return Err(ConfigError::StackTooLarge {
                stack_end: self.stack_end,
                stack_size: self.stack_size,
            });
        }

        let bounds = [
            ("user text", self.user_text_start),
            ("user data", self.user_data_start),
            ("stack", self.stack_start()),
            ("kernel text", self.kernel_text_start),
            ("kernel data", self.kernel_data_start),
        ];
        for pair in bounds.windows(2) {
            let (lower, lower_addr) = pair[0];
            let (upper, upper_addr) = pair[1];
            if lower_addr >= upper_addr {
                return Err(ConfigError::NotAscending {
                    lower,
                    lower_addr,
                    upper,
                    upper_addr,
                });
            }
        }

        // The stack top must not run into kernel text either.
        if self.stack_end > self.kernel_text_start {
            return Err(ConfigError::NotAscending {
                lower: "stack end",
                lower_addr: self.stack_end,
                upper: "kernel text",
                upper_addr: self.kernel_text_start,
            });
        }
        Ok(())
    }
}
