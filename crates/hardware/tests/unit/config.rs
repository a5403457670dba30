//! # Configuration Tests
//!
//! Defaults, JSON deserialization and memory-map validation.

use std::fs;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvmem_core::common::ConfigError;
use rvmem_core::config::*;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_accesses);
    assert_eq!(config.memory_map, MemoryMapConfig::default());
}

#[test]
fn test_memory_map_defaults() {
    let map = MemoryMapConfig::default();
    assert_eq!(map.user_text_start, 0x0040_0000);
    assert_eq!(map.user_data_start, 0x1000_0000);
    assert_eq!(map.stack_end, 0x7FF0_0000);
    assert_eq!(map.stack_size, 0x0010_0000);
    assert_eq!(map.stack_start(), 0x7FE0_0000);
    assert_eq!(map.kernel_text_start, 0x8000_0000);
    assert_eq!(map.kernel_data_start, 0x9000_0000);
    assert!(map.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_memory_map() {
    let json = r#"{ "memory_map": { "user_text_start": 4096, "stack_size": 8192 } }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.memory_map.user_text_start, 0x1000);
    assert_eq!(config.memory_map.stack_size, 0x2000);
    assert_eq!(config.memory_map.user_data_start, 0x1000_0000);
}

#[test]
fn test_malformed_json() {
    let err = Config::from_json("{ memory_map: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_out_of_order_segments_rejected() {
    let json = r#"{ "memory_map": { "user_data_start": 1024 } }"#;
    match Config::from_json(json).unwrap_err() {
        ConfigError::NotAscending { lower, upper, .. } => {
            assert_eq!(lower, "user text");
            assert_eq!(upper, "user data");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_stack_reaching_kernel_text_rejected() {
    let map = MemoryMapConfig {
        stack_end: 0x8000_1000,
        ..MemoryMapConfig::default()
    };
    assert!(matches!(
        map.validate(),
        Err(ConfigError::NotAscending {
            lower: "stack end",
            ..
        })
    ));
}

#[test]
fn test_stack_larger_than_its_end_rejected() {
    let map = MemoryMapConfig {
        stack_end: 0x1000,
        stack_size: 0x2000,
        ..MemoryMapConfig::default()
    };
    assert!(matches!(
        map.validate(),
        Err(ConfigError::StackTooLarge {
            stack_end: 0x1000,
            stack_size: 0x2000
        })
    ));
}

#[test]
fn test_unaligned_text_base_rejected() {
    let json = r#"{ "memory_map": { "user_text_start": 4194306 } }"#;
    match Config::from_json(json).unwrap_err() {
        ConfigError::Misaligned { field, value } => {
            assert_eq!(field, "user_text_start");
            assert_eq!(value, 0x0040_0002);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case::user_data("user_data_start", MemoryMapConfig { user_data_start: 0x1000_0001, ..MemoryMapConfig::default() })]
#[case::stack_end("stack_end", MemoryMapConfig { stack_end: 0x7FF0_0003, ..MemoryMapConfig::default() })]
#[case::stack_size("stack_size", MemoryMapConfig { stack_size: 0x0010_0002, ..MemoryMapConfig::default() })]
#[case::kernel_text("kernel_text_start", MemoryMapConfig { kernel_text_start: 0x8000_0001, ..MemoryMapConfig::default() })]
#[case::kernel_data("kernel_data_start", MemoryMapConfig { kernel_data_start: 0x9000_0002, ..MemoryMapConfig::default() })]
fn test_unaligned_bounds_rejected(#[case] expected: &str, #[case] map: MemoryMapConfig) {
    match map.validate() {
        Err(ConfigError::Misaligned { field, .. }) => assert_eq!(field, expected),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sim.json");
    fs::write(&path, r#"{ "general": { "trace_accesses": true } }"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.general.trace_accesses);

    let missing = Config::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, ConfigError::Io { .. }));
}
