//! # Word Access Tests
//!
//! This module verifies the execution engine's view of memory:
//! 1. **Reads:** Little-endian decode of loaded images.
//! 2. **Writes:** Byte layout in host memory and read-back.
//! 3. **Faults:** Unmapped and misaligned addresses halt the machine.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvmem_core::common::{AccessType, MemoryFault};
use rvmem_core::config::Config;
use rvmem_core::core::CpuState;

use crate::common::ProgramFixture;

const TEXT_BASE: u32 = 0x0040_0000;
const STACK_TOP_WORD: u32 = 0x7FEF_FFFC;

fn two_instruction_program() -> CpuState {
    ProgramFixture::program(&[0x0000_0093, 0x0010_0093], &[]).load()
}

// ══════════════════════════════════════════════════════════
// 1. Reads
// ══════════════════════════════════════════════════════════

#[test]
fn reads_loaded_text_words() {
    let mut cpu = two_instruction_program();
    assert_eq!(cpu.mem_read32(TEXT_BASE), 0x0000_0093);
    assert_eq!(cpu.mem_read32(TEXT_BASE + 4), 0x0010_0093);
    assert!(!cpu.halted);
}

#[test]
fn read_past_loaded_text_halts() {
    let mut cpu = two_instruction_program();
    assert_eq!(cpu.mem_read32(TEXT_BASE + 8), 0);
    assert!(cpu.halted);
}

#[test]
fn reads_data_words_at_data_base() {
    let mut cpu = ProgramFixture::program(&[], &[0x1234_5678, 0x9ABC_DEF0]).load();
    assert_eq!(cpu.mem_read32(0x1000_0000), 0x1234_5678);
    assert_eq!(cpu.mem_read32(0x1000_0004), 0x9ABC_DEF0);
    assert!(!cpu.halted);
}

#[test]
fn fresh_stack_reads_zero_without_halting() {
    let mut cpu = two_instruction_program();
    assert_eq!(cpu.mem_read32(0x7FE0_0000), 0);
    assert_eq!(cpu.mem_read32(STACK_TOP_WORD), 0);
    assert!(!cpu.halted);
}

// ══════════════════════════════════════════════════════════
// 2. Writes
// ══════════════════════════════════════════════════════════

#[test]
fn write_stores_little_endian_bytes() {
    let mut cpu = two_instruction_program();
    cpu.mem_write32(STACK_TOP_WORD, 0xDEAD_BEEF);

    let bytes = cpu.find_address(STACK_TOP_WORD).unwrap();
    assert_eq!(bytes, [0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(cpu.mem_read32(STACK_TOP_WORD), 0xDEAD_BEEF);
    assert!(!cpu.halted);
}

#[test]
fn text_and_data_are_writable() {
    let mut cpu = ProgramFixture::program(&[0x13], &[0]).load();
    cpu.mem_write32(TEXT_BASE, 0x0000_0073);
    cpu.mem_write32(0x1000_0000, 42);
    assert_eq!(cpu.mem_read32(TEXT_BASE), 0x0000_0073);
    assert_eq!(cpu.mem_read32(0x1000_0000), 42);
    assert!(!cpu.halted);
}

#[test]
fn last_write_wins() {
    let mut cpu = two_instruction_program();
    cpu.mem_write32(0x7FF0_0000 - 8, 1);
    cpu.mem_write32(0x7FF0_0000 - 8, 2);
    assert_eq!(cpu.mem_read32(0x7FF0_0000 - 8), 2);
}

// ══════════════════════════════════════════════════════════
// 3. Faults
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::below_text(0x003F_FFFC)]
#[case::past_data(0x1000_0000)]
#[case::stack_end(0x7FF0_0000)]
#[case::empty_kernel_text(0x8000_0000)]
#[case::empty_kernel_data(0x9000_0000)]
#[case::top_of_space(0xFFFF_FFFC)]
fn unmapped_read_halts(#[case] addr: u32) {
    let mut cpu = two_instruction_program();
    assert_eq!(
        cpu.try_read32(addr),
        Err(MemoryFault::Unmapped {
            addr,
            access: AccessType::Read,
        })
    );
    assert!(cpu.halted);
}

#[test]
fn unmapped_write_halts_without_mutation() {
    let mut cpu = two_instruction_program();
    let before = cpu.memory.regions().iter().map(|r| r.bytes().to_vec()).collect::<Vec<_>>();

    assert_eq!(
        cpu.try_write32(0x7FF0_0000, 0xFFFF_FFFF),
        Err(MemoryFault::Unmapped {
            addr: 0x7FF0_0000,
            access: AccessType::Write,
        })
    );
    assert!(cpu.halted);

    let after = cpu.memory.regions().iter().map(|r| r.bytes().to_vec()).collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[rstest]
#[case(TEXT_BASE + 1)]
#[case(TEXT_BASE + 2)]
#[case(TEXT_BASE + 3)]
fn misaligned_access_halts(#[case] addr: u32) {
    let mut cpu = two_instruction_program();
    assert_eq!(cpu.mem_read32(addr), 0);
    assert!(cpu.halted);

    cpu.halted = false;
    cpu.mem_write32(addr, 0xFFFF_FFFF);
    assert!(cpu.halted);
    assert_eq!(cpu.memory.read_word(TEXT_BASE), Ok(0x0000_0093));
}

#[test]
fn halted_flag_stays_latched() {
    let mut cpu = two_instruction_program();
    let _ = cpu.mem_read32(0);
    assert!(cpu.halted);

    assert_eq!(cpu.mem_read32(TEXT_BASE), 0x0000_0093);
    cpu.mem_write32(STACK_TOP_WORD, 5);
    assert!(cpu.halted);
}

#[test]
fn access_before_load_halts() {
    let mut cpu = CpuState::new(&Config::default());
    assert_eq!(cpu.mem_read32(TEXT_BASE), 0);
    assert!(cpu.halted);
    assert!(cpu.find_address(TEXT_BASE).is_none());
}

#[test]
fn traced_machine_accesses_memory_normally() {
    let mut cpu = ProgramFixture::program(&[0xCAFE_F00D], &[])
        .with_tracing()
        .load();
    assert!(cpu.trace_accesses);
    assert_eq!(cpu.mem_read32(TEXT_BASE), 0xCAFE_F00D);
    cpu.mem_write32(STACK_TOP_WORD, 7);
    assert_eq!(cpu.mem_read32(STACK_TOP_WORD), 7);
    assert!(!cpu.halted);
}
