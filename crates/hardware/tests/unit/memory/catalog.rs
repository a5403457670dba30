//! # Region Catalog Tests

use rstest::rstest;
use rvmem_core::config::MemoryMapConfig;
use rvmem_core::memory::{EntryState, RegionCatalog, RegionRole};

use crate::common::adjacent_map;

#[rstest]
#[case(RegionRole::UserText, 0x0040_0000, 0x1000_0000 - 0x0040_0000)]
#[case(RegionRole::UserData, 0x1000_0000, 0x7FE0_0000 - 0x1000_0000)]
#[case(RegionRole::Stack, 0x7FE0_0000, 0x0010_0000)]
#[case(RegionRole::KernelText, 0x8000_0000, 0x1000_0000)]
#[case(RegionRole::KernelData, 0x9000_0000, u32::MAX - 0x9000_0000)]
fn default_templates(#[case] role: RegionRole, #[case] base: u32, #[case] max_size: u32) {
    let catalog = RegionCatalog::default();
    let template = catalog.get(role);
    assert_eq!(template.role, role);
    assert_eq!(template.base_addr, base);
    assert_eq!(template.max_size, max_size);
}

#[test]
fn templates_are_ordered_and_disjoint() {
    let catalog = RegionCatalog::default();
    let templates = catalog.templates();
    assert_eq!(templates.len(), 5);
    for pair in templates.windows(2) {
        let end = u64::from(pair[0].base_addr) + u64::from(pair[0].max_size);
        assert!(end <= u64::from(pair[1].base_addr), "{pair:?}");
    }
}

#[test]
fn only_the_stack_has_no_image() {
    for role in RegionRole::ALL {
        assert_eq!(role.hex_suffix().is_none(), role == RegionRole::Stack);
    }
    assert_eq!(RegionRole::KernelData.hex_suffix(), Some(".kdata.hex"));
    assert_eq!(RegionRole::UserText.to_string(), "text");
}

#[test]
fn entry_state_follows_the_map() {
    assert_eq!(
        RegionCatalog::default().entry_state(),
        EntryState {
            pc: 0x0040_0000,
            sp: 0x7FF0_0000,
            gp: 0x1000_0000,
        }
    );

    let catalog = RegionCatalog::from_config(&adjacent_map());
    assert_eq!(catalog.get(RegionRole::UserText).max_size, 8);
    assert_eq!(catalog.get(RegionRole::Stack).base_addr, 0x2000);
    assert_eq!(catalog.entry_state().sp, 0x3000);
}

#[test]
fn catalog_is_not_changed_by_loading() {
    let map = MemoryMapConfig::default();
    let before = RegionCatalog::from_config(&map);
    let fixture = crate::common::ProgramFixture::program(&[0x13], &[]);
    let cpu = fixture.load();
    assert_eq!(cpu.memory.catalog(), &before);
}
