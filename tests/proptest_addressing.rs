//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that the addressing modes compute effective addresses
//! and handle zero-page wraparound, page crossing and the indirect JMP bug.

use nes_cpu::{FlatMemory, CPU};
use proptest::prelude::*;

fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    CPU::new(memory)
}

// ========== Zero Page Addressing Tests ==========

proptest! {
    /// Property: Zero page addressing reads from address 0x00XX
    #[test]
    fn prop_zero_page_address_calculation(zp_addr in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = cpu_with_program(&[0xA5, zp_addr]); // LDA zp
        cpu.memory_mut().write(zp_addr as u16, value);

        prop_assert_eq!(cpu.step(), Ok(3));
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = cpu_with_program(&[0xB5, base]); // LDA zp,X
        cpu.set_x(x);
        cpu.memory_mut().write(base.wrapping_add(x) as u16, value);

        prop_assert_eq!(cpu.step(), Ok(4), "ZeroPageX never pays a penalty");
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Zero page,Y stores wrap within zero page
    #[test]
    fn prop_zero_page_y_store_wraps(base in 0u8..=255u8, y in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = cpu_with_program(&[0x96, base]); // STX zp,Y
        cpu.set_y(y);
        cpu.set_x(value);

        cpu.step().unwrap();
        prop_assert_eq!(cpu.ram()[base.wrapping_add(y) as usize], value);
    }
}

// ========== Indexed Absolute Tests ==========

proptest! {
    /// Property: LDA abs,X pays one extra cycle exactly when the page changes
    #[test]
    fn prop_absolute_x_penalty_on_page_cross(base in 0x0200u16..0x0700u16, x in 0u8..=255u8) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = cpu_with_program(&[0xBD, lo, hi]);
        cpu.set_x(x);
        let effective = base.wrapping_add(x as u16);
        cpu.memory_mut().write(effective, 0x5A);

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.step(), Ok(if crossed { 5 } else { 4 }));
        prop_assert_eq!(cpu.a(), 0x5A);
    }

    /// Property: STA abs,Y always costs 5 cycles
    #[test]
    fn prop_store_absolute_y_fixed_cycles(base in 0x0200u16..0x0700u16, y in 0u8..=255u8) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = cpu_with_program(&[0x99, lo, hi]);
        cpu.set_y(y);
        cpu.set_a(0x3C);

        prop_assert_eq!(cpu.step(), Ok(5));
        prop_assert_eq!(cpu.ram()[base.wrapping_add(y as u16) as usize], 0x3C);
    }
}

// ========== Indirect Tests ==========

proptest! {
    /// Property: (zp),Y adds Y to the 16-bit pointer stored in zero page
    #[test]
    fn prop_indirect_y_address(zp in 0u8..=0xFEu8, pointer in 0x0200u16..0x0600u16, y in 0u8..=255u8) {
        let mut cpu = cpu_with_program(&[0xB1, zp]); // LDA (zp),Y
        let [lo, hi] = pointer.to_le_bytes();
        cpu.memory_mut().write(zp as u16, lo);
        cpu.memory_mut().write(zp as u16 + 1, hi);
        cpu.set_y(y);
        let effective = pointer + y as u16;
        cpu.memory_mut().write(effective, 0xC7);

        let crossed = (pointer & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.step(), Ok(if crossed { 6 } else { 5 }));
        prop_assert_eq!(cpu.a(), 0xC7);
    }

    /// Property: JMP ($xxFF) takes its high byte from $xx00
    #[test]
    fn prop_jmp_indirect_page_wrap_bug(page in 0x03u8..=0x07u8, lo in 0u8..=255u8, hi in 0x80u8..=0xFFu8) {
        let pointer = ((page as u16) << 8) | 0xFF;
        let mut cpu = cpu_with_program(&[0x6C, 0xFF, page]);
        cpu.memory_mut().write(pointer, lo);
        cpu.memory_mut().write((page as u16) << 8, hi);
        // Decoy at the address a carry would reach
        cpu.memory_mut().write(pointer + 1, hi.wrapping_add(1));

        prop_assert_eq!(cpu.step(), Ok(5));
        let target = u16::from_le_bytes([lo, hi]);
        prop_assert_eq!(cpu.pc(), target.wrapping_sub(1));
    }
}
