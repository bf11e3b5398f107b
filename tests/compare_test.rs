//! Tests for CMP, CPX and CPY.

use nes_cpu::{FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

fn load_program(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    for (i, byte) in program.iter().enumerate() {
        cpu.memory_mut().write(0x8000 + i as u16, *byte);
    }
}

// ========== CMP ==========

#[test]
fn test_cmp_equal() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xC9, 0x42]);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), Ok(2));
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_greater() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xC9, 0x10]);
    cpu.set_a(0x20);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xC9, 0x20]);
    cpu.set_a(0x10);

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_unsigned_not_signed() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xC9, 0x01]);
    cpu.set_a(0xFF);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert!(cpu.flag_n()); // 0xFE
}

#[test]
fn test_cmp_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xD9, 0xFF, 0x03]);
    cpu.set_y(0x02);

    assert_eq!(cpu.step(), Ok(5));
}

#[test]
fn test_cmp_indirect_y_page_cross_pays() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xD1, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.memory_mut().write(0x0011, 0x02);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), Ok(6));
}

// ========== CPX / CPY ==========

#[test]
fn test_cpx_immediate() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xE0, 0x05]);
    cpu.set_x(0x05);

    assert_eq!(cpu.step(), Ok(2));
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_cpx_zero_page() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xE4, 0x10]);
    cpu.memory_mut().write(0x0010, 0x06);
    cpu.set_x(0x05);

    assert_eq!(cpu.step(), Ok(3));
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpy_absolute() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xCC, 0x00, 0x02]);
    cpu.memory_mut().write(0x0200, 0x01);
    cpu.set_y(0x80);

    assert_eq!(cpu.step(), Ok(4));
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n()); // 0x7F
    assert!(!cpu.flag_z());
}
