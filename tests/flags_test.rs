//! Tests for the flag instructions and status byte packing.

use nes_cpu::{FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

fn load_program(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    for (i, byte) in program.iter().enumerate() {
        cpu.memory_mut().write(0x8000 + i as u16, *byte);
    }
}

// ========== Set / Clear ==========

#[test]
fn test_sec_clc() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x38, 0x18]);

    assert_eq!(cpu.step(), Ok(2));
    assert!(cpu.flag_c());
    assert_eq!(cpu.step(), Ok(2));
    assert!(!cpu.flag_c());
}

#[test]
fn test_sei_cli() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x58, 0x78]);

    cpu.step().unwrap();
    assert!(!cpu.flag_i());
    cpu.step().unwrap();
    assert!(cpu.flag_i());
}

#[test]
fn test_sed_cld() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xF8, 0xD8]);

    cpu.step().unwrap();
    assert!(cpu.flag_d());
    cpu.step().unwrap();
    assert!(!cpu.flag_d());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xB8]);
    cpu.set_flag_v(true);

    cpu.step().unwrap();
    assert!(!cpu.flag_v());
}

#[test]
fn test_flag_ops_leave_others() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x38]);
    cpu.set_status(0b1100_1010);

    cpu.step().unwrap();
    assert_eq!(cpu.status(), 0b1100_1011);
}

// ========== Status Packing ==========

#[test]
fn test_status_round_trip_every_byte() {
    let mut cpu = setup_cpu();
    for byte in 0..=255u8 {
        cpu.set_status(byte);
        assert_eq!(cpu.status(), byte, "status {:#04X}", byte);
    }
}

#[test]
fn test_zero_bit_follows_last_result() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xA9, 0x00, 0xA9, 0x05]);

    cpu.step().unwrap();
    assert_eq!(cpu.status() & 0x02, 0x02);
    cpu.step().unwrap();
    assert_eq!(cpu.status() & 0x02, 0x00);
}

#[test]
fn test_power_on_status() {
    let cpu = setup_cpu();
    assert_eq!(cpu.status(), 0x34);
}
