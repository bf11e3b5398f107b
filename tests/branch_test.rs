//! Tests for the conditional branch instructions.
//!
//! Tests cover:
//! - Taken and not-taken paths for each condition
//! - Forward and backward offsets
//! - Cycle penalties (+1 taken, +2 taken across a page)

use nes_cpu::{FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

/// Loads `program` at `start` and points the next fetch at it.
fn start_at(cpu: &mut CPU<FlatMemory>, start: u16, program: &[u8]) {
    for (i, byte) in program.iter().enumerate() {
        cpu.memory_mut().write(start.wrapping_add(i as u16), *byte);
    }
    cpu.set_pc(start.wrapping_sub(1));
}

// ========== Taken / Not Taken ==========

#[test]
fn test_beq_not_taken() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0xF0, 0x10]);
    cpu.set_flag_z(false);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.pc(), 0x8011);
}

#[test]
fn test_beq_taken_forward() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0xF0, 0x10]);
    cpu.set_flag_z(true);

    assert_eq!(cpu.step(), Ok(3));
    // Next opcode at 0x8012 + 0x10
    assert_eq!(cpu.pc(), 0x8021);
}

#[test]
fn test_bne_taken_backward() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0xEA, 0xEA, 0xD0, 0xFC]); // NOP; NOP; BNE -4
    cpu.set_flag_z(false);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.step(), Ok(3));
    // Next opcode at 0x8014 - 4 = 0x8010
    assert_eq!(cpu.pc(), 0x800F);
}

#[test]
fn test_bcc_bcs() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0x90, 0x02, 0xB0, 0x02]);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(2)); // BCC not taken
    assert_eq!(cpu.step(), Ok(3)); // BCS taken
    assert_eq!(cpu.pc(), 0x8015);
}

#[test]
fn test_bmi_bpl() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0x30, 0x02, 0x10, 0x02]);
    cpu.set_flag_n(false);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.step(), Ok(3));
}

#[test]
fn test_bvc_bvs() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0x50, 0x02, 0x70, 0x02]);
    cpu.set_flag_v(true);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.step(), Ok(3));
}

#[test]
fn test_branches_leave_flags() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8010, &[0xF0, 0x02]);
    cpu.set_flag_z(true);
    let before = cpu.status();

    cpu.step().unwrap();
    assert_eq!(cpu.status(), before);
}

// ========== Page Crossing ==========

#[test]
fn test_branch_forward_across_page() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x80F0, &[0xD0, 0x20]);
    cpu.set_flag_z(false);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x8111);
}

#[test]
fn test_branch_backward_across_page() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x8102, &[0x90, 0xF0]);
    cpu.set_flag_c(false);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x80F3);
}

#[test]
fn test_bmi_cross_page_pays_two() {
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x80F0, &[0x30, 0x20]);
    cpu.set_flag_n(true);

    assert_eq!(cpu.step(), Ok(4));
}

#[test]
fn test_page_test_uses_pc_before_branch() {
    // Branch at 0x80FE/0x80FF: PC before is 0x80FD, the target register
    // 0x80FF + 0x01 = 0x8100 is on the next page.
    let mut cpu = setup_cpu();
    start_at(&mut cpu, 0x80FE, &[0xF0, 0x01]);
    cpu.set_flag_z(true);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x8100);
}
