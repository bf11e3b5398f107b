//! CPU initialization tests
//!
//! Verifies the power-on state and what `reset()` does and does not clear.

use nes_cpu::{FlatMemory, InterruptKind, MemoryBus, CPU};

#[test]
fn test_cpu_power_on_values() {
    let cpu = CPU::new(FlatMemory::new());

    assert_eq!(cpu.pc(), 0x7FFF, "PC sits one below the first fetch");
    assert_eq!(cpu.a(), 0x00, "Accumulator should be 0x00");
    assert_eq!(cpu.x(), 0x00, "X register should be 0x00");
    assert_eq!(cpu.y(), 0x00, "Y register should be 0x00");
    assert_eq!(cpu.sp(), 0xFF, "Stack pointer should be 0xFF");

    assert!(cpu.flag_i(), "Interrupt disable flag should be set");
    assert!(cpu.flag_b(), "Break flag should be set");
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_z(), "Zero residue starts non-zero");
    assert!(!cpu.flag_c());

    assert_eq!(cpu.status(), 0x34);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.cycles_to_halt(), 0);
    assert_eq!(cpu.pending_interrupt(), None);
    assert!(!cpu.is_halted());
    assert!(!cpu.exited());
}

#[test]
fn test_first_fetch_is_8000() {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, &[0xA9, 0x7E]); // LDA #$7E
    let mut cpu = CPU::new(memory);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x7E);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_reset_restores_registers_and_keeps_ram() {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, &[0xEA, 0xEA]);
    let mut cpu = CPU::new(memory);

    cpu.set_a(0x12);
    cpu.set_x(0x34);
    cpu.set_sp(0x80);
    cpu.set_status(0xC3);
    cpu.ram_mut()[0x0300] = 0xAA;
    cpu.halt_cycles(513);
    cpu.request_irq(InterruptKind::NonMaskable);
    cpu.step().unwrap();

    cpu.reset();

    assert_eq!(cpu.pc(), 0x7FFF);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status(), 0x34);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.cycles_to_halt(), 0);
    assert_eq!(cpu.pending_interrupt(), None);
    assert_eq!(cpu.ram()[0x0300], 0xAA, "RAM survives reset");
}

#[test]
fn test_reset_vector_via_request() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x34, 0x12]);
    let mut cpu = CPU::new(memory);
    // 0x1234 mirrors work RAM, so the NOP goes through the CPU's memory
    cpu.memory_mut().write(0x1234, 0xEA);

    cpu.request_irq(InterruptKind::Reset);
    assert_eq!(cpu.step(), Ok(2));

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.ram()[0x0234], 0xEA);
}

#[test]
fn test_reset_vector_into_bus_space() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0xC0]);
    memory.write(0xC000, 0xEA);
    let mut cpu = CPU::new(memory);

    cpu.request_irq(InterruptKind::Reset);
    assert_eq!(cpu.step(), Ok(2));

    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_register_setters_round_trip() {
    let mut cpu = CPU::new(FlatMemory::new());

    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);
    cpu.set_sp(0x04);
    cpu.set_pc(0x0506);

    let regs = cpu.registers();
    assert_eq!(
        (regs.a, regs.x, regs.y, regs.sp, regs.pc),
        (0x01, 0x02, 0x03, 0x04, 0x0506)
    );
}

#[test]
fn test_flag_setters() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_status(0x20);

    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);
    cpu.set_flag_i(true);
    cpu.set_flag_z(true);
    cpu.set_flag_c(true);

    assert_eq!(cpu.status(), 0xEF);

    cpu.set_flag_z(false);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.status() & 0x02, 0x00);
}
