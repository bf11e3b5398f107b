//! Fuzz target for CPU execution.
//!
//! This target creates arbitrary CPU states, RAM and PRG contents, optionally
//! latches an interrupt and a stall, then runs a short cycle budget looking
//! for panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes_cpu::{FlatMemory, InterruptKind, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    /// Packed NV-BDIZC byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at 0x8000 (first fetch after power-on)
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// NMI, reset and IRQ vectors
    vectors: [u8; 6],
    /// PPUCTRL value seen by the NMI gate
    ppu_ctrl: u8,
}

#[derive(Debug, Arbitrary)]
enum FuzzInterrupt {
    None,
    Normal,
    NonMaskable,
    Reset,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    interrupt: FuzzInterrupt,
    stall: u16,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut bus = FlatMemory::new();
    bus.load(0x8000, &input.memory.program);
    bus.load(0xFFFA, &input.memory.vectors);
    bus.write(0x2000, input.memory.ppu_ctrl);

    let mut cpu = CPU::new(bus);
    cpu.ram_mut()[..0x100].copy_from_slice(&input.memory.zero_page);
    cpu.ram_mut()[0x100..0x200].copy_from_slice(&input.memory.stack_page);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_status(input.cpu_state.status);

    match input.interrupt {
        FuzzInterrupt::None => {}
        FuzzInterrupt::Normal => cpu.request_irq(InterruptKind::Normal),
        FuzzInterrupt::NonMaskable => cpu.request_irq(InterruptKind::NonMaskable),
        FuzzInterrupt::Reset => cpu.request_irq(InterruptKind::Reset),
    }
    cpu.halt_cycles(input.stall as u32);

    let before = cpu.cycles();
    let budget = input.budget as u64;

    // Illegal opcodes are expected; only panics are bugs
    match cpu.run_for_cycles(budget) {
        Ok(consumed) => {
            assert!(consumed >= budget || cpu.exited());
        }
        Err(_) => {
            assert!(cpu.is_halted());
            assert_eq!(cpu.emulate(), 0);
        }
    }

    assert!(cpu.cycles() >= before);
    assert_eq!(cpu.registers().stack_address() >> 8, 0x01);
});
