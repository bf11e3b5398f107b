//! Fuzz target for save state decoding.
//!
//! Arbitrary bytes must either be rejected with an error or decode into a
//! state that restores cleanly and re-serializes to the same bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nes_cpu::savestate::SAVESTATE_SIZE;
use nes_cpu::{CpuState, FlatMemory, CPU};

fuzz_target!(|data: &[u8]| {
    let Ok(state) = CpuState::deserialize(data) else {
        return;
    };

    assert_eq!(state.serialize(), &data[..SAVESTATE_SIZE]);

    let mut cpu = CPU::new(FlatMemory::new());
    state.restore(&mut cpu);
    assert_eq!(cpu.pc(), state.pc);
    assert_eq!(cpu.status(), state.status);
    assert_eq!(cpu.pending_interrupt(), state.pending_interrupt);
});
