//! # Load and Store Instructions
//!
//! This module implements memory transfer operations:
//! - LDA / LDX / LDY: Load register, update N and Z, +1 cycle on page crossing
//! - STA / STX / STY: Store register, no flags, never charged a page penalty
//!
//! The indexed store opcodes already carry the worst-case timing in their
//! base cycle count.

use super::{page_penalty, Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.a = memory.load(operand.address);
    regs.status.set_nz(regs.a);
    page_penalty(operand)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.x = memory.load(operand.address);
    regs.status.set_nz(regs.x);
    page_penalty(operand)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.y = memory.load(operand.address);
    regs.status.set_nz(regs.y);
    page_penalty(operand)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    memory.write(operand.address, regs.a);
    DONE
}

pub(crate) fn execute_stx<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    memory.write(operand.address, regs.x);
    DONE
}

pub(crate) fn execute_sty<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    memory.write(operand.address, regs.y);
    DONE
}
