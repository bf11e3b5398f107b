//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Decimal mode can be toggled but arithmetic ignores it.

use super::{Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.carry = false;
    DONE
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.carry = true;
    DONE
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// A pending IRQ is serviced at the start of the next step.
pub(crate) fn execute_cli<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.interrupt = false;
    DONE
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.interrupt = true;
    DONE
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn execute_clv<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.overflow = false;
    DONE
}

pub(crate) fn execute_cld<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.decimal = false;
    DONE
}

pub(crate) fn execute_sed<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.decimal = true;
    DONE
}
