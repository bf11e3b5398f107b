//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: memory, read-modify-write
//! - INX / INY / DEX / DEY: index registers
//!
//! All wrap at 8 bits and update N and Z. No other flags change.

use super::{Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let result = memory.load(operand.address).wrapping_add(1);
    regs.status.set_nz(result);
    memory.write(operand.address, result);
    DONE
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let result = memory.load(operand.address).wrapping_sub(1);
    regs.status.set_nz(result);
    memory.write(operand.address, result);
    DONE
}

pub(crate) fn execute_inx<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.x = regs.x.wrapping_add(1);
    regs.status.set_nz(regs.x);
    DONE
}

pub(crate) fn execute_iny<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.y = regs.y.wrapping_add(1);
    regs.status.set_nz(regs.y);
    DONE
}

pub(crate) fn execute_dex<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.x = regs.x.wrapping_sub(1);
    regs.status.set_nz(regs.x);
    DONE
}

pub(crate) fn execute_dey<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.y = regs.y.wrapping_sub(1);
    regs.status.set_nz(regs.y);
    DONE
}
