//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Carry clear / set
//! - BEQ / BNE: Zero set / clear
//! - BMI / BPL: Sign set / clear
//! - BVC / BVS: Overflow clear / set
//!
//! The Relative resolver has already computed the target (in program
//! counter form). Cycle timing:
//! - +0 cycles if the branch is not taken
//! - +1 cycle if taken within the same page
//! - +2 cycles if taken to a different page
//!
//! The page test compares the program counter before the branch was fetched
//! with the new program counter. No flags are affected.

use super::Flow;
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

fn branch_if(regs: &mut Registers, operand: &Operand, condition: bool) -> Flow {
    if !condition {
        return Flow::Continue(0);
    }

    let penalty = if (operand.origin & 0xFF00) != (operand.address & 0xFF00) {
        2
    } else {
        1
    };
    regs.pc = operand.address;
    Flow::Continue(penalty)
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = !regs.status.carry;
    branch_if(regs, operand, taken)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = regs.status.carry;
    branch_if(regs, operand, taken)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = regs.status.is_zero();
    branch_if(regs, operand, taken)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = !regs.status.is_zero();
    branch_if(regs, operand, taken)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = regs.status.sign;
    branch_if(regs, operand, taken)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = !regs.status.sign;
    branch_if(regs, operand, taken)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = !regs.status.overflow;
    branch_if(regs, operand, taken)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let taken = regs.status.overflow;
    branch_if(regs, operand, taken)
}
