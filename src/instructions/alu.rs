//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test
//!
//! Arithmetic is always binary. The Decimal flag is tracked but has no effect,
//! matching the 2A03 which has its BCD circuitry disabled.

use super::{page_penalty, page_penalty_unless_indirect_y, Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags affected:
/// - C: Set if the unsigned sum exceeds 0xFF
/// - Z, N: From the 8-bit result
/// - V: Set if both operands have the same sign and the result's sign differs
///
/// Cycle timing: +1 if indexing crossed a page.
pub(crate) fn execute_adc<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let value = memory.load(operand.address);
    let a = regs.a;

    let sum = a as u16 + value as u16 + regs.status.carry as u16;
    let result = sum as u8;

    // V = (A^result) & (M^result) & 0x80: same-sign inputs, different-sign result
    regs.status.overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;
    regs.status.carry = sum > 0xFF;
    regs.status.set_nz(result);
    regs.a = result;

    page_penalty(operand)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`.
///
/// Flags affected:
/// - C: Set if no borrow was needed (result >= 0 before masking)
/// - Z, N: From the 8-bit result
/// - V: Set if A and M have different signs and the result's sign differs from A
///
/// Cycle timing: +1 if indexing crossed a page, except in (Indirect),Y mode.
pub(crate) fn execute_sbc<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let value = memory.load(operand.address);
    let a = regs.a;

    let diff = a as i16 - value as i16 - (!regs.status.carry) as i16;
    let result = diff as u8;

    regs.status.overflow = ((a ^ result) & 0x80) != 0 && ((a ^ value) & 0x80) != 0;
    regs.status.carry = diff >= 0;
    regs.status.set_nz(result);
    regs.a = result;

    page_penalty_unless_indirect_y(operand)
}

/// Executes the AND (Logical AND) instruction.
///
/// `A = A & M`; updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.a &= memory.load(operand.address);
    regs.status.set_nz(regs.a);
    page_penalty_unless_indirect_y(operand)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// `A = A | M`; updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.a |= memory.load(operand.address);
    regs.status.set_nz(regs.a);
    page_penalty_unless_indirect_y(operand)
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// `A = A ^ M`; updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.a ^= memory.load(operand.address);
    regs.status.set_nz(regs.a);
    page_penalty_unless_indirect_y(operand)
}

/// Executes the BIT (Bit Test) instruction.
///
/// N and V are copied from bits 7 and 6 of the operand; the Zero residue is
/// `A & M`. The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let value = memory.load(operand.address);
    regs.status.sign = value & 0x80 != 0;
    regs.status.overflow = value & 0x40 != 0;
    regs.status.zero = value & regs.a;
    DONE
}
