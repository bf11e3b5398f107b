//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! In Accumulator mode the operation applies to A. In every other mode it is a
//! read-modify-write on memory. The bit shifted out always lands in Carry.

use super::{Flow, DONE};
use crate::addressing::{AddressingMode, Operand};
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// Applies `op` to the accumulator or the addressed byte and stores the result.
///
/// `op` receives the input value and the current carry, and returns the
/// result and the new carry.
fn read_modify_write<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
    op: impl Fn(u8, bool) -> (u8, bool),
) -> u8 {
    if operand.mode == AddressingMode::Accumulator {
        let (result, carry) = op(regs.a, regs.status.carry);
        regs.status.carry = carry;
        regs.a = result;
        result
    } else {
        let value = memory.load(operand.address);
        let (result, carry) = op(value, regs.status.carry);
        regs.status.carry = carry;
        memory.write(operand.address, result);
        result
    }
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to Carry, bit 0 becomes 0. Updates N and Z.
pub(crate) fn execute_asl<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let result = read_modify_write(regs, memory, operand, |v, _| (v << 1, v & 0x80 != 0));
    regs.status.set_nz(result);
    DONE
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to Carry, bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let result = read_modify_write(regs, memory, operand, |v, _| (v >> 1, v & 0x01 != 0));
    regs.status.sign = false;
    regs.status.zero = result;
    DONE
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 7 goes to Carry, the old Carry enters bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let result = read_modify_write(regs, memory, operand, |v, c| {
        ((v << 1) | c as u8, v & 0x80 != 0)
    });
    regs.status.set_nz(result);
    DONE
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 0 goes to Carry, the old Carry enters bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let result = read_modify_write(regs, memory, operand, |v, c| {
        ((v >> 1) | ((c as u8) << 7), v & 0x01 != 0)
    });
    regs.status.set_nz(result);
    DONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::{machine, operand};

    #[test]
    fn test_asl_accumulator() {
        let (mut regs, mut mem) = machine();
        regs.a = 0x81;
        execute_asl(&mut regs, &mut mem, &operand(AddressingMode::Accumulator, 0x81));
        assert_eq!(regs.a, 0x02);
        assert!(regs.status.carry);
        assert!(!regs.status.sign);
    }

    #[test]
    fn test_lsr_memory() {
        let (mut regs, mut mem) = machine();
        mem.write(0x0040, 0x01);
        regs.status.sign = true;
        execute_lsr(&mut regs, &mut mem, &operand(AddressingMode::ZeroPage, 0x0040));
        assert_eq!(mem.load(0x0040), 0x00);
        assert!(regs.status.carry);
        assert!(regs.status.is_zero());
        assert!(!regs.status.sign);
    }

    #[test]
    fn test_rol_carries_in() {
        let (mut regs, mut mem) = machine();
        regs.a = 0x40;
        regs.status.carry = true;
        execute_rol(&mut regs, &mut mem, &operand(AddressingMode::Accumulator, 0x40));
        assert_eq!(regs.a, 0x81);
        assert!(!regs.status.carry);
        assert!(regs.status.sign);
    }

    #[test]
    fn test_ror_memory_carries_in_at_bit_seven() {
        let (mut regs, mut mem) = machine();
        mem.write(0x0300, 0x03);
        regs.status.carry = true;
        execute_ror(&mut regs, &mut mem, &operand(AddressingMode::Absolute, 0x0300));
        assert_eq!(mem.load(0x0300), 0x81);
        assert!(regs.status.carry);
        assert!(regs.status.sign);
    }
}
