//! # Compare Instructions
//!
//! CMP, CPX and CPY subtract the operand from a register without storing
//! the difference. Carry is set when the register is greater than or equal
//! to the operand; Sign and Zero come from the 8-bit difference.

use super::{page_penalty, Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

fn compare(regs: &mut Registers, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    regs.status.carry = register >= value;
    regs.status.set_nz(diff);
}

/// Executes CMP. +1 cycle on page crossing.
pub(crate) fn execute_cmp<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let value = memory.load(operand.address);
    compare(regs, regs.a, value);
    page_penalty(operand)
}

/// Executes CPX.
pub(crate) fn execute_cpx<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let value = memory.load(operand.address);
    compare(regs, regs.x, value);
    DONE
}

/// Executes CPY.
pub(crate) fn execute_cpy<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let value = memory.load(operand.address);
    compare(regs, regs.y, value);
    DONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::instructions::test_support::{machine, operand};

    #[test]
    fn test_compare_outcomes() {
        let (mut regs, mut mem) = machine();
        let op = operand(AddressingMode::ZeroPage, 0x0010);
        mem.write(0x0010, 0x40);

        regs.a = 0x40;
        execute_cmp(&mut regs, &mut mem, &op);
        assert!(regs.status.carry);
        assert!(regs.status.is_zero());
        assert!(!regs.status.sign);

        regs.a = 0x30;
        execute_cmp(&mut regs, &mut mem, &op);
        assert!(!regs.status.carry);
        assert!(!regs.status.is_zero());
        assert!(regs.status.sign); // 0x30 - 0x40 = 0xF0

        regs.a = 0x50;
        execute_cmp(&mut regs, &mut mem, &op);
        assert!(regs.status.carry);
        assert_eq!(regs.status.zero, 0x10);
    }

    #[test]
    fn test_cpx_cpy_use_index_registers() {
        let (mut regs, mut mem) = machine();
        let op = operand(AddressingMode::ZeroPage, 0x0010);
        mem.write(0x0010, 0x05);
        regs.a = 0x00;
        regs.x = 0x05;
        regs.y = 0x04;

        execute_cpx(&mut regs, &mut mem, &op);
        assert!(regs.status.carry && regs.status.is_zero());

        execute_cpy(&mut regs, &mut mem, &op);
        assert!(!regs.status.carry);
        assert_eq!(regs.status.zero, 0xFF);
    }

    #[test]
    fn test_only_cmp_pays_page_penalty() {
        let (mut regs, mut mem) = machine();
        let mut op = operand(AddressingMode::AbsoluteX, 0x2100);
        op.page_crossed = true;

        assert_eq!(execute_cmp(&mut regs, &mut mem, &op), Flow::Continue(1));
        assert_eq!(execute_cpx(&mut regs, &mut mem, &op), Flow::Continue(0));
    }
}
