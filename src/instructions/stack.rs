//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page, so pushes and pulls wrap inside page one.

use super::{Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;
use crate::status::Status;

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_pha<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    let a = regs.a;
    regs.push(memory, a);
    DONE
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Break is forced to 1 before the byte is packed. The live flag stays set
/// afterwards.
pub(crate) fn execute_php<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.status.brk = true;
    let status = regs.status.to_byte();
    regs.push(memory, status);
    DONE
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: N, Z from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.a = regs.pull(memory);
    regs.status.set_nz(regs.a);
    DONE
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is replaced by the pulled byte, then bit 5 is forced back to 1.
pub(crate) fn execute_plp<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    let status = regs.pull(memory);
    regs.status = Status::from_byte(status);
    regs.status.unused = true;
    DONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::instructions::test_support::{machine, operand};

    #[test]
    fn test_pha_pla() {
        let (mut regs, mut mem) = machine();
        let op = operand(AddressingMode::Implicit, 0);
        regs.a = 0x80;

        execute_pha(&mut regs, &mut mem, &op);
        assert_eq!(mem.load(0x01FF), 0x80);
        assert_eq!(regs.sp, 0xFE);

        regs.a = 0x00;
        execute_pla(&mut regs, &mut mem, &op);
        assert_eq!(regs.a, 0x80);
        assert!(regs.status.sign);
        assert_eq!(regs.sp, 0xFF);
    }

    #[test]
    fn test_php_forces_break() {
        let (mut regs, mut mem) = machine();
        regs.status.brk = false;
        regs.status.carry = true;

        execute_php(&mut regs, &mut mem, &operand(AddressingMode::Implicit, 0));

        let pushed = mem.load(0x01FF);
        assert_eq!(pushed & 0x10, 0x10);
        assert_eq!(pushed & 0x01, 0x01);
    }

    #[test]
    fn test_plp_forces_unused() {
        let (mut regs, mut mem) = machine();
        regs.push(&mut mem, 0x00);

        execute_plp(&mut regs, &mut mem, &operand(AddressingMode::Implicit, 0));

        assert!(regs.status.unused);
        assert!(!regs.status.interrupt);
        assert!(!regs.status.brk);
        assert!(!regs.status.is_zero());
        assert_eq!(regs.status.to_byte(), 0x20);
    }
}
