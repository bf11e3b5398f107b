//! # Control Flow Instructions
//!
//! This module implements jumps, subroutine calls and returns:
//! - JMP: Jump (Absolute and Indirect)
//! - JSR / RTS: Jump to Subroutine / Return from Subroutine
//! - RTI: Return from Interrupt
//! - BRK: Software interrupt
//! - NOP: No Operation
//!
//! Every write to PC stores `target - 1` because the next fetch reads `pc + 1`.
//!
//! ## Return Sentinel
//!
//! A return address of `0xFFFF` pulled by RTS or RTI means control returned
//! past the top-level caller. The handler stores it in PC and reports
//! [`Flow::Exit`]; the step ends there.

use super::{Flow, DONE};
use crate::addressing::Operand;
use crate::interrupts::IRQ_VECTOR;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;
use crate::status::Status;

/// Return address that marks "no caller left".
pub(crate) const RETURN_SENTINEL: u16 = 0xFFFF;

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already applied the Indirect page-wrap quirk, so both
/// modes simply transfer control to `operand.address`.
pub(crate) fn execute_jmp<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    regs.pc = operand.address.wrapping_sub(1);
    DONE
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// After the operand is consumed PC points at the last byte of the JSR, which
/// is exactly the return address minus one that RTS expects. It is pushed
/// high byte first.
pub(crate) fn execute_jsr<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    let return_address = regs.pc;
    regs.push16(memory, return_address);
    regs.pc = operand.address.wrapping_sub(1);
    DONE
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.pc = regs.pull16(memory);
    if regs.pc == RETURN_SENTINEL {
        log::debug!("RTS reached the return sentinel");
        return Flow::Exit;
    }
    DONE
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte, then the return address. Interrupt frames hold the
/// real address of the next opcode, so PC is decremented to restore the
/// minus-one convention. Bit 5 always reads back as set.
pub(crate) fn execute_rti<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    let status = regs.pull(memory);
    regs.status = Status::from_byte(status);
    regs.status.unused = true;

    regs.pc = regs.pull16(memory);
    if regs.pc == RETURN_SENTINEL {
        log::debug!("RTI reached the return sentinel");
        return Flow::Exit;
    }
    regs.pc = regs.pc.wrapping_sub(1);
    DONE
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// PC is advanced by two so the pushed address skips the padding byte that
/// follows BRK. The status is pushed with Break set, then I is set and
/// control moves through the IRQ/BRK vector.
pub(crate) fn execute_brk<M: MemoryBus>(
    regs: &mut Registers,
    memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.pc = regs.pc.wrapping_add(2);
    let return_address = regs.pc;
    regs.push16(memory, return_address);

    regs.status.brk = true;
    let status = regs.status.to_byte();
    regs.push(memory, status);

    regs.status.interrupt = true;
    regs.pc = memory.load16(IRQ_VECTOR).wrapping_sub(1);
    DONE
}

pub(crate) fn execute_nop<M: MemoryBus>(
    _regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    DONE
}
