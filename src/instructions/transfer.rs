//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX / TAY: Accumulator to index register
//! - TXA / TYA: Index register to accumulator
//! - TSX / TXS: Stack pointer to and from X
//!
//! Every transfer updates N and Z from the destination except TXS, which
//! touches no flags.

use super::{Flow, DONE};
use crate::addressing::Operand;
use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.x = regs.a;
    regs.status.set_nz(regs.x);
    DONE
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.y = regs.a;
    regs.status.set_nz(regs.y);
    DONE
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// X receives the 8-bit offset into page one, not the full stack address.
pub(crate) fn execute_tsx<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.x = regs.sp;
    regs.status.set_nz(regs.x);
    DONE
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.a = regs.x;
    regs.status.set_nz(regs.a);
    DONE
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
pub(crate) fn execute_txs<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.sp = regs.x;
    DONE
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    regs: &mut Registers,
    _memory: &mut Memory<M>,
    _operand: &Operand,
) -> Flow {
    regs.a = regs.y;
    regs.status.set_nz(regs.a);
    DONE
}
