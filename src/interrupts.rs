//! # Interrupt Controller
//!
//! The CPU latches at most one interrupt request at a time. The latch is not
//! a queue: a second normal IRQ while any request is pending is dropped, and
//! a request of another kind silently replaces whatever was pending.
//!
//! The pending request is serviced at the top of the next step, before the
//! opcode fetch:
//!
//! - **Normal (IRQ)**: ignored if the Interrupt Disable flag is set (the
//!   request is still consumed). Otherwise PC+1 and the status byte (with
//!   Break clear) are pushed, I is set and PC loads from `0xFFFE`.
//! - **NonMaskable (NMI)**: delivered only if the bus reports the VBlank NMI
//!   enable bit. PC+1 and the status byte are pushed and PC loads from
//!   `0xFFFA`.
//! - **Reset**: PC loads from `0xFFFC`; nothing is pushed.
//!
//! Vector targets are stored minus one to match the program counter
//! convention described in [`crate::registers`].

use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Kind of interrupt request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterruptKind {
    /// Maskable interrupt request (IRQ line)
    Normal = 0,
    /// Non-maskable interrupt (VBlank)
    NonMaskable = 1,
    /// Reset line
    Reset = 2,
}

impl InterruptKind {
    /// Numeric code used in save states.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(InterruptKind::Normal),
            1 => Some(InterruptKind::NonMaskable),
            2 => Some(InterruptKind::Reset),
            _ => None,
        }
    }
}

/// Single-entry interrupt latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterruptLatch {
    pending: Option<InterruptKind>,
}

impl InterruptLatch {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Latches a request.
    ///
    /// A normal request is dropped while anything is pending; any other
    /// request overwrites the latch.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{InterruptKind, InterruptLatch};
    ///
    /// let mut latch = InterruptLatch::new();
    /// latch.request(InterruptKind::NonMaskable);
    /// latch.request(InterruptKind::Normal);
    /// assert_eq!(latch.pending(), Some(InterruptKind::NonMaskable));
    /// ```
    pub fn request(&mut self, kind: InterruptKind) {
        if self.pending.is_some() && kind == InterruptKind::Normal {
            return;
        }
        self.pending = Some(kind);
    }

    pub fn pending(&self) -> Option<InterruptKind> {
        self.pending
    }

    /// Removes and returns the pending request.
    pub fn take(&mut self) -> Option<InterruptKind> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Services one interrupt request against the register file.
///
/// Returns true if control was redirected to a vector, false if the request
/// was masked (IRQ with I set) or gated (NMI with VBlank NMIs disabled).
pub fn service<M: MemoryBus>(
    kind: InterruptKind,
    regs: &mut Registers,
    memory: &mut Memory<M>,
) -> bool {
    match kind {
        InterruptKind::Normal => {
            if regs.status.interrupt {
                log::trace!("IRQ masked at pc=${:04X}", regs.pc);
                return false;
            }
            let mut pushed = regs.status;
            pushed.brk = false;
            push_frame(regs, memory, pushed.to_byte());
            regs.status.interrupt = true;
            regs.status.brk = false;
            regs.pc = memory.load16(IRQ_VECTOR).wrapping_sub(1);
            log::trace!("IRQ -> ${:04X}", regs.pc.wrapping_add(1));
            true
        }
        InterruptKind::NonMaskable => {
            if !memory.nmi_enabled() {
                log::trace!("NMI gated off at pc=${:04X}", regs.pc);
                return false;
            }
            let status = regs.status.to_byte();
            push_frame(regs, memory, status);
            regs.pc = memory.load16(NMI_VECTOR).wrapping_sub(1);
            log::trace!("NMI -> ${:04X}", regs.pc.wrapping_add(1));
            true
        }
        InterruptKind::Reset => {
            regs.pc = memory.load16(RESET_VECTOR).wrapping_sub(1);
            log::trace!("RESET -> ${:04X}", regs.pc.wrapping_add(1));
            true
        }
    }
}

/// Pushes the address of the next opcode (PC+1) and a status byte.
fn push_frame<M: MemoryBus>(regs: &mut Registers, memory: &mut Memory<M>, status: u8) {
    let return_address = regs.pc.wrapping_add(1);
    regs.push16(memory, return_address);
    regs.push(memory, status);
}
