//! # Register File
//!
//! The programmer-visible CPU state: A, X, Y, PC, SP and the status flags,
//! plus the stack discipline that operates on SP.
//!
//! ## Program Counter Convention
//!
//! `pc` holds the address of the next opcode *minus one*. Fetch reads
//! `pc + 1`, and after an instruction `pc` points at its last byte. Jumps and
//! vector loads therefore store `target - 1`; the power-on value `0x7FFF`
//! makes the first fetch read `0x8000`.

use crate::memory::{Memory, MemoryBus};
use crate::status::Status;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// CPU register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Program counter (address of the next opcode minus one)
    pub pc: u16,
    /// Stack pointer offset into page 1
    pub sp: u8,
    /// Status flags
    pub status: Status,
}

impl Registers {
    /// Power-on register state.
    pub const fn power_on() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0x7FFF,
            sp: 0xFF,
            status: Status::power_on(),
        }
    }

    /// Full address the stack pointer refers to (`0x0100 | sp`).
    #[inline]
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }

    /// Writes `value` at the stack address, then decrements SP within page 1.
    pub fn push<M: MemoryBus>(&mut self, memory: &mut Memory<M>, value: u8) {
        memory.write(self.stack_address(), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP within page 1, then reads the stack address.
    pub fn pull<M: MemoryBus>(&mut self, memory: &mut Memory<M>) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        memory.load(self.stack_address())
    }

    /// Pushes a word, high byte first.
    pub fn push16<M: MemoryBus>(&mut self, memory: &mut Memory<M>, value: u16) {
        self.push(memory, (value >> 8) as u8);
        self.push(memory, (value & 0xFF) as u8);
    }

    /// Pulls a word, low byte first.
    pub fn pull16<M: MemoryBus>(&mut self, memory: &mut Memory<M>) -> u16 {
        let lo = self.pull(memory) as u16;
        let hi = self.pull(memory) as u16;
        (hi << 8) | lo
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::power_on()
    }
}
