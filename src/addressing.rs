//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an instruction's operand bytes into an
//! effective address.
//!
//! Each mode has a fixed numeric id (0-12) which is what the opcode table
//! stores. The resolver runs after the program counter has already been
//! advanced past the instruction, and reports whether indexing crossed a page
//! so the instruction can decide whether to charge an extra cycle.

use crate::memory::{Memory, MemoryBus};
use crate::registers::Registers;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage = 0,

    /// Signed 8-bit offset for branch instructions, relative to the end of
    /// the instruction.
    ///
    /// Example: BEQ label
    Relative = 1,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit = 2,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute = 3,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator = 4,

    /// 8-bit constant operand in instruction; the effective address is the
    /// operand byte itself.
    ///
    /// Example: LDA #$10
    Immediate = 5,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX = 6,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY = 7,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX = 8,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY = 9,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX = 10,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY = 11,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect = 12,
}

impl AddressingMode {
    /// All modes, indexed by id.
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::ZeroPage,
        AddressingMode::Relative,
        AddressingMode::Implicit,
        AddressingMode::Absolute,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
        AddressingMode::Indirect,
    ];

    /// Numeric id used by the opcode table.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a mode by numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Mode the operand was resolved with.
    pub mode: AddressingMode,
    /// Effective address (or the accumulator value in Accumulator mode).
    pub address: u16,
    /// Whether indexing crossed a page boundary.
    pub page_crossed: bool,
    /// Program counter value before the instruction was fetched.
    pub origin: u16,
}

#[inline]
fn crosses_page(base: u16, index: u8) -> bool {
    (base & 0xFF00) != (base.wrapping_add(index as u16) & 0xFF00)
}

/// Computes the effective address for `mode`.
///
/// `origin` is the program counter before the instruction (so the opcode
/// lives at `origin + 1` and its operand at `origin + 2`); `regs.pc` must
/// already point at the last byte of the instruction.
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    origin: u16,
    regs: &Registers,
    memory: &mut Memory<M>,
) -> Operand {
    let operand_addr = origin.wrapping_add(2);
    let mut page_crossed = false;

    let address = match mode {
        AddressingMode::ZeroPage => memory.load(operand_addr) as u16,
        AddressingMode::Relative => {
            let offset = memory.load(operand_addr) as i8;
            regs.pc.wrapping_add_signed(offset as i16)
        }
        AddressingMode::Implicit => 0,
        AddressingMode::Absolute => memory.load16(operand_addr),
        AddressingMode::Accumulator => regs.a as u16,
        AddressingMode::Immediate => regs.pc,
        AddressingMode::ZeroPageX => memory.load(operand_addr).wrapping_add(regs.x) as u16,
        AddressingMode::ZeroPageY => memory.load(operand_addr).wrapping_add(regs.y) as u16,
        AddressingMode::AbsoluteX => {
            let base = memory.load16(operand_addr);
            page_crossed = crosses_page(base, regs.x);
            base.wrapping_add(regs.x as u16)
        }
        AddressingMode::AbsoluteY => {
            let base = memory.load16(operand_addr);
            page_crossed = crosses_page(base, regs.y);
            base.wrapping_add(regs.y as u16)
        }
        AddressingMode::IndirectX => {
            let base = memory.load(operand_addr) as u16;
            // The pointer itself wraps in zero page; the crossing only shows
            // up when operand + X overflows 0xFF
            page_crossed = crosses_page(base, regs.x);
            let pointer = base.wrapping_add(regs.x as u16) & 0x00FF;
            memory.load16(pointer)
        }
        AddressingMode::IndirectY => {
            let pointer = memory.load(operand_addr) as u16;
            let base = memory.load16(pointer);
            page_crossed = crosses_page(base, regs.y);
            base.wrapping_add(regs.y as u16)
        }
        AddressingMode::Indirect => {
            let pointer = memory.load16(operand_addr);
            // NMOS bug: the high byte is fetched from the same page
            let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
            let lo = memory.load(pointer) as u16;
            let hi = memory.load(hi_addr) as u16;
            (hi << 8) | lo
        }
    };

    Operand {
        mode,
        address,
        page_crossed,
        origin,
    }
}
