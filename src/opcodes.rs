//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that maps every opcode
//! byte to its instruction, addressing mode, base cycle count and length.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! byte values have no instruction; executing one halts the CPU.
//!
//! Base cycle counts exclude the page-crossing and branch penalties, which
//! are added at execution time.

use crate::addressing::AddressingMode;

/// Instruction id reported for opcodes with no instruction.
pub const ILLEGAL_ID: u8 = 0xFF;

/// The 56 documented 6502 instructions.
///
/// Discriminants are the instruction ids stored in the opcode table and are
/// in alphabetical mnemonic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc = 0,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Instruction {
    /// All instructions, indexed by id.
    pub const ALL: [Instruction; 56] = [
        Instruction::Adc,
        Instruction::And,
        Instruction::Asl,
        Instruction::Bcc,
        Instruction::Bcs,
        Instruction::Beq,
        Instruction::Bit,
        Instruction::Bmi,
        Instruction::Bne,
        Instruction::Bpl,
        Instruction::Brk,
        Instruction::Bvc,
        Instruction::Bvs,
        Instruction::Clc,
        Instruction::Cld,
        Instruction::Cli,
        Instruction::Clv,
        Instruction::Cmp,
        Instruction::Cpx,
        Instruction::Cpy,
        Instruction::Dec,
        Instruction::Dex,
        Instruction::Dey,
        Instruction::Eor,
        Instruction::Inc,
        Instruction::Inx,
        Instruction::Iny,
        Instruction::Jmp,
        Instruction::Jsr,
        Instruction::Lda,
        Instruction::Ldx,
        Instruction::Ldy,
        Instruction::Lsr,
        Instruction::Nop,
        Instruction::Ora,
        Instruction::Pha,
        Instruction::Php,
        Instruction::Pla,
        Instruction::Plp,
        Instruction::Rol,
        Instruction::Ror,
        Instruction::Rti,
        Instruction::Rts,
        Instruction::Sbc,
        Instruction::Sec,
        Instruction::Sed,
        Instruction::Sei,
        Instruction::Sta,
        Instruction::Stx,
        Instruction::Sty,
        Instruction::Tax,
        Instruction::Tay,
        Instruction::Tsx,
        Instruction::Txa,
        Instruction::Txs,
        Instruction::Tya,
    ];

    const MNEMONICS: [&'static str; 56] = [
        "ADC", "AND", "ASL", "BCC", "BCS", "BEQ", "BIT", "BMI", "BNE", "BPL", "BRK", "BVC", "BVS",
        "CLC", "CLD", "CLI", "CLV", "CMP", "CPX", "CPY", "DEC", "DEX", "DEY", "EOR", "INC", "INX",
        "INY", "JMP", "JSR", "LDA", "LDX", "LDY", "LSR", "NOP", "ORA", "PHA", "PHP", "PLA", "PLP",
        "ROL", "ROR", "RTI", "RTS", "SBC", "SEC", "SED", "SEI", "STA", "STX", "STY", "TAX", "TAY",
        "TSX", "TXA", "TXS", "TYA",
    ];

    /// Numeric instruction id (0-55).
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up an instruction by id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Three-letter mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        Self::MNEMONICS[self as usize]
    }

    /// Returns true for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Instruction::Bcc
                | Instruction::Bcs
                | Instruction::Beq
                | Instruction::Bmi
                | Instruction::Bne
                | Instruction::Bpl
                | Instruction::Bvc
                | Instruction::Bvs
        )
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nes_cpu::{lookup, AddressingMode, Instruction};
///
/// // LDA immediate (opcode 0xA9)
/// let lda_imm = lookup(0xA9);
/// assert_eq!(lda_imm.instruction, Some(Instruction::Lda));
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction executed, or `None` for an illegal opcode.
    pub instruction: Option<Instruction>,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Illegal opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Entry used for every opcode without an instruction.
    pub const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
        instruction: None,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
    };

    const fn new(instruction: Instruction, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            instruction: Some(instruction),
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }

    /// Mnemonic, `"???"` for illegal opcodes.
    pub fn mnemonic(&self) -> &'static str {
        self.instruction.map_or("???", Instruction::mnemonic)
    }

    /// Returns true if this opcode has no instruction.
    pub fn is_illegal(&self) -> bool {
        self.instruction.is_none()
    }

    /// Instruction id, or [`ILLEGAL_ID`].
    pub fn instruction_id(&self) -> u8 {
        self.instruction.map_or(ILLEGAL_ID, Instruction::id)
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

/// Returns the metadata for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Instruction::*;

    let mut t = [OpcodeMetadata::ILLEGAL; 256];

    macro_rules! op {
        ($code:expr, $inst:expr, $mode:expr, $cycles:expr) => {
            t[$code] = OpcodeMetadata::new($inst, $mode, $cycles);
        };
    }

    // The eight-mode ALU group shares cycle counts
    macro_rules! alu {
        ($inst:expr, $imm:expr, $zp:expr, $zpx:expr, $abs:expr, $absx:expr, $absy:expr, $indx:expr, $indy:expr) => {
            op!($imm, $inst, Immediate, 2);
            op!($zp, $inst, ZeroPage, 3);
            op!($zpx, $inst, ZeroPageX, 4);
            op!($abs, $inst, Absolute, 4);
            op!($absx, $inst, AbsoluteX, 4);
            op!($absy, $inst, AbsoluteY, 4);
            op!($indx, $inst, IndirectX, 6);
            op!($indy, $inst, IndirectY, 5);
        };
    }

    // Read-modify-write shifts and rotates
    macro_rules! rmw {
        ($inst:expr, $zp:expr, $zpx:expr, $abs:expr, $absx:expr) => {
            op!($zp, $inst, ZeroPage, 5);
            op!($zpx, $inst, ZeroPageX, 6);
            op!($abs, $inst, Absolute, 6);
            op!($absx, $inst, AbsoluteX, 7);
        };
    }

    alu!(Adc, 0x69, 0x65, 0x75, 0x6D, 0x7D, 0x79, 0x61, 0x71);
    alu!(And, 0x29, 0x25, 0x35, 0x2D, 0x3D, 0x39, 0x21, 0x31);
    alu!(Cmp, 0xC9, 0xC5, 0xD5, 0xCD, 0xDD, 0xD9, 0xC1, 0xD1);
    alu!(Eor, 0x49, 0x45, 0x55, 0x4D, 0x5D, 0x59, 0x41, 0x51);
    alu!(Lda, 0xA9, 0xA5, 0xB5, 0xAD, 0xBD, 0xB9, 0xA1, 0xB1);
    alu!(Ora, 0x09, 0x05, 0x15, 0x0D, 0x1D, 0x19, 0x01, 0x11);
    alu!(Sbc, 0xE9, 0xE5, 0xF5, 0xED, 0xFD, 0xF9, 0xE1, 0xF1);

    op!(0x0A, Asl, Accumulator, 2);
    rmw!(Asl, 0x06, 0x16, 0x0E, 0x1E);
    op!(0x4A, Lsr, Accumulator, 2);
    rmw!(Lsr, 0x46, 0x56, 0x4E, 0x5E);
    op!(0x2A, Rol, Accumulator, 2);
    rmw!(Rol, 0x26, 0x36, 0x2E, 0x3E);
    op!(0x6A, Ror, Accumulator, 2);
    rmw!(Ror, 0x66, 0x76, 0x6E, 0x7E);
    rmw!(Inc, 0xE6, 0xF6, 0xEE, 0xFE);
    rmw!(Dec, 0xC6, 0xD6, 0xCE, 0xDE);

    op!(0x90, Bcc, Relative, 2);
    op!(0xB0, Bcs, Relative, 2);
    op!(0xF0, Beq, Relative, 2);
    op!(0x30, Bmi, Relative, 2);
    op!(0xD0, Bne, Relative, 2);
    op!(0x10, Bpl, Relative, 2);
    op!(0x50, Bvc, Relative, 2);
    op!(0x70, Bvs, Relative, 2);

    op!(0x24, Bit, ZeroPage, 3);
    op!(0x2C, Bit, Absolute, 4);

    op!(0xE0, Cpx, Immediate, 2);
    op!(0xE4, Cpx, ZeroPage, 3);
    op!(0xEC, Cpx, Absolute, 4);
    op!(0xC0, Cpy, Immediate, 2);
    op!(0xC4, Cpy, ZeroPage, 3);
    op!(0xCC, Cpy, Absolute, 4);

    op!(0xA2, Ldx, Immediate, 2);
    op!(0xA6, Ldx, ZeroPage, 3);
    op!(0xB6, Ldx, ZeroPageY, 4);
    op!(0xAE, Ldx, Absolute, 4);
    op!(0xBE, Ldx, AbsoluteY, 4);
    op!(0xA0, Ldy, Immediate, 2);
    op!(0xA4, Ldy, ZeroPage, 3);
    op!(0xB4, Ldy, ZeroPageX, 4);
    op!(0xAC, Ldy, Absolute, 4);
    op!(0xBC, Ldy, AbsoluteX, 4);

    op!(0x85, Sta, ZeroPage, 3);
    op!(0x95, Sta, ZeroPageX, 4);
    op!(0x8D, Sta, Absolute, 4);
    op!(0x9D, Sta, AbsoluteX, 5);
    op!(0x99, Sta, AbsoluteY, 5);
    op!(0x81, Sta, IndirectX, 6);
    op!(0x91, Sta, IndirectY, 6);
    op!(0x86, Stx, ZeroPage, 3);
    op!(0x96, Stx, ZeroPageY, 4);
    op!(0x8E, Stx, Absolute, 4);
    op!(0x84, Sty, ZeroPage, 3);
    op!(0x94, Sty, ZeroPageX, 4);
    op!(0x8C, Sty, Absolute, 4);

    op!(0x4C, Jmp, Absolute, 3);
    op!(0x6C, Jmp, Indirect, 5);
    op!(0x20, Jsr, Absolute, 6);
    op!(0x60, Rts, Implicit, 6);
    op!(0x40, Rti, Implicit, 6);
    op!(0x00, Brk, Implicit, 7);
    op!(0xEA, Nop, Implicit, 2);

    op!(0x48, Pha, Implicit, 3);
    op!(0x08, Php, Implicit, 3);
    op!(0x68, Pla, Implicit, 4);
    op!(0x28, Plp, Implicit, 4);

    op!(0x18, Clc, Implicit, 2);
    op!(0xD8, Cld, Implicit, 2);
    op!(0x58, Cli, Implicit, 2);
    op!(0xB8, Clv, Implicit, 2);
    op!(0x38, Sec, Implicit, 2);
    op!(0xF8, Sed, Implicit, 2);
    op!(0x78, Sei, Implicit, 2);

    op!(0xE8, Inx, Implicit, 2);
    op!(0xC8, Iny, Implicit, 2);
    op!(0xCA, Dex, Implicit, 2);
    op!(0x88, Dey, Implicit, 2);

    op!(0xAA, Tax, Implicit, 2);
    op!(0xA8, Tay, Implicit, 2);
    op!(0xBA, Tsx, Implicit, 2);
    op!(0x8A, Txa, Implicit, 2);
    op!(0x9A, Txs, Implicit, 2);
    op!(0x98, Tya, Implicit, 2);

    t
}
