//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone handler that receives the register file,
//! the memory adapter and the already-resolved operand. Handlers never fetch
//! operand bytes or advance PC themselves; the CPU does that before dispatch.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, BIT
//! - **compare**: CMP, CPX, CPY
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::{AddressingMode, Operand};
use crate::memory::{Memory, MemoryBus};
use crate::opcodes::Instruction;
use crate::registers::Registers;

/// What the CPU should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Instruction finished; charge this many cycles on top of the base count.
    Continue(u8),
    /// RTS/RTI pulled the 0xFFFF return sentinel; end the step here.
    Exit,
}

/// Shorthand for handlers that never add cycles.
pub(crate) const DONE: Flow = Flow::Continue(0);

/// Runs the handler for `instruction`.
pub(crate) fn execute<M: MemoryBus>(
    instruction: Instruction,
    regs: &mut Registers,
    memory: &mut Memory<M>,
    operand: &Operand,
) -> Flow {
    match instruction {
        Instruction::Adc => alu::execute_adc(regs, memory, operand),
        Instruction::And => alu::execute_and(regs, memory, operand),
        Instruction::Asl => shifts::execute_asl(regs, memory, operand),
        Instruction::Bcc => branches::execute_bcc(regs, memory, operand),
        Instruction::Bcs => branches::execute_bcs(regs, memory, operand),
        Instruction::Beq => branches::execute_beq(regs, memory, operand),
        Instruction::Bit => alu::execute_bit(regs, memory, operand),
        Instruction::Bmi => branches::execute_bmi(regs, memory, operand),
        Instruction::Bne => branches::execute_bne(regs, memory, operand),
        Instruction::Bpl => branches::execute_bpl(regs, memory, operand),
        Instruction::Brk => control::execute_brk(regs, memory, operand),
        Instruction::Bvc => branches::execute_bvc(regs, memory, operand),
        Instruction::Bvs => branches::execute_bvs(regs, memory, operand),
        Instruction::Clc => flags::execute_clc(regs, memory, operand),
        Instruction::Cld => flags::execute_cld(regs, memory, operand),
        Instruction::Cli => flags::execute_cli(regs, memory, operand),
        Instruction::Clv => flags::execute_clv(regs, memory, operand),
        Instruction::Cmp => compare::execute_cmp(regs, memory, operand),
        Instruction::Cpx => compare::execute_cpx(regs, memory, operand),
        Instruction::Cpy => compare::execute_cpy(regs, memory, operand),
        Instruction::Dec => inc_dec::execute_dec(regs, memory, operand),
        Instruction::Dex => inc_dec::execute_dex(regs, memory, operand),
        Instruction::Dey => inc_dec::execute_dey(regs, memory, operand),
        Instruction::Eor => alu::execute_eor(regs, memory, operand),
        Instruction::Inc => inc_dec::execute_inc(regs, memory, operand),
        Instruction::Inx => inc_dec::execute_inx(regs, memory, operand),
        Instruction::Iny => inc_dec::execute_iny(regs, memory, operand),
        Instruction::Jmp => control::execute_jmp(regs, memory, operand),
        Instruction::Jsr => control::execute_jsr(regs, memory, operand),
        Instruction::Lda => load_store::execute_lda(regs, memory, operand),
        Instruction::Ldx => load_store::execute_ldx(regs, memory, operand),
        Instruction::Ldy => load_store::execute_ldy(regs, memory, operand),
        Instruction::Lsr => shifts::execute_lsr(regs, memory, operand),
        Instruction::Nop => control::execute_nop(regs, memory, operand),
        Instruction::Ora => alu::execute_ora(regs, memory, operand),
        Instruction::Pha => stack::execute_pha(regs, memory, operand),
        Instruction::Php => stack::execute_php(regs, memory, operand),
        Instruction::Pla => stack::execute_pla(regs, memory, operand),
        Instruction::Plp => stack::execute_plp(regs, memory, operand),
        Instruction::Rol => shifts::execute_rol(regs, memory, operand),
        Instruction::Ror => shifts::execute_ror(regs, memory, operand),
        Instruction::Rti => control::execute_rti(regs, memory, operand),
        Instruction::Rts => control::execute_rts(regs, memory, operand),
        Instruction::Sbc => alu::execute_sbc(regs, memory, operand),
        Instruction::Sec => flags::execute_sec(regs, memory, operand),
        Instruction::Sed => flags::execute_sed(regs, memory, operand),
        Instruction::Sei => flags::execute_sei(regs, memory, operand),
        Instruction::Sta => load_store::execute_sta(regs, memory, operand),
        Instruction::Stx => load_store::execute_stx(regs, memory, operand),
        Instruction::Sty => load_store::execute_sty(regs, memory, operand),
        Instruction::Tax => transfer::execute_tax(regs, memory, operand),
        Instruction::Tay => transfer::execute_tay(regs, memory, operand),
        Instruction::Tsx => transfer::execute_tsx(regs, memory, operand),
        Instruction::Txa => transfer::execute_txa(regs, memory, operand),
        Instruction::Txs => transfer::execute_txs(regs, memory, operand),
        Instruction::Tya => transfer::execute_tya(regs, memory, operand),
    }
}

/// Page-crossing penalty for read instructions.
#[inline]
pub(crate) fn page_penalty(operand: &Operand) -> Flow {
    Flow::Continue(operand.page_crossed as u8)
}

/// Page-crossing penalty for AND, ORA, EOR and SBC, which are not charged
/// the extra cycle in (Indirect),Y mode.
#[inline]
pub(crate) fn page_penalty_unless_indirect_y(operand: &Operand) -> Flow {
    if operand.mode == AddressingMode::IndirectY {
        DONE
    } else {
        page_penalty(operand)
    }
}
