//! # NES CPU Core
//!
//! A cycle-counting emulator of the NMOS 6502 as found in the NES 2A03
//! (binary arithmetic only; the decimal flag is tracked but inert).
//!
//! The core executes one instruction per call to [`CPU::emulate`] and returns
//! the cycles it took, so a host scheduler can keep video, audio and timers in
//! step. Everything outside the CPU (cartridge mapper, PPU and APU registers)
//! lives behind the [`MemoryBus`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes_cpu::{CPU, FlatMemory, InterruptKind, MemoryBus};
//!
//! let mut bus = FlatMemory::new();
//! bus.load(0xC000, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD]); // LDX #5; loop: DEX; BNE loop
//! bus.write(0xFFFC, 0x00);
//! bus.write(0xFFFD, 0xC0);
//!
//! let mut cpu = CPU::new(bus);
//! cpu.request_irq(InterruptKind::Reset);
//!
//! let mut total = 0;
//! for _ in 0..11 {
//!     total += cpu.emulate();
//! }
//! assert_eq!(cpu.x(), 0);
//! assert!(cpu.flag_z());
//! assert_eq!(total, 2 + 5 * 2 + 4 * 3 + 2);
//! ```
//!
//! ## Program Counter Convention
//!
//! PC holds the address of the next opcode minus one. After an instruction it
//! points at that instruction's last byte. Power-on sets it to 0x7FFF.
//!
//! ## Modules
//!
//! - `cpu` - Engine state and the step loop
//! - `registers` / `status` - Register file and flag packing
//! - `memory` - MemoryBus trait and the RAM/bus adapter
//! - `addressing` - Effective address resolution
//! - `opcodes` - Opcode metadata table
//! - `interrupts` - Interrupt latch and service sequences
//! - `savestate` - Binary snapshots of the core

pub mod addressing;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod savestate;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{CPU, STALL_CHUNK};
pub use interrupts::{InterruptKind, InterruptLatch, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{
    FlatMemory, Memory, MemoryBus, NMI_ENABLE_MASK, NMI_ENABLE_REGISTER, RAM_MIRROR_END, RAM_SIZE,
};
pub use opcodes::{lookup, Instruction, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, STACK_PAGE};
pub use savestate::{CpuState, SAVESTATE_MAGIC, SAVESTATE_VERSION};
pub use status::{Status, StatusFlags};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte has no instruction. The engine halts.
    ///
    /// `address` is where the opcode was fetched from.
    IllegalOpcode { opcode: u8, address: u16 },

    /// The engine was already halted; call [`CPU::reset`] to recover.
    Halted,
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, address } => {
                write!(f, "invalid opcode ${:02X} at address ${:04X}", opcode, address)
            }
            ExecutionError::Halted => write!(f, "CPU is halted"),
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Errors from decoding a save state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStateError {
    /// The data ended before a complete state was read.
    TooShort { expected: usize, actual: usize },
    /// The data does not start with the save state magic number.
    BadMagic,
    /// The format version is not one this crate reads.
    UnsupportedVersion(u32),
    /// The pending-interrupt byte holds an unknown code.
    InvalidInterrupt(u8),
}

impl std::fmt::Display for SaveStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SaveStateError::TooShort { expected, actual } => {
                write!(f, "save state too small: expected {} bytes, got {}", expected, actual)
            }
            SaveStateError::BadMagic => write!(f, "invalid save state magic number"),
            SaveStateError::UnsupportedVersion(version) => write!(
                f,
                "incompatible save state version: expected {}, got {}",
                SAVESTATE_VERSION, version
            ),
            SaveStateError::InvalidInterrupt(code) => {
                write!(f, "invalid pending interrupt code {}", code)
            }
        }
    }
}

impl std::error::Error for SaveStateError {}
