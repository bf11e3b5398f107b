//! Save state capture for the CPU core.
//!
//! [`CpuState`] snapshots everything the engine owns: registers, the packed
//! status byte, the pending interrupt, the stall counter, the cycle counter
//! and the 2KB internal RAM. The bus is owned by the host and saved there.
//!
//! ## Binary Format
//!
//! All multi-byte values are little-endian:
//! - 4 bytes: Magic number "N6CS"
//! - 4 bytes: Version (u32)
//! - 4 bytes: A, X, Y, SP
//! - 2 bytes: PC
//! - 1 byte: Status (NV-BDIZC)
//! - 1 byte: Pending interrupt (0 Normal, 1 NonMaskable, 2 Reset, 0xFF none)
//! - 4 bytes: Stall cycles (u32)
//! - 8 bytes: Total cycles (u64)
//! - 2048 bytes: Internal RAM
//!
//! ## Usage
//!
//! ```rust
//! use nes_cpu::{CpuState, CPU, FlatMemory};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.set_a(0x42);
//! cpu.ram_mut()[0x0123] = 0x99;
//!
//! let bytes = CpuState::capture(&cpu).serialize();
//!
//! let mut other = CPU::new(FlatMemory::new());
//! CpuState::deserialize(&bytes).unwrap().restore(&mut other);
//! assert_eq!(other.a(), 0x42);
//! assert_eq!(other.ram()[0x0123], 0x99);
//! ```

use crate::cpu::CPU;
use crate::interrupts::InterruptKind;
use crate::memory::{MemoryBus, RAM_SIZE};
use crate::status::Status;
use crate::SaveStateError;

/// Current save state format version.
///
/// Increment this when making breaking changes to the format.
pub const SAVESTATE_VERSION: u32 = 1;

/// Magic number for save state data ("N6CS" in ASCII).
pub const SAVESTATE_MAGIC: [u8; 4] = *b"N6CS";

/// Size of the save state header (magic + version).
const HEADER_SIZE: usize = 4 + 4;

/// Total serialized size.
pub const SAVESTATE_SIZE: usize = HEADER_SIZE + 4 + 2 + 1 + 1 + 4 + 8 + RAM_SIZE;

/// Byte stored when no interrupt is pending.
const NO_INTERRUPT: u8 = 0xFF;

/// Snapshot of the CPU core.
///
/// The Zero flag is stored through the packed status byte, so only whether
/// it was set survives a round trip, not the exact residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    /// Packed NV-BDIZC byte.
    pub status: u8,
    pub pending_interrupt: Option<InterruptKind>,
    pub cycles_to_halt: u32,
    pub cycles: u64,
    pub ram: Box<[u8; RAM_SIZE]>,
}

impl CpuState {
    /// Captures the current state of `cpu`.
    pub fn capture<M: MemoryBus>(cpu: &CPU<M>) -> Self {
        let regs = cpu.registers();
        Self {
            a: regs.a,
            x: regs.x,
            y: regs.y,
            sp: regs.sp,
            pc: regs.pc,
            status: regs.status.to_byte(),
            pending_interrupt: cpu.pending_interrupt(),
            cycles_to_halt: cpu.cycles_to_halt,
            cycles: cpu.cycles,
            ram: Box::new(*cpu.ram()),
        }
    }

    /// Writes this state into `cpu`.
    ///
    /// Clears any halt and the sentinel-exit flag. The bus is not touched.
    pub fn restore<M: MemoryBus>(&self, cpu: &mut CPU<M>) {
        let regs = cpu.registers_mut();
        regs.a = self.a;
        regs.x = self.x;
        regs.y = self.y;
        regs.sp = self.sp;
        regs.pc = self.pc;
        regs.status = Status::from_byte(self.status);

        cpu.interrupts.clear();
        if let Some(kind) = self.pending_interrupt {
            cpu.interrupts.request(kind);
        }
        cpu.cycles_to_halt = self.cycles_to_halt;
        cpu.cycles = self.cycles;
        cpu.crash = None;
        cpu.exited = false;
        cpu.ram_mut().copy_from_slice(&self.ram[..]);

        log::debug!("restored CPU state, pc=${:04X}", self.pc);
    }

    /// Serializes the state to the binary format.
    pub fn serialize(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(SAVESTATE_SIZE);

        data.extend_from_slice(&SAVESTATE_MAGIC);
        data.extend_from_slice(&SAVESTATE_VERSION.to_le_bytes());

        data.push(self.a);
        data.push(self.x);
        data.push(self.y);
        data.push(self.sp);
        data.extend_from_slice(&self.pc.to_le_bytes());
        data.push(self.status);
        data.push(self.pending_interrupt.map_or(NO_INTERRUPT, InterruptKind::code));
        data.extend_from_slice(&self.cycles_to_halt.to_le_bytes());
        data.extend_from_slice(&self.cycles.to_le_bytes());
        data.extend_from_slice(&self.ram[..]);

        data
    }

    /// Parses the binary format.
    ///
    /// # Errors
    ///
    /// - [`SaveStateError::TooShort`] if `data` is truncated
    /// - [`SaveStateError::BadMagic`] if the magic number does not match
    /// - [`SaveStateError::UnsupportedVersion`] for any other format version
    /// - [`SaveStateError::InvalidInterrupt`] for an unknown interrupt code
    pub fn deserialize(data: &[u8]) -> Result<Self, SaveStateError> {
        if data.len() < HEADER_SIZE {
            return Err(SaveStateError::TooShort {
                expected: SAVESTATE_SIZE,
                actual: data.len(),
            });
        }
        if data[0..4] != SAVESTATE_MAGIC {
            return Err(SaveStateError::BadMagic);
        }

        let version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        if version != SAVESTATE_VERSION {
            return Err(SaveStateError::UnsupportedVersion(version));
        }

        if data.len() < SAVESTATE_SIZE {
            return Err(SaveStateError::TooShort {
                expected: SAVESTATE_SIZE,
                actual: data.len(),
            });
        }

        let mut pos = HEADER_SIZE;

        let a = data[pos];
        let x = data[pos + 1];
        let y = data[pos + 2];
        let sp = data[pos + 3];
        pos += 4;

        let pc = u16::from_le_bytes([data[pos], data[pos + 1]]);
        pos += 2;

        let status = data[pos];
        pos += 1;

        let pending_interrupt = match data[pos] {
            NO_INTERRUPT => None,
            code => Some(
                InterruptKind::from_code(code).ok_or(SaveStateError::InvalidInterrupt(code))?,
            ),
        };
        pos += 1;

        let cycles_to_halt =
            u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]);
        pos += 4;

        let mut cycle_bytes = [0u8; 8];
        cycle_bytes.copy_from_slice(&data[pos..pos + 8]);
        let cycles = u64::from_le_bytes(cycle_bytes);
        pos += 8;

        let mut ram = Box::new([0u8; RAM_SIZE]);
        ram.copy_from_slice(&data[pos..pos + RAM_SIZE]);

        Ok(Self {
            a,
            x,
            y,
            sp,
            pc,
            status,
            pending_interrupt,
            cycles_to_halt,
            cycles,
            ram,
        })
    }
}
