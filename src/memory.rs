//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! console's mapper, and the `Memory` adapter the CPU uses for every access.
//!
//! ## Address Routing
//!
//! The adapter owns the 2KB of console work RAM. Addresses below `0x2000` never
//! reach the bus: they are masked with `0x7FF`, so the four 2KB windows in
//! `0x0000-0x1FFF` all alias the same RAM. Everything at `0x2000` and above is
//! delegated to the bus, which owns PPU/APU registers, cartridge RAM, PRG-ROM
//! banks and their side effects.
//!
//! ## Design Principles
//!
//! - No bus errors - reads/writes always succeed
//! - Reads take `&mut self` because I/O register reads have side effects
//! - Nothing read through the bus is cached between instructions

/// First address that is routed to the bus instead of work RAM.
pub const RAM_MIRROR_END: u16 = 0x2000;

/// Size of the console work RAM in bytes.
pub const RAM_SIZE: usize = 0x800;

/// Mask applied to addresses inside the mirrored RAM region.
const RAM_MASK: u16 = 0x07FF;

/// Register whose bit 7 enables the vertical-blank NMI (PPUCTRL on the NES).
pub const NMI_ENABLE_REGISTER: u16 = 0x2000;

/// Bit of [`NMI_ENABLE_REGISTER`] that gates NMI delivery.
pub const NMI_ENABLE_MASK: u8 = 0x80;

/// Memory bus trait for the mapper side of the CPU's address space.
///
/// The CPU calls into the bus for every address at or above `0x2000`.
///
/// # Examples
///
/// ```
/// use nes_cpu::MemoryBus;
///
/// struct PrgRom {
///     rom: Vec<u8>,
/// }
///
/// impl MemoryBus for PrgRom {
///     fn read(&mut self, addr: u16) -> u8 {
///         if addr >= 0x8000 {
///             self.rom[(addr as usize - 0x8000) % self.rom.len()]
///         } else {
///             0
///         }
///     }
///
///     fn write(&mut self, _addr: u16, _value: u8) {
///         // ROM: writes are ignored
///     }
/// }
///
/// let mut rom = PrgRom { rom: vec![0xEA; 0x4000] };
/// assert_eq!(rom.read(0xC000), 0xEA);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Unmapped addresses may return any value.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes to read-only or unmapped
    /// addresses may be ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reports whether a pending NMI should be delivered.
    ///
    /// The default reads bit 7 of [`NMI_ENABLE_REGISTER`] through the bus.
    /// Buses whose enable register is write-only on real hardware should
    /// override this with their latched copy.
    fn nmi_enabled(&mut self) -> bool {
        self.read(NMI_ENABLE_REGISTER) & NMI_ENABLE_MASK != 0
    }
}

impl<B: MemoryBus + ?Sized> MemoryBus for Box<B> {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }

    fn nmi_enabled(&mut self) -> bool {
        (**self).nmi_enabled()
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to one contiguous array initialized to zero.
/// Useful for tests and for hosts that only need a ROM image and a vector
/// table. Note that the CPU never forwards `0x0000-0x1FFF` to the bus, so
/// those bytes of a `FlatMemory` are only visible to the host.
///
/// # Examples
///
/// ```
/// use nes_cpu::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x8000, 0xEA);
/// assert_eq!(mem.read(0x8000), 0xEA);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at `0xFFFF`.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// The CPU-side memory access adapter: mirrored work RAM plus the bus.
pub struct Memory<M: MemoryBus> {
    ram: Box<[u8; RAM_SIZE]>,
    bus: M,
}

impl<M: MemoryBus> Memory<M> {
    /// Creates an adapter with zeroed work RAM in front of `bus`.
    pub fn new(bus: M) -> Self {
        Self {
            ram: Box::new([0; RAM_SIZE]),
            bus,
        }
    }

    /// Reads one byte.
    #[inline]
    pub fn load(&mut self, addr: u16) -> u8 {
        if addr < RAM_MIRROR_END {
            self.ram[(addr & RAM_MASK) as usize]
        } else {
            self.bus.read(addr)
        }
    }

    /// Reads a little-endian word from `addr` and `addr + 1`.
    ///
    /// Each byte is routed independently, so a word read inside RAM wraps
    /// within the mirrored 2KB window exactly like two single-byte reads.
    pub fn load16(&mut self, addr: u16) -> u16 {
        let lo = self.load(addr) as u16;
        let hi = self.load(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes one byte.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        if addr < RAM_MIRROR_END {
            self.ram[(addr & RAM_MASK) as usize] = value;
        } else {
            self.bus.write(addr, value);
        }
    }

    pub fn ram(&self) -> &[u8; RAM_SIZE] {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut [u8; RAM_SIZE] {
        &mut self.ram
    }

    pub fn bus(&self) -> &M {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut M {
        &mut self.bus
    }

    /// Swaps in a new bus and returns the previous one. RAM is kept.
    pub fn replace_bus(&mut self, bus: M) -> M {
        std::mem::replace(&mut self.bus, bus)
    }

    pub(crate) fn nmi_enabled(&mut self) -> bool {
        self.bus.nmi_enabled()
    }
}
