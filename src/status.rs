//! # Processor Status Register
//!
//! The 6502 keeps eight status flags which are pushed and pulled as a single
//! packed byte (NV-BDIZC). This module owns the one and only packing routine;
//! every place that builds a status byte (PHP, BRK, IRQ, NMI, save states)
//! goes through [`Status::to_byte`].
//!
//! ## Zero Flag Residue
//!
//! The Zero flag is not stored as a boolean. Instead the status keeps the last
//! 8-bit result that affected it (the "residue"). The flag is considered set
//! when the residue is zero. Branches test the residue directly, and packing
//! inverts it: the packed Z bit is 1 iff the residue is 0. Unpacking a set
//! Z bit stores residue 0, a clear Z bit stores residue 1, so a
//! `from_byte(to_byte())` round trip reproduces every flag.

use bitflags::bitflags;

bitflags! {
    /// Bit positions of the packed status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        /// Bit 0: Carry
        const CARRY = 0b0000_0001;
        /// Bit 1: Zero
        const ZERO = 0b0000_0010;
        /// Bit 2: Interrupt Disable
        const INTERRUPT = 0b0000_0100;
        /// Bit 3: Decimal mode (tracked, never used for arithmetic)
        const DECIMAL = 0b0000_1000;
        /// Bit 4: Break
        const BREAK = 0b0001_0000;
        /// Bit 5: Unused, reads back as 1
        const UNUSED = 0b0010_0000;
        /// Bit 6: Overflow
        const OVERFLOW = 0b0100_0000;
        /// Bit 7: Sign (Negative)
        const SIGN = 0b1000_0000;
    }
}

/// The eight processor status flags.
///
/// All flags except Zero are plain booleans. See the module documentation for
/// the Zero residue invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub carry: bool,
    /// Last 8-bit result affecting the Zero flag; the flag is set when this is 0.
    pub zero: u8,
    pub interrupt: bool,
    pub decimal: bool,
    pub brk: bool,
    pub unused: bool,
    pub overflow: bool,
    pub sign: bool,
}

impl Status {
    /// Power-on status: I, B and the unused bit set, Zero residue 1 (flag clear).
    pub const fn power_on() -> Self {
        Self {
            carry: false,
            zero: 1,
            interrupt: true,
            decimal: false,
            brk: true,
            unused: true,
            overflow: false,
            sign: false,
        }
    }

    /// Returns true if the Zero flag is set (the residue is zero).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.zero == 0
    }

    /// Sets or clears the Zero flag without a meaningful residue.
    pub fn set_zero_flag(&mut self, set: bool) {
        self.zero = if set { 0 } else { 1 };
    }

    /// Updates Sign and Zero from an 8-bit result.
    #[inline]
    pub fn set_nz(&mut self, value: u8) {
        self.sign = value & 0x80 != 0;
        self.zero = value;
    }

    /// Packs the flags into the NV-BDIZC byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::Status;
    ///
    /// let status = Status::power_on();
    /// // I, B and bit 5 set; Zero residue is 1 so the Z bit is clear
    /// assert_eq!(status.to_byte(), 0x34);
    /// ```
    pub fn to_byte(&self) -> u8 {
        let mut flags = StatusFlags::empty();
        flags.set(StatusFlags::CARRY, self.carry);
        flags.set(StatusFlags::ZERO, self.is_zero());
        flags.set(StatusFlags::INTERRUPT, self.interrupt);
        flags.set(StatusFlags::DECIMAL, self.decimal);
        flags.set(StatusFlags::BREAK, self.brk);
        flags.set(StatusFlags::UNUSED, self.unused);
        flags.set(StatusFlags::OVERFLOW, self.overflow);
        flags.set(StatusFlags::SIGN, self.sign);
        flags.bits()
    }

    /// Unpacks an NV-BDIZC byte.
    pub fn from_byte(byte: u8) -> Self {
        let flags = StatusFlags::from_bits_retain(byte);
        Self {
            carry: flags.contains(StatusFlags::CARRY),
            zero: if flags.contains(StatusFlags::ZERO) { 0 } else { 1 },
            interrupt: flags.contains(StatusFlags::INTERRUPT),
            decimal: flags.contains(StatusFlags::DECIMAL),
            brk: flags.contains(StatusFlags::BREAK),
            unused: flags.contains(StatusFlags::UNUSED),
            overflow: flags.contains(StatusFlags::OVERFLOW),
            sign: flags.contains(StatusFlags::SIGN),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::power_on()
    }
}
