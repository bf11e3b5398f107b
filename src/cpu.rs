//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 2A03 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, PC, SP and status flags ([`Registers`])
//! - **Memory adapter**: 2KB internal RAM plus the host bus ([`Memory`])
//! - **Interrupt latch**: at most one pending request ([`InterruptLatch`])
//! - **Stall counter**: cycles the host injected with [`CPU::halt_cycles`]
//! - **Halt state**: the error that stopped execution, if any
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `emulate()`: Service any pending interrupt, then execute one instruction
//! - `step()`: The same, reporting a halt as an error
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//!
//! A step never blocks. Once an illegal opcode halts the engine, every further
//! step is a no-op until [`CPU::reset`].

use crate::addressing;
use crate::instructions::{self, Flow};
use crate::interrupts::{self, InterruptKind, InterruptLatch};
use crate::memory::{Memory, MemoryBus};
use crate::opcodes::lookup;
use crate::registers::Registers;
use crate::status::Status;
use crate::ExecutionError;

/// Maximum number of stall cycles [`CPU::run_for_cycles`] drains per iteration.
pub const STALL_CHUNK: u32 = 8;

/// 2A03 CPU state and execution context.
///
/// The CPU is generic over the host bus via the [`MemoryBus`] trait. Addresses
/// below 0x2000 never reach the bus; they hit the internal 2KB RAM.
///
/// # Examples
///
/// ```
/// use nes_cpu::{CPU, FlatMemory};
///
/// let mut bus = FlatMemory::new();
/// bus.load(0x8000, &[0xA9, 0x42, 0xEA]); // LDA #$42; NOP
///
/// let mut cpu = CPU::new(bus);
/// assert_eq!(cpu.pc(), 0x7FFF); // first fetch reads 0x8000
///
/// assert_eq!(cpu.emulate(), 2);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    pub(crate) memory: Memory<M>,

    pub(crate) interrupts: InterruptLatch,

    /// Set when an illegal opcode halted the engine
    pub(crate) crash: Option<ExecutionError>,

    /// Stall cycles injected by the host and not yet drained
    pub(crate) cycles_to_halt: u32,

    /// Total cycles reported by `emulate` since reset
    pub(crate) cycles: u64,

    /// Whether the last step ended on the RTS/RTI return sentinel
    pub(crate) exited: bool,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU bound to `bus`, already in the power-on state.
    ///
    /// Internal RAM starts zeroed.
    pub fn new(bus: M) -> Self {
        let mut cpu = Self {
            regs: Registers::power_on(),
            memory: Memory::new(bus),
            interrupts: InterruptLatch::new(),
            crash: None,
            cycles_to_halt: 0,
            cycles: 0,
            exited: false,
        };
        cpu.reset();
        cpu
    }

    /// Establishes the power-on state.
    ///
    /// - PC = 0x7FFF, so the first fetch reads 0x8000
    /// - SP = 0xFF (stack top at 0x01FF)
    /// - I, B and bit 5 set; the Zero residue is 1; everything else cleared
    /// - Pending interrupt, stall counter, cycle counter and halt state cleared
    ///
    /// RAM and the bus are left untouched. To start from the reset vector
    /// instead, follow with `request_irq(InterruptKind::Reset)`.
    pub fn reset(&mut self) {
        self.regs = Registers::power_on();
        self.interrupts.clear();
        self.crash = None;
        self.cycles_to_halt = 0;
        self.cycles = 0;
        self.exited = false;
        log::debug!("CPU reset, pc=${:04X}", self.regs.pc);
    }

    /// Services any pending interrupt, then executes exactly one instruction.
    ///
    /// Returns the cycles consumed: the opcode's base count plus any
    /// page-crossing or branch penalty. Servicing an interrupt adds nothing.
    ///
    /// Returns 0 when the fetched opcode is illegal (the engine halts) or
    /// when the engine was already halted.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{CPU, FlatMemory};
    ///
    /// let mut bus = FlatMemory::new();
    /// bus.load(0x8000, &[0x02]); // not a documented opcode
    ///
    /// let mut cpu = CPU::new(bus);
    /// assert_eq!(cpu.emulate(), 0);
    /// assert!(cpu.is_halted());
    /// assert_eq!(
    ///     cpu.crash_message().as_deref(),
    ///     Some("invalid opcode $02 at address $8000")
    /// );
    /// ```
    pub fn emulate(&mut self) -> u32 {
        if self.crash.is_some() {
            log::warn!("emulate() called on a halted CPU; reset() first");
            return 0;
        }
        self.exited = false;

        if let Some(kind) = self.interrupts.take() {
            interrupts::service(kind, &mut self.regs, &mut self.memory);
        }

        let opcode_address = self.regs.pc.wrapping_add(1);
        let opcode = self.memory.load(opcode_address);
        let metadata = lookup(opcode);

        let Some(instruction) = metadata.instruction else {
            let error = ExecutionError::IllegalOpcode {
                opcode,
                address: opcode_address,
            };
            log::error!("CPU halted: {}", error);
            self.crash = Some(error);
            return 0;
        };

        let origin = self.regs.pc;
        self.regs.pc = origin.wrapping_add(metadata.size_bytes as u16);

        let operand = addressing::resolve(
            metadata.addressing_mode,
            origin,
            &self.regs,
            &mut self.memory,
        );

        let base = metadata.base_cycles as u32;
        let flow = instructions::execute(instruction, &mut self.regs, &mut self.memory, &operand);
        let cycles = match flow {
            Flow::Continue(extra) => base + extra as u32,
            Flow::Exit => {
                self.exited = true;
                base
            }
        };

        self.cycles += cycles as u64;
        cycles
    }

    /// Executes one instruction, returning the cycles consumed.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::IllegalOpcode`] if this step fetched an illegal opcode
    /// - [`ExecutionError::Halted`] if the engine was already halted
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        if self.crash.is_some() {
            return Err(ExecutionError::Halted);
        }

        let cycles = self.emulate();
        match &self.crash {
            Some(error) => Err(error.clone()),
            None => Ok(cycles),
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is met, the program returns
    /// through the 0xFFFF sentinel, or an error occurs. Returns the cycles
    /// consumed, which may slightly exceed the budget due to instruction
    /// granularity.
    ///
    /// While stall cycles are pending, each iteration drains up to
    /// [`STALL_CHUNK`] of them instead of executing. Drained stall cycles count
    /// toward the budget but not toward [`CPU::cycles`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{CPU, FlatMemory};
    ///
    /// let mut bus = FlatMemory::new();
    /// bus.load(0x8000, &[0xEA; 16]); // NOP x16
    ///
    /// let mut cpu = CPU::new(bus);
    /// cpu.halt_cycles(4);
    ///
    /// let consumed = cpu.run_for_cycles(10).unwrap();
    /// assert_eq!(consumed, 10); // 4 stalled + 3 NOPs
    /// assert_eq!(cpu.cycles(), 6);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let mut consumed: u64 = 0;

        while consumed < cycle_budget {
            if self.cycles_to_halt > 0 {
                consumed += self.drain_halt_cycles(STALL_CHUNK) as u64;
                continue;
            }

            consumed += self.step()? as u64;
            if self.exited {
                break;
            }
        }

        Ok(consumed)
    }

    // ========== Interrupts and Stalls ==========

    /// Latches an interrupt request, serviced at the start of the next step.
    ///
    /// A Normal request is dropped while any request is pending; any other
    /// kind replaces the pending one.
    pub fn request_irq(&mut self, kind: InterruptKind) {
        self.interrupts.request(kind);
    }

    /// Returns the latched interrupt request, if any.
    pub fn pending_interrupt(&self) -> Option<InterruptKind> {
        self.interrupts.pending()
    }

    /// Adds `cycles` stall cycles (e.g. sprite DMA) for the host to drain.
    pub fn halt_cycles(&mut self, cycles: u32) {
        self.cycles_to_halt = self.cycles_to_halt.saturating_add(cycles);
    }

    /// Stall cycles not yet drained.
    pub fn cycles_to_halt(&self) -> u32 {
        self.cycles_to_halt
    }

    /// Removes up to `max` stall cycles and returns how many were removed.
    pub fn drain_halt_cycles(&mut self, max: u32) -> u32 {
        let drained = self.cycles_to_halt.min(max);
        self.cycles_to_halt -= drained;
        drained
    }

    // ========== Halt State ==========

    /// Returns true once an illegal opcode has halted the engine.
    pub fn is_halted(&self) -> bool {
        self.crash.is_some()
    }

    /// The error that halted the engine.
    pub fn crash(&self) -> Option<&ExecutionError> {
        self.crash.as_ref()
    }

    /// Diagnostic text for the halt, e.g. `invalid opcode $02 at address $8000`.
    pub fn crash_message(&self) -> Option<String> {
        self.crash.as_ref().map(ToString::to_string)
    }

    /// Returns true if the last step ended because RTS or RTI pulled 0xFFFF.
    pub fn exited(&self) -> bool {
        self.exited
    }

    /// Returns the total number of cycles reported since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Memory ==========

    /// Rebinds the CPU to a new bus and returns the previous one.
    ///
    /// Internal RAM and registers are kept.
    pub fn set_mapper(&mut self, bus: M) -> M {
        self.memory.replace_bus(bus)
    }

    /// Returns the memory adapter.
    pub fn memory(&self) -> &Memory<M> {
        &self.memory
    }

    /// Returns the memory adapter mutably.
    ///
    /// Reads and writes through it follow the same RAM/bus routing as the CPU.
    pub fn memory_mut(&mut self) -> &mut Memory<M> {
        &mut self.memory
    }

    pub fn bus(&self) -> &M {
        self.memory.bus()
    }

    pub fn bus_mut(&mut self) -> &mut M {
        self.memory.bus_mut()
    }

    pub fn ram(&self) -> &[u8; crate::memory::RAM_SIZE] {
        self.memory.ram()
    }

    pub fn ram_mut(&mut self) -> &mut [u8; crate::memory::RAM_SIZE] {
        self.memory.ram_mut()
    }

    // ========== Registers ==========

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    ///
    /// This is the address of the next opcode minus one.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets PC. Pass the address of the next opcode minus one.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Returns the status register as a packed NV-BDIZC byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0x34);
    /// ```
    pub fn status(&self) -> u8 {
        self.regs.status.to_byte()
    }

    /// Replaces every flag from a packed NV-BDIZC byte.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = Status::from_byte(value);
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.status.sign
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.status.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.status.brk
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.status.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.status.interrupt
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.status.is_zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.status.carry
    }

    // ========== Status Flag Setters ==========

    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.status.sign = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.status.overflow = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.status.decimal = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.status.interrupt = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.status.set_zero_flag(value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.status.carry = value;
    }
}
