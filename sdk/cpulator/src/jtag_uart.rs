//! # JTAG UART
//!
//! A byte stream to the host console at `0x10001000`.
//!
//! ## Data register (`+0x0`)
//!
//! | Bits    | Field    | Meaning                                   |
//! |---------|----------|-------------------------------------------|
//! | `0..8`  | DATA     | received byte (read) / byte to send (write)|
//! | `15`    | RVALID   | DATA holds a byte; reading pops it        |
//! | `16..32`| RAVAIL   | bytes still queued after this one         |
//!
//! ## Control register (`+0x4`)
//!
//! The low bits are [`ControlFlags`]; bits `16..32` (WSPACE) count the free
//! slots in the write FIFO. A write to DATA while WSPACE is 0 is dropped.

use bit_field::BitField;
use volatile_register::RW;

/// Physical base of the JTAG UART.
pub const BASE: usize = 0x1000_1000;

const RVALID: usize = 15;

bitflags::bitflags! {
    /// Low half of the control register.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ControlFlags: u32 {
        /// Read interrupt enable.
        const RE = 1 << 0;
        /// Write interrupt enable.
        const WE = 1 << 1;
        /// Read interrupt pending.
        const RI = 1 << 8;
        /// Write interrupt pending.
        const WI = 1 << 9;
        /// A host has polled the UART since AC was last cleared.
        const AC = 1 << 10;
    }
}

#[repr(C)]
pub struct UartRegisters {
    pub data: RW<u32>,
    pub control: RW<u32>,
}

/// One read of the data register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct DataWord(pub u32);

impl DataWord {
    /// True if this read popped a byte off the receive FIFO.
    #[inline]
    pub fn rvalid(self) -> bool {
        self.0.get_bit(RVALID)
    }

    #[inline]
    pub fn byte(self) -> u8 {
        self.0.get_bits(0..8) as u8
    }

    /// Bytes left in the receive FIFO.
    #[inline]
    pub fn ravail(self) -> u16 {
        self.0.get_bits(16..32) as u16
    }

    /// The received byte, if there was one.
    #[inline]
    pub fn received(self) -> Option<u8> {
        self.rvalid().then(|| self.byte())
    }
}

/// One read of the control register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct ControlWord(pub u32);

impl ControlWord {
    #[inline]
    pub fn flags(self) -> ControlFlags {
        ControlFlags::from_bits_truncate(self.0)
    }

    /// Free slots in the write FIFO.
    #[inline]
    pub fn wspace(self) -> u16 {
        self.0.get_bits(16..32) as u16
    }
}

pub trait Uart {
    /// Read the data register. Popping a byte is a side effect of the read.
    fn read_data(&mut self) -> DataWord;
    fn read_control(&mut self) -> ControlWord;
    /// Push one byte into the write FIFO without checking for space.
    fn write_data(&mut self, byte: u8);

    /// Block until the write FIFO has room, then send `byte`.
    fn put_byte(&mut self, byte: u8) {
        while self.read_control().wspace() == 0 {}
        self.write_data(byte);
    }
}

/// The memory-mapped JTAG UART.
pub struct JtagUart {
    regs: *mut UartRegisters,
}

impl JtagUart {
    /// # Safety
    ///
    /// The JTAG UART must be mapped at [`BASE`].
    pub const unsafe fn new() -> Self {
        unsafe { Self::from_ptr(BASE as *mut UartRegisters) }
    }

    /// # Safety
    ///
    /// `regs` must point to a valid register block for as long as the
    /// returned value is used.
    pub const unsafe fn from_ptr(regs: *mut UartRegisters) -> Self {
        Self { regs }
    }

    #[inline(always)]
    fn regs(&self) -> &UartRegisters {
        unsafe { &*self.regs }
    }
}

impl Uart for JtagUart {
    #[inline(always)]
    fn read_data(&mut self) -> DataWord {
        DataWord(self.regs().data.read())
    }

    #[inline(always)]
    fn read_control(&mut self) -> ControlWord {
        ControlWord(self.regs().control.read())
    }

    #[inline(always)]
    fn write_data(&mut self, byte: u8) {
        unsafe { self.regs().data.write(byte as u32) }
    }
}
