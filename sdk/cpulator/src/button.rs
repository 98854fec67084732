//! Push-buttons `KEY0`-`KEY3` at `0x10000050`.
//!
//! The data register reads 1 for every key currently held down. The mask
//! and edge-capture registers are mapped but unused: keys are polled.

use volatile_register::{RO, RW};

/// Physical base of the push-button port.
pub const BASE: usize = 0x1000_0050;

bitflags::bitflags! {
    /// Keys held down, as read from the data register.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Keys: u32 {
        const KEY0 = 0b0001;
        const KEY1 = 0b0010;
        const KEY2 = 0b0100;
        const KEY3 = 0b1000;
    }
}

#[repr(C)]
pub struct ButtonRegisters {
    pub data: RO<u32>,
    _reserved: u32,
    pub interrupt_mask: RW<u32>,
    pub edge_capture: RW<u32>,
}

pub trait ButtonPort {
    /// Sample which keys are held right now.
    fn read(&mut self) -> Keys;
}

/// The memory-mapped push-button port.
pub struct PushButtons {
    regs: *const ButtonRegisters,
}

impl PushButtons {
    /// # Safety
    ///
    /// The push-button port must be mapped at [`BASE`].
    pub const unsafe fn new() -> Self {
        unsafe { Self::from_ptr(BASE as *const ButtonRegisters) }
    }

    /// # Safety
    ///
    /// `regs` must point to a valid register block for as long as the
    /// returned value is used.
    pub const unsafe fn from_ptr(regs: *const ButtonRegisters) -> Self {
        Self { regs }
    }
}

impl ButtonPort for PushButtons {
    #[inline(always)]
    fn read(&mut self) -> Keys {
        let data = unsafe { (*self.regs).data.read() };
        Keys::from_bits_truncate(data)
    }
}
