//! # Interval Timer
//!
//! A 32-bit down-counter at `0x10002000`, clocked at 50 MHz. When it reaches
//! zero it sets `TO` in the status register and, in continuous mode, reloads
//! from the period registers. Nothing clears `TO` but software, so a busy
//! loop can poll it as a frame tick:
//!
//! ```ignore
//! timer.set_period(2_500_000); // 50 ms
//! timer.set_control(Control::CONT | Control::START);
//! loop {
//!     if timer.poll_timeout() {
//!         // one tick
//!     }
//! }
//! ```
//!
//! ## Registers
//!
//! Every register is a 32-bit word of which only the low 16 bits are wired.
//!
//! | Offset | Register       |
//! |--------|----------------|
//! | `+0x0` | status         |
//! | `+0x4` | control        |
//! | `+0x8` | period low     |
//! | `+0xC` | period high    |
//! | `+0x10`| snapshot low   |
//! | `+0x14`| snapshot high  |

use volatile_register::RW;

/// Physical base of the interval timer.
pub const BASE: usize = 0x1000_2000;

bitflags::bitflags! {
    /// Status register at `+0x0`. Writing any value clears `TO`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Status: u32 {
        /// The counter reached zero since `TO` was last cleared.
        const TO  = 0b0001;
        /// The counter is running.
        const RUN = 0b0010;
    }

    /// Control register at `+0x4`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Control: u32 {
        /// Raise an interrupt on timeout.
        const ITO   = 0b0001;
        /// Reload from the period registers and keep counting.
        const CONT  = 0b0010;
        /// Start counting.
        const START = 0b0100;
        /// Stop counting.
        const STOP  = 0b1000;
    }
}

#[repr(C)]
pub struct TimerRegisters {
    pub status: RW<u32>,
    pub control: RW<u32>,
    pub period_low: RW<u32>,
    pub period_high: RW<u32>,
    pub snapshot_low: RW<u32>,
    pub snapshot_high: RW<u32>,
}

/// Operations the game loop needs from a tick source.
pub trait Timer {
    /// Load the reload value, in base-clock ticks.
    fn set_period(&mut self, ticks: u32);
    fn set_control(&mut self, control: Control);
    fn status(&mut self) -> Status;
    /// Acknowledge a timeout by clearing `TO`.
    fn clear_timeout(&mut self);
    /// Latch and return the current counter value.
    fn snapshot(&mut self) -> u32;

    /// Returns true and acknowledges the timeout if the timer has expired.
    #[inline]
    fn poll_timeout(&mut self) -> bool {
        if self.status().contains(Status::TO) {
            self.clear_timeout();
            true
        } else {
            false
        }
    }
}

/// The memory-mapped interval timer.
pub struct IntervalTimer {
    regs: *mut TimerRegisters,
}

impl IntervalTimer {
    /// # Safety
    ///
    /// The interval timer must be mapped at [`BASE`].
    pub const unsafe fn new() -> Self {
        unsafe { Self::from_ptr(BASE as *mut TimerRegisters) }
    }

    /// # Safety
    ///
    /// `regs` must point to a valid register block for as long as the
    /// returned value is used.
    pub const unsafe fn from_ptr(regs: *mut TimerRegisters) -> Self {
        Self { regs }
    }

    #[inline(always)]
    fn regs(&self) -> &TimerRegisters {
        unsafe { &*self.regs }
    }
}

impl Timer for IntervalTimer {
    fn set_period(&mut self, ticks: u32) {
        let regs = self.regs();
        unsafe {
            regs.period_high.write(ticks >> 16);
            regs.period_low.write(ticks & 0xFFFF);
        }
        log::debug!("interval timer period set to {ticks} ticks");
    }

    #[inline]
    fn set_control(&mut self, control: Control) {
        unsafe { self.regs().control.write(control.bits()) }
    }

    #[inline(always)]
    fn status(&mut self) -> Status {
        Status::from_bits_truncate(self.regs().status.read())
    }

    #[inline(always)]
    fn clear_timeout(&mut self) {
        unsafe { self.regs().status.write(0) }
    }

    fn snapshot(&mut self) -> u32 {
        let regs = self.regs();
        // any write latches the counter into both snapshot halves
        unsafe { regs.snapshot_low.write(0) };
        let high = regs.snapshot_high.read() & 0xFFFF;
        let low = regs.snapshot_low.read() & 0xFFFF;
        (high << 16) | low
    }
}
