//! # CPUlator peripherals
//!
//! Typed access to the memory-mapped devices of the CPUlator Nios II
//! (DE1-SoC) system that a small game needs:
//!
//! | Device                         | Base         | Module             |
//! |--------------------------------|--------------|--------------------|
//! | VGA pixel buffer (80×60, 8bpp) | `0x08000000` | [`pixel_buffer`]   |
//! | Interval timer                 | `0x10002000` | [`timer`]          |
//! | Push-buttons                   | `0x10000050` | [`button`]         |
//! | JTAG UART                      | `0x10001000` | [`jtag_uart`]      |
//!
//! Every register access is volatile and happens exactly once, in program
//! order. Each device also implements a small trait ([`Framebuffer`],
//! [`Timer`], [`ButtonPort`], [`Uart`]) so code written against the board
//! can run on a host against simulated devices.
//!
//! ```ignore
//! let mut board = unsafe { Board::take() };
//! board.timer.set_period(2_500_000);
//! board.timer.set_control(timer::Control::CONT | timer::Control::START);
//!
//! loop {
//!     if board.timer.poll_timeout() {
//!         board.pixels.write(pixel_buffer::offset(10, 10), 0xFF);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod jtag_uart;
pub mod pixel_buffer;
pub mod timer;

pub use button::{ButtonPort, PushButtons};
pub use jtag_uart::{JtagUart, Uart};
pub use pixel_buffer::{Framebuffer, PixelBuffer};
pub use timer::{IntervalTimer, Timer};

/// The four devices the game talks to.
///
/// The type parameters default to the memory-mapped implementations; hosts
/// substitute their own devices.
pub struct Board<F = PixelBuffer, T = IntervalTimer, B = PushButtons, U = JtagUart> {
    pub pixels: F,
    pub timer: T,
    pub buttons: B,
    pub uart: U,
}

impl Board {
    /// Bind every device at its fixed physical address.
    ///
    /// # Safety
    ///
    /// Only sound on the CPUlator DE1-SoC memory map, and only one `Board`
    /// should exist at a time.
    pub unsafe fn take() -> Board {
        unsafe {
            Board {
                pixels: PixelBuffer::new(),
                timer: IntervalTimer::new(),
                buttons: PushButtons::new(),
                uart: JtagUart::new(),
            }
        }
    }
}

impl<F, T, B, U> Board<F, T, B, U> {
    pub const fn from_parts(pixels: F, timer: T, buttons: B, uart: U) -> Self {
        Self {
            pixels,
            timer,
            buttons,
            uart,
        }
    }
}
