//! Jump inputs: push-button `KEY1` and any byte on the JTAG UART.
//!
//! The button is edge-triggered, so holding it jumps once. The UART is
//! level-triggered, but reading the data register pops the byte, so each
//! byte the host sends jumps once.

use cpulator::{
    button::{ButtonPort, Keys},
    jtag_uart::Uart,
};

/// The key that makes the bird jump.
pub const JUMP_KEY: Keys = Keys::KEY1;

/// Which sources asked for a jump during one sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Jumps {
    pub button: bool,
    pub uart: bool,
}

impl Jumps {
    pub fn count(self) -> u32 {
        self.button as u32 + self.uart as u32
    }

    pub fn any(self) -> bool {
        self.button || self.uart
    }
}

/// True if the host has sent a byte. The byte is consumed and discarded.
pub fn uart_has_byte(uart: &mut impl Uart) -> bool {
    uart.read_data().rvalid()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSampler {
    button_held: bool,
}

impl InputSampler {
    pub const fn new() -> Self {
        Self { button_held: false }
    }

    pub fn button_held(&self) -> bool {
        self.button_held
    }

    /// Rising edge of [`JUMP_KEY`] since the previous call.
    pub fn sample_button(&mut self, buttons: &mut impl ButtonPort) -> bool {
        let down = buttons.read().contains(JUMP_KEY);
        let pressed = down && !self.button_held;
        self.button_held = down;
        pressed
    }

    /// Sample the button, then the UART. Each is read exactly once.
    pub fn sample(&mut self, buttons: &mut impl ButtonPort, uart: &mut impl Uart) -> Jumps {
        let button = self.sample_button(buttons);
        let uart = uart_has_byte(uart);
        Jumps { button, uart }
    }
}
