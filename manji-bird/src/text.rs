//! Blocking text output over the UART.

use core::fmt;

use cpulator::jtag_uart::Uart;

pub const WELCOME: &str = "Welcome to MANJI BIRD\nSelect this box and press any key to jump\nPress any key to begin...";
pub const DIED: &str = "You died!\nReload to play again";

/// Byte-at-a-time writer. Each byte waits for room in the write FIFO.
pub struct Console<'a, U: Uart> {
    uart: &'a mut U,
}

impl<'a, U: Uart> Console<'a, U> {
    pub fn new(uart: &'a mut U) -> Self {
        Self { uart }
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.uart.put_byte(b);
        }
    }

    /// Write `s` and a trailing newline.
    pub fn puts(&mut self, s: &str) {
        self.put_bytes(s.as_bytes());
        self.uart.put_byte(b'\n');
    }
}

impl<U: Uart> fmt::Write for Console<'_, U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_bytes(s.as_bytes());
        Ok(())
    }
}
