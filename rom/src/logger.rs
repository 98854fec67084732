//! `log` records over the JTAG UART, one line each.

use core::fmt::Write;

use cpulator::JtagUart;
use log::{LevelFilter, Metadata, Record};
use manji_bird::text::Console;

struct UartLogger;

static LOGGER: UartLogger = UartLogger;

impl log::Log for UartLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Same device the game writes to; records interleave with its text.
        let mut uart = unsafe { JtagUart::new() };
        let mut console = Console::new(&mut uart);
        // Console never reports a write error
        let _ = writeln!(console, "[{:<5}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

pub fn init() {
    // Single-threaded, no interrupts: nothing can race the installation.
    unsafe {
        // only fails if a logger is already installed, and main calls this once
        let _ = log::set_logger_racy(&LOGGER);
        log::set_max_level_racy(LevelFilter::Debug);
    }
}
