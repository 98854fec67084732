#![no_std]
#![no_main]

mod boot;
#[cfg(feature = "uart-log")]
mod logger;

use cpulator::Board;
use manji_bird::{Config, Game};

/// Entered from the toolchain's crt0 once the stack and `.bss` are set up.
#[unsafe(no_mangle)]
pub extern "C" fn main() -> ! {
    #[cfg(feature = "uart-log")]
    logger::init();

    let board = unsafe { Board::take() };
    Game::new(board, Config::default()).run()
}
