//! # MANJI BIRD
//!
//! A flappy-bird game for the CPUlator Nios II board: an 80×60 VGA pixel
//! buffer, an interval timer for the frame tick, `KEY1` or any key typed in
//! the JTAG UART console to jump.
//!
//! The game is generic over the devices in a [`cpulator::Board`], so the
//! same code runs on the board and against the simulated devices in [`sim`].
//!
//! ```ignore
//! let board = unsafe { cpulator::Board::take() };
//! Game::new(board, Config::default()).run()
//! ```
//!
//! ## Modules
//!
//! - [`game`] - phases and the timer-driven loop
//! - [`world`] - bird, pipes, score and the per-tick rules
//! - [`raster`] - drawing into the pixel buffer
//! - [`input`] - button edge detection and UART polling
//! - [`rng`] - xorshift PRNG for pipe heights
//! - [`text`] - blocking UART text output
//! - [`assets`] - bird sprite and font

#![cfg_attr(not(any(test, feature = "sim")), no_std)]

pub mod assets;
pub mod game;
pub mod input;
pub mod raster;
pub mod rng;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod text;
pub mod world;

pub use game::{Config, Game, Phase};
pub use world::World;
