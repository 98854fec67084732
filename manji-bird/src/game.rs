//! # Game Loop
//!
//! The game is a busy poll over the interval timer; there are no interrupts.
//! It moves through three phases and never goes back:
//!
//! ```text
//!  WaitForStart ──(UART byte)──▶ Playing ──(collision)──▶ Dead
//! ```
//!
//! | Phase        | Each poll                                                  |
//! |--------------|------------------------------------------------------------|
//! | WaitForStart | read the UART; a byte starts the game                      |
//! | Playing      | on timer expiry: scroll, input, gravity, collide, render   |
//! | Dead         | on timer expiry: drop the bird two rows, render            |
//!
//! Every tick finishes rendering before the timer is polled again.

use cpulator::{
    Board,
    button::ButtonPort,
    jtag_uart::Uart,
    pixel_buffer::Framebuffer,
    timer::{Control, Timer},
};
use log::{debug, info, trace};

use crate::{
    input::{self, InputSampler},
    raster::Screen,
    rng::{PRE_SEED, XorShift32},
    text::{self, Console},
    world::World,
};

/// Tunables fixed at build time on the target and set from the command line
/// on a host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Timer reload value in 50 MHz clock ticks. 2,500,000 is 50 ms.
    pub timer_period: u32,
    /// PRNG state before the game seeds from the timer.
    pub pre_seed: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        timer_period: 2_500_000,
        pre_seed: PRE_SEED,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    WaitForStart,
    Playing,
    Dead,
}

pub struct Game<F, T, B, U> {
    board: Board<F, T, B, U>,
    config: Config,
    world: World,
    rng: XorShift32,
    input: InputSampler,
    phase: Phase,
    ticks: u32,
}

impl<F, T, B, U> Game<F, T, B, U>
where
    F: Framebuffer,
    T: Timer,
    B: ButtonPort,
    U: Uart,
{
    pub fn new(board: Board<F, T, B, U>, config: Config) -> Self {
        Self {
            board,
            rng: XorShift32::new(config.pre_seed),
            config,
            world: World::new(),
            input: InputSampler::new(),
            phase: Phase::WaitForStart,
            ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Timer expiries handled since the game started.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board<F, T, B, U> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<F, T, B, U> {
        &mut self.board
    }

    pub fn into_board(self) -> Board<F, T, B, U> {
        self.board
    }

    /// Start the timer, greet the player and draw the first frame.
    pub fn boot(&mut self) {
        self.board.timer.set_period(self.config.timer_period);
        self.board.timer.set_control(Control::CONT | Control::START);

        Console::new(&mut self.board.uart).puts(text::WELCOME);
        self.draw();
        info!("waiting for the first key");
    }

    /// Boot, then poll forever.
    pub fn run(mut self) -> ! {
        self.boot();
        loop {
            self.poll();
        }
    }

    /// One pass of the busy loop.
    pub fn poll(&mut self) -> Phase {
        match self.phase {
            Phase::WaitForStart => {
                if input::uart_has_byte(&mut self.board.uart) {
                    self.start();
                }
            }
            Phase::Playing => {
                if self.board.timer.poll_timeout() {
                    self.play_tick();
                }
            }
            Phase::Dead => {
                if self.board.timer.poll_timeout() {
                    self.ticks = self.ticks.wrapping_add(1);
                    self.world.sink();
                    self.draw();
                }
            }
        }
        self.phase
    }

    fn start(&mut self) {
        // the key that started the game also jumps
        self.world.jump();

        let seed = self.board.timer.snapshot();
        self.rng.seed(seed);
        self.world.pipes.randomize(&mut self.rng);
        debug!("seeded with {seed:#010x}, pipe heights {:?}", self.world.pipes.heights);

        self.phase = Phase::Playing;
        info!("game started");
    }

    fn play_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);

        let scroll = self.world.scroll(&mut self.rng);
        if scroll.scored {
            debug!("score {}", self.world.score);
        }
        if scroll.recycled {
            debug!("pipes recycled, heights now {:?}", self.world.pipes.heights);
        }

        let jumps = self.input.sample(&mut self.board.buttons, &mut self.board.uart);
        self.world.fly(jumps.count());
        trace!(
            "tick {}: pipes at {}, bird at {}, jumps {:?}",
            self.ticks, self.world.pipes.x, self.world.player_y, jumps
        );

        if self.world.collides() {
            self.die();
            return;
        }
        self.draw();
    }

    fn die(&mut self) {
        self.phase = Phase::Dead;
        info!("died after {} ticks with score {}", self.ticks, self.world.score);
        Console::new(&mut self.board.uart).puts(text::DIED);
    }

    fn draw(&mut self) {
        Screen::new(&mut self.board.pixels).draw_world(&self.world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        raster::{HUD_BACKGROUND, PIPE, SKY},
        sim::{self, MemoryFramebuffer, ScriptedButtons, ScriptedUart, SimTimer},
        world::Pipes,
    };
    use cpulator::button::Keys;
    use pretty_assertions::assert_eq;

    type TestGame = Game<MemoryFramebuffer, SimTimer, ScriptedButtons, ScriptedUart>;

    fn test_game(snapshot: u32) -> TestGame {
        Game::new(sim::board(snapshot), Config::default())
    }

    fn started(seed: u32) -> TestGame {
        let mut game = test_game(seed);
        game.boot();
        game.board_mut().uart.push_input(b"x");
        assert_eq!(game.poll(), Phase::Playing);
        game
    }

    fn tick(game: &mut TestGame) -> Phase {
        game.board_mut().timer.expire();
        game.poll()
    }

    #[test]
    fn boot_configures_the_timer_and_greets() {
        let mut game = test_game(1);
        game.boot();

        let board = game.board();
        assert_eq!(board.timer.period(), 2_500_000);
        assert_eq!(board.timer.control(), Control::CONT | Control::START);
        assert_eq!(
            board.uart.output(),
            "Welcome to MANJI BIRD\nSelect this box and press any key to jump\nPress any key to begin...\n"
        );
        assert_eq!(game.phase(), Phase::WaitForStart);
    }

    #[test]
    fn cold_boot_frame() {
        let mut game = test_game(1);
        game.boot();

        let expected = {
            let mut fb = MemoryFramebuffer::new();
            Screen::new(&mut fb).draw_world(&World::new());
            fb
        };
        let fb = &game.board().pixels;
        assert!(fb.same_pixels(&expected));

        // pipes at 81, 121, 161 are off screen; only sky, bird and HUD show
        assert_eq!(fb.count(PIPE), 0);
        assert_eq!(fb.pixel(0, 7), SKY);
        assert_eq!(fb.pixel(8, 40), SKY);
        assert_eq!(fb.pixel(9, 40), 0xFC);
        assert_eq!(fb.pixel(40, 3), HUD_BACKGROUND);
        assert!(fb.stray_writes().is_empty());
    }

    #[test]
    fn waits_for_a_key_and_ignores_the_timer() {
        let mut game = test_game(1);
        game.boot();
        for _ in 0..10 {
            assert_eq!(tick(&mut game), Phase::WaitForStart);
        }
        assert_eq!(game.world(), &World::new());
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn first_key_jumps_and_seeds_the_pipes() {
        let game = started(1);

        assert_eq!(game.world().player_y, 30);
        assert_eq!(game.world().pipes, Pipes { x: 81, heights: [9, 9, 13] });
        assert_eq!(game.board().timer.snapshots(), 1);
    }

    #[test]
    fn zero_snapshot_keeps_the_pre_seed() {
        let game = started(0);
        // first three values from 0xBEEFBABE
        assert_eq!(game.world().pipes.heights, [10, 33, 16]);
    }

    #[test]
    fn gravity_per_tick() {
        let mut game = started(1);
        tick(&mut game);
        assert_eq!(game.world().player_y, 31);
        assert_eq!(game.world().pipes.x, 79);
        tick(&mut game);
        assert_eq!(game.world().player_y, 32);
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn no_tick_without_timer_expiry() {
        let mut game = started(1);
        for _ in 0..5 {
            game.poll();
        }
        assert_eq!(game.world().player_y, 30);
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn held_button_jumps_once() {
        let mut game = started(1);
        game.board_mut().buttons.hold(Keys::KEY1);

        tick(&mut game);
        assert_eq!(game.world().player_y, 21);
        tick(&mut game);
        assert_eq!(game.world().player_y, 22);
    }

    #[test]
    fn uart_byte_jumps() {
        let mut game = started(1);
        game.board_mut().uart.push_input(b"j");
        tick(&mut game);
        assert_eq!(game.world().player_y, 21);
        assert_eq!(game.board().uart.pending_input(), 0);
        tick(&mut game);
        assert_eq!(game.world().player_y, 22);
    }

    #[test]
    fn button_and_uart_in_one_tick() {
        let mut game = started(1);
        game.board_mut().buttons.hold(Keys::KEY1);
        game.board_mut().uart.push_input(b"j");
        tick(&mut game);
        assert_eq!(game.world().player_y, 11);
    }

    #[test]
    fn falls_into_the_first_pipe_and_dies() {
        let mut game = started(1);

        let mut phase = Phase::Playing;
        while phase == Phase::Playing {
            phase = tick(&mut game);
            assert!(game.ticks() < 100, "never died");
        }

        let world = game.world();
        assert_eq!(phase, Phase::Dead);
        assert!(world.collides());
        assert!(game.board().uart.output().ends_with("Press any key to begin...\nYou died!\nReload to play again\n"));
    }

    #[test]
    fn dead_bird_sinks_and_message_prints_once() {
        let mut game = started(1);
        while tick(&mut game) == Phase::Playing {}

        let y = game.world().player_y;
        let pipes = game.world().pipes.clone();
        let output_len = game.board().uart.output().len();
        for n in 1..=40 {
            assert_eq!(tick(&mut game), Phase::Dead);
            assert_eq!(game.world().player_y, y + 2 * n);
        }
        assert_eq!(game.world().pipes, pipes);
        assert_eq!(game.board().uart.output().len(), output_len);
        assert!(game.board().pixels.stray_writes().is_empty());
    }

    #[test]
    fn every_store_stays_on_screen() {
        let mut game = started(7);
        for n in 0..2_000 {
            if n % 9 == 0 {
                game.board_mut().uart.push_input(b"j");
            }
            if n % 13 == 0 {
                game.board_mut().buttons.hold(Keys::KEY1);
            } else {
                game.board_mut().buttons.hold(Keys::empty());
            }
            let before = game.world().score;
            tick(&mut game);
            assert!(game.world().score >= before);
            if game.phase() == Phase::Playing {
                assert!((-10..=80).contains(&game.world().pipes.x));
            }
        }
        assert!(game.board().pixels.stray_writes().is_empty());
    }

    #[test]
    fn scores_by_flapping_through_the_gap() {
        let mut game = started(1);
        // keep the bird inside the gap of whichever pipe is next
        while game.world().score < 3 {
            let world = game.world();
            let gap_middle = world.pipes.heights[0] + 8;
            if world.player_y > gap_middle {
                game.board_mut().uart.push_input(b"j");
            }
            assert_eq!(tick(&mut game), Phase::Playing, "crashed at tick {}", game.ticks());
            assert!(game.ticks() < 1_000);
        }
        assert_eq!(game.world().score, 3);
    }

    #[test]
    fn new_game_has_no_side_effects() {
        let game = Game::new(
            Board::from_parts(MemoryFramebuffer::new(), SimTimer::new(5), ScriptedButtons::default(), ScriptedUart::new()),
            Config::default(),
        );
        assert_eq!(game.phase(), Phase::WaitForStart);
        assert_eq!(game.config(), &Config::DEFAULT);

        let board = game.into_board();
        assert_eq!(board.uart.output_bytes(), b"");
        assert_eq!(board.pixels.total_writes(), 0);
        assert_eq!(board.timer.snapshots(), 0);
    }
}
