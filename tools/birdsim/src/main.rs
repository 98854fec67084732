mod frame;

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cpulator::button::Keys;
use manji_bird::{
    Config, Game, Phase,
    input::JUMP_KEY,
    sim::{self, MemoryFramebuffer, ScriptedButtons, ScriptedUart, SimTimer},
};
use tracing::{Level, info, warn};
use tracing_subscriber::util::SubscriberInitExt;

type SimGame = Game<MemoryFramebuffer, SimTimer, ScriptedButtons, ScriptedUart>;

#[derive(Parser, Debug)]
#[command(name = "birdsim")]
#[command(version, about = "Play manji-bird headless against simulated devices", long_about = None)]
struct Cli {
    /// Timer expiries to simulate after the game starts
    #[arg(long, default_value_t = 200)]
    ticks: u32,

    /// Value the timer snapshot reads when the game seeds its PRNG
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Send a byte over the UART every N ticks
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    jump_every: Option<u32>,

    /// Hold the jump button during these ticks (comma separated)
    #[arg(long, value_delimiter = ',')]
    press: Vec<u32>,

    /// Timer period in 50 MHz clock ticks
    #[arg(long, default_value_t = Config::DEFAULT.timer_period)]
    period: u32,

    /// Write the final frame as a binary PPM
    #[arg(long)]
    ppm: Option<PathBuf>,

    /// Print the final frame as ASCII art
    #[arg(long)]
    ascii: bool,

    /// More logging; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

/// Boot, start with a UART byte, then run `cli.ticks` timer expiries.
fn simulate(cli: &Cli) -> SimGame {
    let mut board = sim::board(cli.seed);
    // the button is read once per playing tick, starting with tick 1
    board.buttons = ScriptedButtons::new(
        (1..=cli.ticks).map(|tick| if cli.press.contains(&tick) { JUMP_KEY } else { Keys::empty() }),
    );

    let config = Config {
        timer_period: cli.period,
        ..Config::DEFAULT
    };
    let mut game = Game::new(board, config);
    game.boot();

    game.board_mut().uart.push_input(b"\n");
    game.poll();

    for tick in 1..=cli.ticks {
        if cli.jump_every.is_some_and(|n| tick % n == 0) {
            game.board_mut().uart.push_input(b" ");
        }
        game.board_mut().timer.expire();
        game.poll();
    }
    game
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Some(late) = cli.press.iter().find(|&&t| t == 0 || t > cli.ticks) {
        warn!(tick = late, "press outside 1..={} is never seen", cli.ticks);
    }

    let game = simulate(&cli);
    let board = game.board();

    if !board.pixels.stray_writes().is_empty() {
        warn!(count = board.pixels.stray_writes().len(), "stores outside the visible area");
    }

    print!("{}", board.uart.output());
    let phase = match game.phase() {
        Phase::WaitForStart => "waiting",
        Phase::Playing => "alive",
        Phase::Dead => "dead",
    };
    println!("{phase} after {} ticks, score {}", game.ticks(), game.world().score);

    if cli.ascii {
        print!("{}", frame::ascii(&board.pixels));
    }

    if let Some(path) = &cli.ppm {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        frame::write_ppm(&mut BufWriter::new(file), &board.pixels)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote final frame");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("birdsim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.ticks, 200);
        assert_eq!(cli.seed, 1);
        assert_eq!(cli.period, 2_500_000);
        assert!(cli.press.is_empty());
        assert_eq!(cli.jump_every, None);
    }

    #[test]
    fn press_list_is_comma_separated() {
        assert_eq!(cli(&["--press", "3,5,8"]).press, [3, 5, 8]);
    }

    #[test]
    fn zero_jump_interval_is_rejected() {
        assert!(Cli::try_parse_from(["birdsim", "--jump-every", "0"]).is_err());
    }

    #[test]
    fn pressed_tick_jumps() {
        // started at 40 - 10, then +1, +1 - 10, +1
        let game = simulate(&cli(&["--ticks", "3", "--press", "2"]));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.world().player_y, 23);
        assert_eq!(game.board().timer.period(), 2_500_000);
    }

    #[test]
    fn falling_bird_dies() {
        let game = simulate(&cli(&["--ticks", "200"]));
        assert_eq!(game.phase(), Phase::Dead);
        assert_eq!(game.ticks(), 200);
        assert!(game.board().uart.output().ends_with("You died!\nReload to play again\n"));
        assert!(game.board().pixels.stray_writes().is_empty());
    }

    #[test]
    fn ppm_lands_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let game = simulate(&cli(&["--ticks", "5"]));
        frame::write_ppm(&mut File::create(&path).unwrap(), &game.board().pixels).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 13 + 80 * 60 * 3);
    }
}
