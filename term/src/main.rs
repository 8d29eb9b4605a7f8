use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tictactoe_core::{Coord2, Difficulty, GameConfig, GameSession, Player, Snapshot};

use crate::input::{Action, InputError, InputEvent};
use crate::layout::BoardLayout;

mod input;
mod layout;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mark {
    X,
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}

/// Tic-tac-toe against the computer, played from the terminal.
///
/// Reads one input per line: `space`, `c`, `p`, `h`, `e`, `n`, `q`, `esc`,
/// `click X Y`, `cell COL ROW` or `resize W H`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Start on the easy (random) level
    #[arg(long)]
    easy: bool,

    /// Let the human move first
    #[arg(long)]
    human_first: bool,

    /// Mark played by the computer
    #[arg(long, value_enum, default_value_t = Mark::O)]
    computer_plays: Mark,

    /// Width of the virtual display used by `click`
    #[arg(long, default_value_t = 720)]
    width: u32,

    /// Height of the virtual display used by `click`
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Print a JSON snapshot after every input instead of the text board
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let computer = Player::from(self.computer_plays);
        let first_mover = if self.human_first {
            computer.opponent()
        } else {
            computer
        };
        let difficulty = if self.easy {
            Difficulty::Easy
        } else {
            Difficulty::Hard
        };
        GameConfig::new(first_mover, computer, difficulty)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let seed = args.seed.unwrap_or_else(time_seed);
    log::debug!("Random seed {}", seed);

    let mut session = GameSession::with_seed(args.game_config(), seed);
    let mut layout = BoardLayout::new(args.width, args.height);
    let mut out = io::stdout().lock();
    draw(&mut out, &session, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        let event = match input::parse_line(&line) {
            Ok(event) => event,
            Err(InputError::Empty) => continue,
            Err(err) => {
                log::warn!("{}", err);
                continue;
            }
        };

        match event {
            InputEvent::Key(key) => match input::key_binding(key) {
                Some(Action::Exit) => break,
                Some(Action::Command(command)) => {
                    session.command(command);
                }
                None => log::debug!("Unbound key {:?}", key),
            },
            InputEvent::Click { x, y } => match layout.hit_test(x, y) {
                Some(coords) => pointer_down(&mut session, coords),
                None => log::debug!("Click at ({}, {}) hit no cell", x, y),
            },
            InputEvent::Cell { col, row } => pointer_down(&mut session, (col, row)),
            InputEvent::Resize { width, height } => {
                if layout.resize(width, height) {
                    let (width, height) = layout.size();
                    log::info!("Display resized to {}x{}", width, height);
                }
            }
        }

        session.advance();
        draw(&mut out, &session, args.json)?;
    }

    Ok(())
}

fn pointer_down(session: &mut GameSession, coords: Coord2) {
    if let Err(err) = session.pointer_down(coords) {
        log::warn!("Ignoring move at {:?}: {}", coords, err);
    }
}

fn draw(out: &mut impl Write, session: &GameSession, json: bool) -> anyhow::Result<()> {
    let snapshot = Snapshot::from_session(session);
    if json {
        serde_json::to_writer(&mut *out, &snapshot).context("failed to encode snapshot")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::frame(&snapshot))?;
    }
    out.flush()?;
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_build_config() {
        let args = Args::parse_from([
            "tictactoe",
            "--easy",
            "--human-first",
            "--computer-plays",
            "x",
        ]);

        let config = args.game_config();

        assert_eq!(config.computer, Player::X);
        assert_eq!(config.first_mover, Player::O);
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn default_flags_match_default_config() {
        let args = Args::parse_from(["tictactoe"]);

        assert_eq!(args.game_config(), GameConfig::default());
        assert_eq!((args.width, args.height), (720, 720));
    }
}
