use std::str::FromStr;

use thiserror::Error;
use tictactoe_core::{Command, Coord, Difficulty};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Char(char),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Click { x: i32, y: i32 },
    Cell { col: Coord, row: Coord },
    Resize { width: u32, height: u32 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown input {0:?}")]
    Unknown(String),
    #[error("Missing {0} for {1:?}")]
    MissingArgument(&'static str, &'static str),
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

/// Parses one line of player input.
///
/// Accepts a key (`space`, `esc` or a single letter), `click X Y`, `cell COL ROW` and `resize W H`.
pub fn parse_line(line: &str) -> Result<InputEvent, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == " " {
        return Ok(InputEvent::Key(Key::Space));
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(InputError::Empty);
    };

    let event = match head.to_ascii_lowercase().as_str() {
        "space" => InputEvent::Key(Key::Space),
        "esc" | "escape" | "exit" => InputEvent::Key(Key::Escape),
        "click" => InputEvent::Click {
            x: number(words.next(), "x", "click")?,
            y: number(words.next(), "y", "click")?,
        },
        "cell" => InputEvent::Cell {
            col: number(words.next(), "column", "cell")?,
            row: number(words.next(), "row", "cell")?,
        },
        "resize" => InputEvent::Resize {
            width: number(words.next(), "width", "resize")?,
            height: number(words.next(), "height", "resize")?,
        },
        key => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => InputEvent::Key(Key::Char(c)),
                _ => return Err(InputError::Unknown(head.to_owned())),
            }
        }
    };

    match words.next() {
        Some(extra) => Err(InputError::Trailing(extra.to_owned())),
        None => Ok(event),
    }
}

/// Key bindings of the game screen.
pub fn key_binding(key: Key) -> Option<Action> {
    let command = match key {
        Key::Escape => return Some(Action::Exit),
        Key::Space => Command::Start,
        Key::Char('c') => Command::ComputerFirst,
        Key::Char('p') => Command::HumanFirst,
        Key::Char('h') => Command::SetDifficulty(Difficulty::Hard),
        Key::Char('e') => Command::SetDifficulty(Difficulty::Easy),
        Key::Char('n') => Command::NewGame,
        Key::Char('q') => Command::Quit,
        Key::Char(_) => return None,
    };
    Some(Action::Command(command))
}

fn number<T: FromStr>(
    word: Option<&str>,
    name: &'static str,
    input: &'static str,
) -> Result<T, InputError> {
    let word = word.ok_or(InputError::MissingArgument(name, input))?;
    word.parse()
        .map_err(|_| InputError::InvalidNumber(word.to_owned()))
}
