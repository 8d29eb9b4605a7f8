#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use opponent::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod opponent;
mod snapshot;
mod types;

/// Session settings that can only be changed before a game starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub first_mover: Player,
    pub computer: Player,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub const fn new(first_mover: Player, computer: Player, difficulty: Difficulty) -> Self {
        Self {
            first_mover,
            computer,
            difficulty,
        }
    }

    pub const fn human(&self) -> Player {
        self.computer.opponent()
    }

    pub fn computer_moves_first(&self) -> bool {
        self.first_mover == self.computer
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Player::O, Player::O, Difficulty::Hard)
    }
}

/// Terminal result of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won { player: Player, line: WinnerLine },
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won { player, .. } => Some(player),
            Self::Draw => None,
        }
    }

    pub const fn line(self) -> Option<WinnerLine> {
        match self {
            Self::Won { line, .. } => Some(line),
            Self::Draw => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    NoChange,
    Changed,
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    GameOver(Outcome),
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            GameOver(_) => true,
        }
    }
}
