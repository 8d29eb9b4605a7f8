use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// State of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::X => Some(Player::X),
            Self::O => Some(Player::O),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | ' ' | '_' => Some(Self::Empty),
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Self::X,
            Player::O => Self::O,
        }
    }
}
