use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Array2<Cell>,
    pub phase: GamePhase,
    pub config: GameConfig,
    pub current_player: Player,
    pub winner: Option<Player>,
    pub winner_line: Option<WinnerLine>,
}

impl Snapshot {
    pub fn from_session<R: Rng>(session: &GameSession<R>) -> Self {
        let board = session.board();
        let size = (BOARD_SIZE as usize, BOARD_SIZE as usize);
        let mut cells = Array2::from_elem(size, Cell::Empty);
        for coords in scan_order() {
            cells[coords.to_nd_index()] = board.cell_at(coords);
        }

        let outcome = session.outcome();
        Self {
            cells,
            phase: session.phase(),
            config: session.config(),
            current_player: session.current_player(),
            winner: outcome.and_then(Outcome::winner),
            winner_line: outcome.and_then(Outcome::line),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn is_draw(&self) -> bool {
        self.phase.is_finished() && self.winner.is_none()
    }
}
