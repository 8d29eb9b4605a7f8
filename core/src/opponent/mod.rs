use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use heuristic::*;
pub use random::*;

mod heuristic;
mod random;

/// Picks a cell for `player` to occupy, without touching `board`.
pub trait MovePolicy {
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<Coord2>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Hard
    }
}

impl MovePolicy for Difficulty {
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<Coord2> {
        match self {
            Self::Easy => RandomPolicy.choose_move(board, player, rng),
            Self::Hard => HeuristicPolicy.choose_move(board, player, rng),
        }
    }
}

/// Uniform pick among `candidates`, `None` when there are none.
fn pick_uniform<R: Rng + ?Sized>(candidates: &[Coord2], rng: &mut R) -> Option<Coord2> {
    use rand::prelude::*;

    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
