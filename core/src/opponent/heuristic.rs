use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::*;

/// Which rule of [`HeuristicPolicy`] produced a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    Win,
    Block,
    Corner,
    Center,
    Side,
}

/// Hard mode: one-ply win, one-ply block, then corner, center and side preferences.
///
/// This is not a perfect player. Forks are never looked for, and preferring a corner
/// over the center loses some lines against optimal play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub fn decide<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<(Coord2, Rule)> {
        if let Some(coords) = completing_move(board, player) {
            return Some((coords, Rule::Win));
        }

        if let Some(coords) = completing_move(board, player.opponent()) {
            return Some((coords, Rule::Block));
        }

        let corners: SmallVec<[Coord2; 4]> = CORNERS
            .into_iter()
            .filter(|&coords| board.is_empty_at(coords))
            .collect();
        if let Some(coords) = pick_uniform(&corners, rng) {
            return Some((coords, Rule::Corner));
        }

        if board.is_empty_at(CENTER) {
            return Some((CENTER, Rule::Center));
        }

        let sides: SmallVec<[Coord2; 4]> = SIDES
            .into_iter()
            .filter(|&coords| board.is_empty_at(coords))
            .collect();
        pick_uniform(&sides, rng).map(|coords| (coords, Rule::Side))
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<Coord2> {
        let Some((coords, rule)) = self.decide(board, player, rng) else {
            log::warn!("No empty cell left for {}", player);
            return None;
        };

        match rule {
            Rule::Win => log::debug!("Make a winning move"),
            Rule::Block => log::debug!("Block a player"),
            Rule::Corner => log::debug!("Take a corner"),
            Rule::Center => log::debug!("Take a center"),
            Rule::Side => log::debug!("Choose random side"),
        }
        Some(coords)
    }
}

/// First empty cell, in scan order, that would give `player` a line.
fn completing_move(board: &Board, player: Player) -> Option<Coord2> {
    board
        .empty_cells()
        .find(|&coords| board.with_move(coords, player).winning_line(player).is_some())
}
