use rand::Rng;
use smallvec::SmallVec;

use super::*;

/// Easy mode: any empty cell, uniformly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<Coord2> {
        let free: SmallVec<[Coord2; CELL_COUNT]> = board.empty_cells().collect();
        if free.is_empty() {
            log::warn!("No empty cell left for {}", player);
        }
        pick_uniform(&free, rng)
    }
}
