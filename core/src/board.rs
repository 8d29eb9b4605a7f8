use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One of the eight three-in-a-row geometries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinnerLine {
    VerticalLeft,
    VerticalMid,
    VerticalRight,
    HorizontalTop,
    HorizontalMid,
    HorizontalBottom,
    DiagonalTopLeft,
    DiagonalBottomLeft,
}

impl WinnerLine {
    /// Every line in checking order: columns left to right, rows top to bottom, then diagonals.
    pub const ALL: [WinnerLine; 8] = [
        Self::VerticalLeft,
        Self::VerticalMid,
        Self::VerticalRight,
        Self::HorizontalTop,
        Self::HorizontalMid,
        Self::HorizontalBottom,
        Self::DiagonalTopLeft,
        Self::DiagonalBottomLeft,
    ];

    pub const fn cells(self) -> [Coord2; 3] {
        use WinnerLine::*;
        match self {
            VerticalLeft => [(0, 0), (0, 1), (0, 2)],
            VerticalMid => [(1, 0), (1, 1), (1, 2)],
            VerticalRight => [(2, 0), (2, 1), (2, 2)],
            HorizontalTop => [(0, 0), (1, 0), (2, 0)],
            HorizontalMid => [(0, 1), (1, 1), (2, 1)],
            HorizontalBottom => [(0, 2), (1, 2), (2, 2)],
            DiagonalTopLeft => [(0, 0), (1, 1), (2, 2)],
            DiagonalBottomLeft => [(0, 2), (1, 1), (2, 0)],
        }
    }

    pub fn contains(self, coords: Coord2) -> bool {
        self.cells().contains(&coords)
    }
}

/// The 3x3 grid, indexed by `(col, row)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE as usize, BOARD_SIZE as usize)),
        }
    }

    /// Parses three rows top to bottom, each written left to right with `X`, `O` and `.` for empty.
    pub fn from_rows(rows: [&str; 3]) -> Result<Self> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let mut col = 0;
            for symbol in line.chars() {
                if col >= BOARD_SIZE as usize {
                    return Err(GameError::InvalidBoardShape);
                }
                let cell = Cell::from_symbol(symbol).ok_or(GameError::InvalidCellSymbol(symbol))?;
                board.cells[[col, row]] = cell;
                col += 1;
            }
            if col != BOARD_SIZE as usize {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(board)
    }

    pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Panics when `coords` is outside the board.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Unconditional write, legality is checked by the engine.
    pub fn set_cell(&mut self, coords: Coord2, cell: Cell) {
        self.cells[coords.to_nd_index()] = cell;
    }

    pub fn is_empty_at(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Empty cells in scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        scan_order().filter(|&coords| self.is_empty_at(coords))
    }

    /// First line fully owned by `player`, in [`WinnerLine::ALL`] order.
    pub fn winning_line(&self, player: Player) -> Option<WinnerLine> {
        let cell = Cell::from(player);
        WinnerLine::ALL
            .into_iter()
            .find(|line| line.cells().iter().all(|&coords| self.cell_at(coords) == cell))
    }

    /// Copy of this board with `player` placed at `coords`.
    pub fn with_move(&self, coords: Coord2, player: Player) -> Self {
        let mut next = self.clone();
        next.set_cell(coords, player.into());
        next
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cell_at((col, row)).symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn board(rows: [&str; 3]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn from_rows_addresses_col_then_row() {
        let b = board(["OO.", "XX.", "..."]);

        assert_eq!(b.cell_at((0, 0)), Cell::O);
        assert_eq!(b.cell_at((1, 0)), Cell::O);
        assert_eq!(b.cell_at((0, 1)), Cell::X);
        assert_eq!(b.cell_at((1, 1)), Cell::X);
        assert_eq!(b.cell_at((2, 0)), Cell::Empty);
        assert_eq!(b.to_string(), "OO.\nXX.\n...");
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(["...", "..", "..."]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows(["....", "...", "..."]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows(["..?", "...", "..."]),
            Err(GameError::InvalidCellSymbol('?'))
        );
    }

    #[test]
    fn winning_line_finds_each_geometry() {
        for line in WinnerLine::ALL {
            let mut b = Board::new();
            for coords in line.cells() {
                b.set_cell(coords, Cell::X);
            }
            assert_eq!(b.winning_line(Player::X), Some(line));
            assert_eq!(b.winning_line(Player::O), None);
        }
    }

    #[test]
    fn winning_line_prefers_columns_over_rows() {
        let b = board(["XXX", "X..", "X.."]);

        assert_eq!(b.winning_line(Player::X), Some(WinnerLine::VerticalLeft));
    }

    #[test]
    fn winning_line_ignores_mixed_lines() {
        let b = board(["XOX", "XOO", "OXX"]);

        assert_eq!(b.winning_line(Player::X), None);
        assert_eq!(b.winning_line(Player::O), None);
        assert!(b.is_full());
    }

    #[test]
    fn full_and_reset() {
        let mut b = board(["XOX", "OXO", "OX."]);
        assert!(!b.is_full());
        assert_eq!(b.empty_count(), 1);
        assert_eq!(b.empty_cells().collect::<Vec<_>>(), [(2, 2)]);

        b.set_cell((2, 2), Cell::O);
        assert!(b.is_full());

        b.reset();
        assert_eq!(b, Board::new());
        assert_eq!(b.empty_count(), 9);
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let b = board(["X..", "...", "..."]);
        let next = b.with_move((1, 1), Player::O);

        assert_eq!(b.cell_at((1, 1)), Cell::Empty);
        assert_eq!(next.cell_at((1, 1)), Cell::O);
        assert_eq!(next[(0, 0)], Cell::X);
    }

    #[test]
    fn validate_coords_rejects_out_of_range() {
        assert_eq!(Board::validate_coords((2, 2)), Ok((2, 2)));
        assert_eq!(Board::validate_coords((3, 1)), Err(GameError::InvalidCoords));
    }

    #[test]
    #[should_panic]
    fn cell_at_out_of_range_panics() {
        Board::new().cell_at((0, 3));
    }
}
