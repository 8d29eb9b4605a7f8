/// Single coordinate axis used for columns and rows.
pub type Coord = u8;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

/// Number of columns and rows on the board.
pub const BOARD_SIZE: Coord = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

pub const CORNERS: [Coord2; 4] = [(0, 0), (2, 0), (0, 2), (2, 2)];

pub const CENTER: Coord2 = (1, 1);

pub const SIDES: [Coord2; 4] = [(1, 0), (0, 1), (2, 1), (1, 2)];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((col, row): Coord2) -> bool {
    col < BOARD_SIZE && row < BOARD_SIZE
}

/// Iterates every cell column-major: `(0, 0), (0, 1), (0, 2), (1, 0), ...`.
pub fn scan_order() -> ScanOrder {
    ScanOrder { index: 0 }
}

#[derive(Debug, Clone)]
pub struct ScanOrder {
    index: u8,
}

impl Iterator for ScanOrder {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::from(self.index) >= CELL_COUNT {
            return None;
        }
        let coords = (self.index / BOARD_SIZE, self.index % BOARD_SIZE);
        self.index += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = CELL_COUNT - usize::from(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ScanOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_order_is_column_major() {
        let mut order = scan_order();
        assert_eq!(order.len(), 9);
        assert_eq!(order.next(), Some((0, 0)));
        assert_eq!(order.next(), Some((0, 1)));
        assert_eq!(order.next(), Some((0, 2)));
        assert_eq!(order.next(), Some((1, 0)));
        assert_eq!(order.last(), Some((2, 2)));
    }

    #[test]
    fn cell_groups_partition_the_board() {
        let mut seen = [[false; 3]; 3];
        for (col, row) in CORNERS.into_iter().chain([CENTER]).chain(SIDES) {
            assert!(!seen[col as usize][row as usize]);
            seen[col as usize][row as usize] = true;
        }
        assert!(seen.iter().flatten().all(|&hit| hit));
        assert!(!in_bounds((3, 0)));
        assert!(!in_bounds((0, 3)));
    }
}
