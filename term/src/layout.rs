use tictactoe_core::{BOARD_SIZE, Coord2};

/// On-screen rectangle of one cell, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl CellRect {
    /// Strictly inside, so a click on a grid line selects nothing.
    pub fn contains(&self, mx: i32, my: i32) -> bool {
        mx > self.x && mx < self.x + self.w && my > self.y && my < self.y + self.h
    }
}

/// Splits a display into a 3x3 grid and maps pointer positions back to cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    width: u32,
    height: u32,
    rects: [[CellRect; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl BoardLayout {
    pub fn new(width: u32, height: u32) -> Self {
        let mut layout = Self {
            width,
            height,
            rects: Default::default(),
        };
        layout.recompute();
        layout
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` when the display size actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if (self.width, self.height) == (width, height) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.recompute();
        true
    }

    pub fn rect(&self, (col, row): Coord2) -> CellRect {
        self.rects[col as usize][row as usize]
    }

    pub fn hit_test(&self, mx: i32, my: i32) -> Option<Coord2> {
        (0..BOARD_SIZE)
            .flat_map(|col| (0..BOARD_SIZE).map(move |row| (col, row)))
            .find(|&coords| self.rect(coords).contains(mx, my))
    }

    fn recompute(&mut self) {
        let cell_w = clamp_i32(self.width) / i32::from(BOARD_SIZE);
        let cell_h = clamp_i32(self.height) / i32::from(BOARD_SIZE);
        for (col, column) in self.rects.iter_mut().enumerate() {
            for (row, rect) in column.iter_mut().enumerate() {
                *rect = CellRect {
                    x: col as i32 * cell_w,
                    y: row as i32 * cell_h,
                    w: cell_w,
                    h: cell_h,
                };
            }
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(720, 720)
    }
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
