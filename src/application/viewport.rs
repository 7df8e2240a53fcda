/// Smallest square board the window layout picks
pub const MIN_GRID_SIDE: usize = 10;
/// Largest square board the window layout picks
pub const MAX_GRID_SIDE: usize = 25;

/// Share of the window width the board may occupy
const WIDTH_SHARE: f32 = 0.9;

/// Viewport maps between screen pixels and grid cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub cell_gap: f32,
}

impl Viewport {
    pub fn new(cell_size: f32, cell_gap: f32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size,
            cell_gap,
        }
    }

    /// Distance between the top-left corners of neighbouring cells
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.cell_gap
    }

    /// Side of the square board that fits `available_width` pixels.
    ///
    /// Uses 90% of the width and keeps the side within 10..=25 cells.
    pub fn fit_grid(&self, available_width: f32) -> usize {
        let usable = (available_width * WIDTH_SHARE).max(0.0);
        let max_cols = (usable / self.pitch()).floor() as usize;
        max_cols.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE)
    }

    /// Pixel size of a `rows x cols` board
    pub fn extent(&self, rows: usize, cols: usize) -> (f32, f32) {
        (cols as f32 * self.pitch(), rows as f32 * self.pitch())
    }

    /// Move the origin so the board is centred in the given area
    pub fn center_in(&mut self, x: f32, y: f32, width: f32, height: f32, rows: usize, cols: usize) {
        let (board_w, board_h) = self.extent(rows, cols);
        self.origin_x = x + ((width - board_w) / 2.0).max(0.0);
        self.origin_y = y + ((height - board_h) / 2.0).max(0.0);
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.pitch(),
            self.origin_y + row as f32 * self.pitch(),
        )
    }

    /// Cell under a screen position, `None` outside the board
    pub fn screen_to_cell(&self, x: f32, y: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let col = (dx / self.pitch()) as usize;
        let row = (dy / self.pitch()) as usize;
        (row < rows && col < cols).then_some((row, col))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(20.0, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_grid_bounds() {
        let viewport = Viewport::default();

        // 180px usable -> 8 columns, raised to the minimum
        assert_eq!(viewport.fit_grid(200.0), 10);
        // 360px usable -> 16 columns
        assert_eq!(viewport.fit_grid(400.0), 16);
        // 900px usable -> 40 columns, capped
        assert_eq!(viewport.fit_grid(1000.0), 25);
        assert_eq!(viewport.fit_grid(0.0), 10);
    }

    #[test]
    fn test_fit_grid_in_range() {
        let viewport = Viewport::default();
        // 297px usable -> 13 columns
        assert_eq!(viewport.fit_grid(330.0), 13);
    }

    #[test]
    fn test_screen_cell_roundtrip() {
        let mut viewport = Viewport::default();
        viewport.origin_x = 10.0;
        viewport.origin_y = 50.0;

        let (x, y) = viewport.cell_to_screen(3, 4);
        assert_eq!((x, y), (98.0, 116.0));
        assert_eq!(viewport.screen_to_cell(x + 5.0, y + 5.0, 10, 10), Some((3, 4)));
    }

    #[test]
    fn test_screen_to_cell_outside() {
        let viewport = Viewport::default();
        assert_eq!(viewport.screen_to_cell(-1.0, 5.0, 10, 10), None);
        assert_eq!(viewport.screen_to_cell(5.0, 221.0, 10, 10), None);
        assert_eq!(viewport.screen_to_cell(219.0, 219.0, 10, 10), Some((9, 9)));
    }

    #[test]
    fn test_center_in() {
        let mut viewport = Viewport::default();
        viewport.center_in(0.0, 100.0, 400.0, 300.0, 10, 10);
        assert_eq!(viewport.origin_x, 90.0);
        assert_eq!(viewport.origin_y, 140.0);
    }
}
