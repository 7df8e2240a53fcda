use super::Cell;
use crate::error::{EngineError, Result};
use rand::Rng;

/// Neighbor offsets in lookup order: row-major over (di, dj), center skipped.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is the toroidal board: `rows x cols` cells stored row-major.
/// Indices used for neighbor lookup wrap around both axes, so there are no edges.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(EngineError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a grid and mark the given `(row, col)` cells alive.
    /// Seed coordinates wrap like every other lookup.
    pub fn with_seed(rows: usize, cols: usize, seed: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &(i, j) in seed {
            grid.set(i % rows, j % cols, Cell::Alive);
        }
        Ok(grid)
    }

    /// Build a grid from 0/1 rows. Every row must have the same length.
    pub fn from_bits(bits: &[Vec<u8>]) -> Result<Self> {
        let rows = bits.len();
        let cols = bits.first().map_or(0, Vec::len);
        if bits.iter().any(|row| row.len() != cols) {
            return Err(EngineError::InvalidDimension { rows, cols });
        }
        let mut grid = Self::new(rows, cols)?;
        for (i, row) in bits.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                grid.set(i, j, Cell::from(bit != 0));
            }
        }
        Ok(grid)
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, i: usize, j: usize) -> Option<Cell> {
        (i < self.rows && j < self.cols).then(|| self.cells[self.index(i, j)])
    }

    /// Whether the cell is alive; out-of-range positions read as dead
    pub fn is_alive(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some_and(Cell::is_alive)
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, i: usize, j: usize, cell: Cell) {
        if i < self.rows && j < self.cols {
            let idx = self.index(i, j);
            self.cells[idx] = cell;
        }
    }

    /// Flip a single cell. Out-of-range positions are ignored.
    pub fn toggle(&mut self, i: usize, j: usize) {
        if let Some(cell) = self.get(i, j) {
            self.set(i, j, cell.toggle());
        }
    }

    /// Coordinates of the 8 toroidal neighbors of `(i, j)`, in a fixed order
    pub fn neighbor_coords(&self, i: usize, j: usize) -> [(usize, usize); 8] {
        let rows = self.rows as isize;
        let cols = self.cols as isize;

        NEIGHBOR_OFFSETS.map(|(di, dj)| {
            let ni = (i as isize + di).rem_euclid(rows);
            let nj = (j as isize + dj).rem_euclid(cols);
            (ni as usize, nj as usize)
        })
    }

    /// Values of the 8 toroidal neighbors of `(i, j)`
    pub fn neighbors_of(&self, i: usize, j: usize) -> [Cell; 8] {
        self.neighbor_coords(i, j)
            .map(|(ni, nj)| self.cells[self.index(ni, nj)])
    }

    /// Count live neighbors using toroidal wrapping
    pub fn count_live_neighbors(&self, i: usize, j: usize) -> u8 {
        self.neighbors_of(i, j)
            .iter()
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Fill the grid randomly; each cell is alive with probability `density`.
    /// A NaN or infinite density counts as 0.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Borrow one row of cells, `None` past the last row
    pub fn row(&self, i: usize) -> Option<&[Cell]> {
        (i < self.rows).then(|| &self.cells[i * self.cols..(i + 1) * self.cols])
    }

    /// Grid as rows of 0/1 values
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.bit()).collect())
            .collect()
    }

    /// Build a grid of the same dimensions from precomputed cells
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.rows * self.cols);
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.count_alive(), 0);
        assert!(grid.to_bits().iter().all(|row| row.len() == 7));
    }

    #[test]
    fn test_with_seed() {
        let grid = Grid::with_seed(5, 5, &[(0, 0), (2, 3), (7, 6)]).unwrap();
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(2, 3));
        // (7, 6) wraps to (2, 1)
        assert!(grid.is_alive(2, 1));
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn test_from_bits_rejects_ragged_rows() {
        assert!(Grid::from_bits(&[vec![1, 0], vec![1]]).is_err());
        assert!(Grid::from_bits(&[]).is_err());

        let grid = Grid::from_bits(&[vec![0, 1, 0], vec![1, 1, 1]]).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.to_bits(), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.toggle(1, 2);
        assert!(grid.is_alive(1, 2));
        grid.toggle(1, 2);
        assert!(!grid.is_alive(1, 2));

        // Out of range is ignored
        grid.toggle(3, 3);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_neighbor_coords_wrap_at_corner() {
        let grid = Grid::new(5, 5).unwrap();
        let coords = grid.neighbor_coords(0, 0);

        assert!(coords.contains(&(4, 4)));
        assert!(coords.contains(&(4, 0)));
        assert!(coords.contains(&(0, 4)));
        assert!(coords.contains(&(1, 1)));
        assert!(!coords.contains(&(0, 0)));
    }

    #[test]
    fn test_neighbor_coords_distinct_and_in_bounds() {
        for (rows, cols) in [(3, 3), (5, 5), (4, 9), (10, 3)] {
            let grid = Grid::new(rows, cols).unwrap();
            for i in 0..rows {
                for j in 0..cols {
                    let coords = grid.neighbor_coords(i, j);
                    let unique: HashSet<_> = coords.iter().collect();
                    assert_eq!(unique.len(), 8, "duplicate neighbor at ({i}, {j})");
                    assert!(coords.iter().all(|&(ni, nj)| ni < rows && nj < cols));
                    assert!(!coords.contains(&(i, j)));
                }
            }
        }
    }

    #[test]
    fn test_neighbor_order_is_stable() {
        let grid = Grid::new(6, 6).unwrap();
        assert_eq!(grid.neighbor_coords(3, 3), grid.neighbor_coords(3, 3));
        assert_eq!(grid.neighbor_coords(3, 3)[0], (2, 2));
        assert_eq!(grid.neighbor_coords(3, 3)[7], (4, 4));
    }

    #[test]
    fn test_count_live_neighbors() {
        let mut grid = Grid::new(10, 10).unwrap();

        // Horizontal blinker on row 5
        grid.set(5, 4, Cell::Alive);
        grid.set(5, 5, Cell::Alive);
        grid.set(5, 6, Cell::Alive);

        assert_eq!(grid.count_live_neighbors(5, 5), 2);
        assert_eq!(grid.count_live_neighbors(4, 5), 3);
        assert_eq!(grid.count_live_neighbors(6, 5), 3);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_count_wraps_across_edges() {
        let grid = Grid::with_seed(5, 5, &[(4, 4), (4, 0), (0, 4)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = Grid::with_seed(4, 6, &[(1, 1), (3, 5)]).unwrap();
        grid.clear();
        assert_eq!(grid.count_alive(), 0);
        assert_eq!(grid.dimensions(), (4, 6));
    }

    #[test]
    fn test_clone_is_deep() {
        let grid = Grid::with_seed(3, 3, &[(1, 1)]).unwrap();
        let mut copy = grid.clone();
        copy.toggle(1, 1);
        assert!(grid.is_alive(1, 1));
        assert!(!copy.is_alive(1, 1));
        assert_ne!(grid, copy);
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        b.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(a, b);

        let mut full = Grid::new(4, 4).unwrap();
        full.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(full.count_alive(), 16);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = Grid::with_seed(2, 3, &[(1, 2)]).unwrap();
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], (1, 2, Cell::Alive));
        assert_eq!(cells[1], (0, 1, Cell::Dead));
        assert_eq!(grid.row(1), Some(&[Cell::Dead, Cell::Dead, Cell::Alive][..]));
    }

    #[test]
    fn test_row_out_of_range_is_none() {
        let grid = Grid::with_seed(2, 3, &[(0, 0)]).unwrap();
        assert_eq!(grid.row(0).map(<[Cell]>::len), Some(3));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.row(usize::MAX), None);
    }

    #[test]
    fn test_randomize_non_finite_density_leaves_grid_dead() {
        let mut rng = StdRng::seed_from_u64(3);
        for density in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut grid = Grid::with_seed(6, 6, &[(1, 1)]).unwrap();
            grid.randomize(&mut rng, density);
            assert_eq!(grid.count_alive(), 0);
        }
    }
}
