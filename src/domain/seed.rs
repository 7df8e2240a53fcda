//! Starting boards and tutorial length.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Cell, Grid};
use crate::error::Result;

/// How a fresh board is populated
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Corner markers, a center cross and a glider, scaled to the board
    #[default]
    Demo,
    /// All cells dead
    Blank,
    /// Each cell alive with probability `density`
    Random { density: f64 },
}

impl SeedPolicy {
    /// Build a `rows x cols` board according to this policy
    pub fn build<R: Rng>(&self, rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
        match *self {
            SeedPolicy::Demo => demo_seed(rows, cols),
            SeedPolicy::Blank => Grid::new(rows, cols),
            SeedPolicy::Random { density } => {
                let mut grid = Grid::new(rows, cols)?;
                grid.randomize(rng, density);
                Ok(grid)
            }
        }
    }
}

/// Demo board: what appears depends on the board size.
/// - both sides > 5: the four corner cells
/// - both sides > 10: a 5x5 plus sign at the center
/// - both sides > 15: a glider near the top-left corner
pub fn demo_seed(rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;

    if rows > 5 && cols > 5 {
        for (i, j) in [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)] {
            grid.set(i, j, Cell::Alive);
        }
    }

    if rows > 10 && cols > 10 {
        let (center_row, center_col) = (rows / 2, cols / 2);
        for offset in 0..5 {
            grid.set(center_row + offset - 2, center_col, Cell::Alive);
            grid.set(center_row, center_col + offset - 2, Cell::Alive);
        }

        if rows > 15 && cols > 15 {
            for (i, j) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
                grid.set(2 + i, 2 + j, Cell::Alive);
            }
        }
    }

    Ok(grid)
}

/// Tutorial length bounds: `clamp(min_ticks, max_ticks, rows * cols / cells_per_tick)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialLength {
    pub min_ticks: u64,
    pub max_ticks: u64,
    pub cells_per_tick: u64,
}

impl Default for TutorialLength {
    fn default() -> Self {
        Self {
            min_ticks: 10,
            max_ticks: 25,
            cells_per_tick: 15,
        }
    }
}

impl TutorialLength {
    /// Ticks the tutorial runs on a `rows x cols` board
    pub fn ticks_for(&self, rows: usize, cols: usize) -> u64 {
        let area = (rows * cols) as u64;
        let scaled = area / self.cells_per_tick.max(1);
        scaled.clamp(self.min_ticks, self.max_ticks.max(self.min_ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_tutorial_ticks_clamped() {
        let length = TutorialLength::default();
        assert_eq!(length.ticks_for(5, 5), 10);
        assert_eq!(length.ticks_for(13, 13), 11);
        assert_eq!(length.ticks_for(17, 17), 19);
        assert_eq!(length.ticks_for(25, 25), 25);
        assert_eq!(length.ticks_for(100, 100), 25);
    }

    #[test]
    fn test_demo_seed_small_board_is_empty() {
        let grid = demo_seed(5, 5).unwrap();
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_demo_seed_corners_only() {
        let grid = demo_seed(8, 9).unwrap();
        assert_eq!(grid.count_alive(), 4);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(0, 8));
        assert!(grid.is_alive(7, 0));
        assert!(grid.is_alive(7, 8));
    }

    #[test]
    fn test_demo_seed_cross() {
        let grid = demo_seed(11, 11).unwrap();
        // 4 corners + 9 cells of the plus sign
        assert_eq!(grid.count_alive(), 13);
        assert!(grid.is_alive(3, 5));
        assert!(grid.is_alive(7, 5));
        assert!(grid.is_alive(5, 3));
        assert!(grid.is_alive(5, 7));
        assert!(!grid.is_alive(2, 2));
    }

    #[test]
    fn test_demo_seed_glider() {
        let grid = demo_seed(17, 17).unwrap();
        assert_eq!(grid.count_alive(), 4 + 9 + 5);
        assert!(grid.is_alive(2, 3));
        assert!(grid.is_alive(3, 4));
        assert!(grid.is_alive(4, 2));
    }

    #[test]
    fn test_seed_policies() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(SeedPolicy::Blank.build(6, 6, &mut rng).unwrap().count_alive(), 0);
        assert_eq!(SeedPolicy::Demo.build(17, 17, &mut rng).unwrap(), demo_seed(17, 17).unwrap());

        let full = SeedPolicy::Random { density: 1.0 }.build(3, 4, &mut rng).unwrap();
        assert_eq!(full.count_alive(), 12);

        assert!(SeedPolicy::Demo.build(0, 3, &mut rng).is_err());
    }

    #[test]
    fn test_seed_policy_deserializes() {
        let policy: SeedPolicy = serde_json::from_str(r#"{"kind":"random","density":0.25}"#).unwrap();
        assert_eq!(policy, SeedPolicy::Random { density: 0.25 });
        let policy: SeedPolicy = serde_json::from_str(r#"{"kind":"blank"}"#).unwrap();
        assert_eq!(policy, SeedPolicy::Blank);
    }
}
