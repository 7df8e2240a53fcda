//! Generation step: one simultaneous application of a rule to every cell.
//!
//! Both variants read only the input grid and collect a complete new cell
//! buffer before building the result, so no cell ever sees a half-updated
//! neighborhood.

use super::{Cell, Grid, Rule};
use rayon::prelude::*;

/// Next state of the cell at `(i, j)`
fn next_cell(grid: &Grid, rule: &dyn Rule, i: usize, j: usize) -> Cell {
    let current = grid.get(i, j).unwrap_or_default();
    rule.evolve(current, grid.count_live_neighbors(i, j))
}

/// Pure functional step - returns new grid (serial)
pub fn step(grid: &Grid, rule: &dyn Rule) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .map(|(i, j)| next_cell(grid, rule, i, j))
        .collect();

    grid.with_cells(cells)
}

/// Parallel step using rayon, one task per row
pub fn step_parallel(grid: &Grid, rule: &dyn Rule) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells: Vec<Cell> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|i| (0..cols).map(move |j| next_cell(grid, rule, i, j)))
        .collect();

    grid.with_cells(cells)
}

/// Apply `step` `generations` times
pub fn step_n(grid: &Grid, rule: &dyn Rule, generations: usize) -> Grid {
    (0..generations).fold(grid.clone(), |current, _| step(&current, rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RuleSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn blinker(rows: usize, cols: usize) -> Grid {
        Grid::with_seed(rows, cols, &[(2, 1), (2, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_preserves_dimensions() {
        let rules = [RuleSet::conway(), RuleSet::seeds(), RuleSet::parse("", "")];
        for (rows, cols) in [(1, 1), (1, 7), (6, 2), (13, 21)] {
            let mut grid = Grid::new(rows, cols).unwrap();
            grid.randomize(&mut StdRng::seed_from_u64(rows as u64), 0.4);
            for rule in &rules {
                assert_eq!(step(&grid, rule).dimensions(), (rows, cols));
            }
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let grid = blinker(5, 5);
        let before = grid.clone();
        let _ = step(&grid, &RuleSet::default());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_period_two() {
        let rules = RuleSet::default();
        let grid = blinker(5, 5);

        let next = step(&grid, &rules);
        assert_ne!(next, grid);
        assert!(next.is_alive(1, 2));
        assert!(next.is_alive(2, 2));
        assert!(next.is_alive(3, 2));
        assert_eq!(next.count_alive(), 3);

        assert_eq!(step(&next, &rules), grid);
    }

    #[test]
    fn test_block_still_life() {
        let rules = RuleSet::default();
        let grid = Grid::with_seed(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]).unwrap();

        let mut current = grid.clone();
        for _ in 0..5 {
            current = step(&current, &rules);
            assert_eq!(current, grid);
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let rules = RuleSet::default();
        let shape = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let grid = Grid::with_seed(10, 10, &shape).unwrap();

        let moved: Vec<_> = shape.iter().map(|&(i, j)| (i + 1, j + 1)).collect();
        let expected = Grid::with_seed(10, 10, &moved).unwrap();

        assert_eq!(step_n(&grid, &rules, 4), expected);
    }

    #[test]
    fn test_glider_wraps_on_torus() {
        let rules = RuleSet::default();
        // Glider sitting against the bottom-right corner
        let shape = [(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)];
        let grid = Grid::with_seed(8, 8, &shape).unwrap();

        let moved: Vec<_> = shape.iter().map(|&(i, j)| ((i + 1) % 8, (j + 1) % 8)).collect();
        let expected = Grid::with_seed(8, 8, &moved).unwrap();

        assert_eq!(step_n(&grid, &rules, 4), expected);

        // Full lap: 8 translations of 4 generations each
        assert_eq!(step_n(&grid, &rules, 32), grid);
    }

    #[test]
    fn test_custom_rules_apply() {
        // B1/S: every dead cell next to the lone live cell is born, the cell dies
        let rules = RuleSet::parse("", "1");
        let grid = Grid::with_seed(5, 5, &[(2, 2)]).unwrap();
        let next = step(&grid, &rules);
        assert!(!next.is_alive(2, 2));
        assert_eq!(next.count_alive(), 8);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let rules = RuleSet::default();
        let mut grid = Grid::new(50, 37).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(42), 0.35);

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..5 {
            serial = step(&serial, &rules);
            parallel = step_parallel(&parallel, &rules);
            assert_eq!(serial, parallel);
        }
    }
}
