//! Algorithm enum for selecting the step implementation.

use serde::{Deserialize, Serialize};

use super::{Grid, Rule, step};

/// Available step implementations. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Rows computed in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Compute the next generation with this algorithm
    pub fn step(&self, grid: &Grid, rule: &dyn Rule) -> Grid {
        match self {
            Algorithm::Serial => step::step(grid, rule),
            Algorithm::Parallel => step::step_parallel(grid, rule),
        }
    }
}
