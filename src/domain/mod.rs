mod cell;
mod grid;
mod rules;
mod patterns;
mod algorithm;
pub mod seed;
pub mod step;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, RuleSet, MAX_NEIGHBORS, all_rules};
pub use patterns::{Category, Pattern, PatternLibrary, PatternOption, presets};
pub use algorithm::Algorithm;
pub use seed::{SeedPolicy, TutorialLength};
