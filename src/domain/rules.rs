use super::Cell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Largest neighbor count a cell can have on a Moore neighborhood.
pub const MAX_NEIGHBORS: u8 = 8;

/// Trait for cellular automaton rules.
/// A rule is a pair of neighbor-count predicates; `evolve` combines them.
pub trait Rule: Send + Sync {
    /// Whether a live cell with `neighbors` live neighbors stays alive
    fn survives(&self, neighbors: u8) -> bool;

    /// Whether a dead cell with `neighbors` live neighbors becomes alive
    fn births(&self, neighbors: u8) -> bool;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let alive = match current {
            Cell::Alive => self.survives(neighbors),
            Cell::Dead => self.births(neighbors),
        };
        Cell::from(alive)
    }
}

/// Birth/survival rule set. Both sides are sets of neighbor counts in 0..=8.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    survival: BTreeSet<u8>,
    birth: BTreeSet<u8>,
}

impl RuleSet {
    /// Build a rule set, dropping any count above 8
    pub fn new(
        survival: impl IntoIterator<Item = u8>,
        birth: impl IntoIterator<Item = u8>,
    ) -> Self {
        let in_range = |n: &u8| *n <= MAX_NEIGHBORS;
        Self {
            survival: survival.into_iter().filter(in_range).collect(),
            birth: birth.into_iter().filter(in_range).collect(),
        }
    }

    /// Parse comma-separated neighbor counts, e.g. `("2,3", "3")`.
    ///
    /// Lenient: each token is read up to its first non-digit (`"1.5"` is 1).
    /// Tokens with no leading integer, or outside 0..=8, are dropped without
    /// error. Garbage input yields an emptier set.
    pub fn parse(survival_text: &str, birth_text: &str) -> Self {
        Self {
            survival: parse_counts(survival_text),
            birth: parse_counts(birth_text),
        }
    }

    pub fn survival(&self) -> &BTreeSet<u8> {
        &self.survival
    }

    pub fn birth(&self) -> &BTreeSet<u8> {
        &self.birth
    }

    /// Rule in B/S notation, e.g. `B3/S23`
    pub fn notation(&self) -> String {
        let digits = |set: &BTreeSet<u8>| set.iter().map(u8::to_string).collect::<String>();
        format!("B{}/S{}", digits(&self.birth), digits(&self.survival))
    }

    /// Human-readable summary lines for the rules panel
    pub fn summary(&self) -> [String; 2] {
        let list = |set: &BTreeSet<u8>| {
            if set.is_empty() {
                "none".to_string()
            } else {
                set.iter().map(u8::to_string).collect::<Vec<_>>().join(", ")
            }
        };
        [
            format!("Live cells survive with {} neighbors", list(&self.survival)),
            format!("Dead cells become alive with {} neighbors", list(&self.birth)),
        ]
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::new([2, 3], [3])
    }

    /// HighLife (B36/S23), grows replicators
    pub fn high_life() -> Self {
        Self::new([2, 3], [3, 6])
    }

    /// Seeds (B2/S), no cell survives
    pub fn seeds() -> Self {
        Self::new(std::iter::empty(), [2])
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub fn day_and_night() -> Self {
        Self::new([3, 4, 6, 7, 8], [3, 6, 7, 8])
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule for RuleSet {
    fn survives(&self, neighbors: u8) -> bool {
        self.survival.contains(&neighbors)
    }

    fn births(&self, neighbors: u8) -> bool {
        self.birth.contains(&neighbors)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

fn parse_counts(text: &str) -> BTreeSet<u8> {
    text.split(',')
        .filter_map(leading_integer)
        .filter_map(|n| u8::try_from(n).ok())
        .filter(|n| *n <= MAX_NEIGHBORS)
        .collect()
}

/// Integer prefix of a token: optional sign, then digits up to the first
/// non-digit. `"1.5"` reads as 1, `"3abc"` as 3, `"abc"` as nothing.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Overlong digit runs are far out of range either way
    let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Get all named rule presets
pub fn all_rules() -> Vec<(&'static str, RuleSet)> {
    vec![
        ("Conway", RuleSet::conway()),
        ("HighLife", RuleSet::high_life()),
        ("Seeds", RuleSet::seeds()),
        ("Day&Night", RuleSet::day_and_night()),
    ]
}
