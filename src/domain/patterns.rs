use super::{Cell, Grid};
use crate::error::{EngineError, Result};

/// Broad family a catalog pattern belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Spaceship,
    Oscillator,
    StillLife,
    Gun,
    Methuselah,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Spaceship => "Spaceship",
            Category::Oscillator => "Oscillator",
            Category::StillLife => "Still life",
            Category::Gun => "Gun",
            Category::Methuselah => "Methuselah",
        }
    }
}

/// A named, immutable `height x width` arrangement of cells.
/// Dead cells inside the bounding box are part of the shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub height: usize,
    pub width: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Build a pattern from a picture: one string per row, `O` alive, `.` dead.
    /// Short rows are padded with dead cells to the widest row.
    pub fn from_picture(
        name: &'static str,
        description: &'static str,
        category: Category,
        picture: &[&str],
    ) -> Self {
        let height = picture.len().max(1);
        let width = picture.iter().map(|row| row.len()).max().unwrap_or(0).max(1);

        let mut cells = vec![Cell::Dead; height * width];
        for (i, row) in picture.iter().enumerate() {
            for (j, ch) in row.chars().enumerate() {
                if ch == 'O' {
                    cells[i * width + j] = Cell::Alive;
                }
            }
        }

        Self { name, description, category, height, width, cells }
    }

    /// Get cell at pattern-relative position
    pub fn get(&self, i: usize, j: usize) -> Option<Cell> {
        (i < self.height && j < self.width).then(|| self.cells[i * self.width + j])
    }

    /// Pattern-relative coordinates of alive cells, row-major
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.width, idx % self.width))
    }

    pub fn population(&self) -> usize {
        self.alive_cells().count()
    }

    /// Whether the bounding box fits a `rows x cols` grid
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        self.height <= rows && self.width <= cols
    }

    /// Anchor that keeps the pattern inside the grid:
    /// `max(0, min(anchor, dimension - pattern_dimension))` on each axis.
    pub fn clamp_anchor(&self, rows: usize, cols: usize, anchor_row: usize, anchor_col: usize) -> Result<(usize, usize)> {
        if !self.fits(rows, cols) {
            return Err(EngineError::PatternTooLarge {
                pattern: self.name.to_string(),
                height: self.height,
                width: self.width,
                rows,
                cols,
            });
        }
        Ok((anchor_row.min(rows - self.height), anchor_col.min(cols - self.width)))
    }

    /// Anchor that centers the pattern on the grid
    pub fn centered_anchor(&self, rows: usize, cols: usize) -> (usize, usize) {
        (rows.saturating_sub(self.height) / 2, cols.saturating_sub(self.width) / 2)
    }

    /// Place pattern on grid, OR-ing alive cells into the board.
    ///
    /// The anchor is clamped so the whole pattern lies inside the grid; the
    /// anchor actually used is returned. Dead pattern cells never clear board
    /// cells. Fails without touching the grid when the pattern is larger than
    /// the grid on either axis.
    pub fn place_on(&self, grid: &mut Grid, anchor_row: usize, anchor_col: usize) -> Result<(usize, usize)> {
        let (rows, cols) = grid.dimensions();
        let (row, col) = self.clamp_anchor(rows, cols, anchor_row, anchor_col)?;

        for (di, dj) in self.alive_cells() {
            grid.set(row + di, col + dj, Cell::Alive);
        }
        Ok((row, col))
    }
}

/// Fit status of one catalog entry for the current grid size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternOption {
    pub name: &'static str,
    pub category: Category,
    pub fits: bool,
}

/// The pattern catalog, keyed by lowercase name
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// The built-in catalog
    pub fn standard() -> Self {
        Self { patterns: presets::all_patterns() }
    }

    /// Look up a pattern by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.position(name).map(|idx| &self.patterns[idx])
    }

    /// Index of a pattern by name (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        self.patterns
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn by_index(&self, idx: usize) -> Option<&Pattern> {
        self.patterns.get(idx)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Every catalog entry with its fit status for a `rows x cols` grid
    pub fn fit_report(&self, rows: usize, cols: usize) -> Vec<PatternOption> {
        self.patterns
            .iter()
            .map(|p| PatternOption {
                name: p.name,
                category: p.category,
                fits: p.fits(rows, cols),
            })
            .collect()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_picture("glider", "Moves diagonally (period 4)", Category::Spaceship, &[
            ".O.",
            "..O",
            "OOO",
        ])
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_picture("lwss", "Lightweight spaceship (period 4)", Category::Spaceship, &[
            ".OOOO",
            "O...O",
            "....O",
            "O..O.",
        ])
    }

    /// Middleweight Spaceship (MWSS)
    pub fn mwss() -> Pattern {
        Pattern::from_picture("mwss", "Middleweight spaceship (period 4)", Category::Spaceship, &[
            ".OOOOO",
            "O....O",
            ".....O",
            "O...O.",
            "..O...",
        ])
    }

    /// Heavyweight Spaceship (HWSS)
    pub fn hwss() -> Pattern {
        Pattern::from_picture("hwss", "Heavyweight spaceship (period 4)", Category::Spaceship, &[
            ".OOOOOO",
            "O.....O",
            "......O",
            "O....O.",
            "..OO...",
        ])
    }

    /// Copperhead - slow orthogonal spaceship
    pub fn copperhead() -> Pattern {
        Pattern::from_picture("copperhead", "c/10 orthogonal spaceship (period 10)", Category::Spaceship, &[
            ".OO..OO.",
            "...OO...",
            "...OO...",
            "O.O..O.O",
            "O......O",
            "........",
            "O......O",
            ".OO..OO.",
            "..OOOO..",
            "........",
            "...OO...",
            "...OO...",
        ])
    }

    /// Weekender - 2c/7 orthogonal spaceship
    pub fn weekender() -> Pattern {
        Pattern::from_picture("weekender", "2c/7 orthogonal spaceship (period 7)", Category::Spaceship, &[
            ".O............O.",
            ".O............O.",
            "O.O..........O.O",
            ".O............O.",
            ".O............O.",
            "..O...OOOO...O..",
            "......OOOO......",
            "..OOOO....OOOO..",
            "................",
            "....O......O....",
            ".....OO..OO.....",
        ])
    }

    /// Pufferfish - c/2 puffer, leaves debris behind as it travels
    pub fn pufferfish() -> Pattern {
        Pattern::from_picture("pufferfish", "c/2 puffer leaving debris (period 12)", Category::Spaceship, &[
            "...O.......O...",
            "..OOO.....OOO..",
            ".OO..O...O..OO.",
            "...OOO...OOO...",
            "...............",
            "....O.....O....",
            "..O..O...O..O..",
            "O.....O.O.....O",
            "OO....O.O....OO",
            "......O.O......",
            "...O..O.O..O...",
            "...OO.....OO...",
        ])
    }

    /// Loafer - small c/7 spaceship
    pub fn loafer() -> Pattern {
        Pattern::from_picture("loafer", "c/7 orthogonal spaceship (period 7)", Category::Spaceship, &[
            ".OO..O.OO",
            "O..O..OO.",
            ".O.O.....",
            "..O......",
            "........O",
            "......OOO",
            ".....O...",
            "......O..",
            ".......OO",
        ])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_picture("blinker", "Oscillator (period 2)", Category::Oscillator, &["OOO"])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::from_picture("toad", "Oscillator (period 2)", Category::Oscillator, &[
            ".OOO",
            "OOO.",
        ])
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_picture("beacon", "Oscillator (period 2)", Category::Oscillator, &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::from_picture("pulsar", "Oscillator (period 3)", Category::Oscillator, &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ])
    }

    /// Kok's galaxy - period 8 oscillator
    pub fn galaxy() -> Pattern {
        Pattern::from_picture("galaxy", "Kok's galaxy (period 8)", Category::Oscillator, &[
            "OOOOOO.OO",
            "OOOOOO.OO",
            ".......OO",
            "OO.....OO",
            "OO.....OO",
            "OO.....OO",
            "OO.......",
            "OO.OOOOOO",
            "OO.OOOOOO",
        ])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_picture("block", "Still life", Category::StillLife, &[
            "OO",
            "OO",
        ])
    }

    /// Beehive - still life
    pub fn beehive() -> Pattern {
        Pattern::from_picture("beehive", "Still life", Category::StillLife, &[
            ".OO.",
            "O..O",
            ".OO.",
        ])
    }

    /// Loaf - still life
    pub fn loaf() -> Pattern {
        Pattern::from_picture("loaf", "Still life", Category::StillLife, &[
            ".OO.",
            "O..O",
            ".O.O",
            "..O.",
        ])
    }

    /// Boat - still life
    pub fn boat() -> Pattern {
        Pattern::from_picture("boat", "Still life", Category::StillLife, &[
            "OO.",
            "O.O",
            ".O.",
        ])
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_picture("gosper glider gun", "Produces gliders (period 30)", Category::Gun, &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ])
    }

    /// R-pentomino - stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::from_picture("r-pentomino", "Methuselah - stabilizes at gen 1103", Category::Methuselah, &[
            ".OO",
            "OO.",
            ".O.",
        ])
    }

    /// Acorn - stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_picture("acorn", "Methuselah - stabilizes at gen 5206", Category::Methuselah, &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ])
    }

    /// Diehard - vanishes after 130 generations
    pub fn diehard() -> Pattern {
        Pattern::from_picture("diehard", "Methuselah - dies at gen 130", Category::Methuselah, &[
            "......O.",
            "OO......",
            ".O...OOO",
        ])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            lwss(),
            mwss(),
            hwss(),
            copperhead(),
            weekender(),
            pufferfish(),
            loafer(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            galaxy(),
            block(),
            beehive(),
            loaf(),
            boat(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            diehard(),
        ]
    }
}
