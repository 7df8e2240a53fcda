/// Cell is a single site of the toroidal board.
/// Serialized as a bit: Dead = 0, Alive = 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Cell state as a 0/1 bit
    pub const fn bit(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// OR two cells together (used by additive pattern placement)
    pub const fn or(self, other: Self) -> Self {
        if self.is_alive() || other.is_alive() {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
