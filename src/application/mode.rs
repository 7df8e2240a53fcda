/// Run state of the simulator. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Tutorial armed but not ticking; user controls locked
    Tutorial,
    /// Stopped; user controls unlocked
    Idle,
    /// Ticking on the timer; `tutorial` keeps user controls locked
    Running { tutorial: bool },
    /// Waiting for a grid click to place the named pattern
    PlacementPending { pattern: &'static str },
}

impl RunMode {
    /// Whether user commands are locked out
    pub const fn is_tutorial(self) -> bool {
        matches!(self, RunMode::Tutorial | RunMode::Running { tutorial: true })
    }

    pub const fn is_running(self) -> bool {
        matches!(self, RunMode::Running { .. })
    }

    /// Display name for the status panel
    pub fn name(self) -> &'static str {
        match self {
            RunMode::Tutorial => "Tutorial",
            RunMode::Idle => "Idle",
            RunMode::Running { tutorial: true } => "Tutorial (running)",
            RunMode::Running { tutorial: false } => "Running",
            RunMode::PlacementPending { .. } => "Placing pattern",
        }
    }
}
