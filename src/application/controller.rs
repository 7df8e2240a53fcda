use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{NoopNotifier, Notifier, RunMode, Snapshot, Ticker};
use crate::config::{Config, GridPolicy};
use crate::domain::{Algorithm, Grid, Pattern, PatternLibrary, PatternOption, RuleSet};
use crate::error::{EngineError, Result};

/// Mutable simulation state owned by the controller
#[derive(Clone, Debug, PartialEq)]
pub struct EngineState {
    pub grid: Grid,
    pub rules: RuleSet,
    pub mode: RunMode,
    /// Generations since the last reset
    pub ticks: u64,
    pub tutorial_ticks_required: u64,
}

/// A resolved request to stamp a pattern onto the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementRequest {
    pub pattern: &'static str,
    pub anchor_row: usize,
    pub anchor_col: usize,
}

/// Counters kept for the whole session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Runs started outside the tutorial
    pub runs_started: u64,
    /// Generations computed, tutorial included
    pub total_ticks: u64,
    pub patterns_placed: u64,
}

/// User-level operations, as produced by input bindings
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Start,
    Stop,
    /// Start when stopped, stop when running
    StartStop,
    Reset,
    ToggleCell { row: usize, col: usize },
    EnterPlacement(String),
    CancelPlacement,
    SetRules(RuleSet),
    /// Comma-separated survival and birth counts, as typed
    SetRuleText { survival: String, birth: String },
    SkipTutorial,
}

/// RunController drives the simulation: run state machine, tick schedule,
/// tutorial gating and pattern placement.
pub struct RunController {
    state: EngineState,
    /// Board restored by a reseeding reset
    seed_grid: Grid,
    /// Welcome delay left before the tutorial starts by itself
    autostart: Option<Duration>,
    ticker: Ticker,
    library: PatternLibrary,
    config: Config,
    notifier: Box<dyn Notifier>,
    rng: StdRng,
    stats: SessionStats,
    last_step_time: Duration,
}

impl RunController {
    /// Create a controller with an OS-seeded RNG
    pub fn new(config: Config, notifier: Box<dyn Notifier>) -> Result<Self> {
        Self::with_rng(config, notifier, StdRng::from_os_rng())
    }

    /// Create a controller with the default config and no observers
    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default(), Box::new(NoopNotifier))
    }

    pub fn with_rng(config: Config, notifier: Box<dyn Notifier>, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let grid = config.seed.build(config.rows, config.cols, &mut rng)?;
        let mode = if config.skip_tutorial { RunMode::Idle } else { RunMode::Tutorial };
        let tutorial_ticks_required = config.tutorial.ticks_for(config.rows, config.cols);

        info!(
            "new {}x{} board, {} alive, mode {}, tutorial {} ticks",
            config.rows,
            config.cols,
            grid.count_alive(),
            mode.name(),
            tutorial_ticks_required
        );

        Ok(Self {
            state: EngineState {
                grid: grid.clone(),
                rules: RuleSet::default(),
                mode,
                ticks: 0,
                tutorial_ticks_required,
            },
            seed_grid: grid,
            autostart: if mode == RunMode::Tutorial { config.tutorial_autostart() } else { None },
            ticker: Ticker::new(config.tick_interval()),
            library: PatternLibrary::standard(),
            config,
            notifier,
            rng,
            stats: SessionStats::default(),
            last_step_time: Duration::ZERO,
        })
    }

    // Queries

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn rules(&self) -> &RuleSet {
        &self.state.rules
    }

    pub fn mode(&self) -> RunMode {
        self.state.mode
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn tutorial_ticks_required(&self) -> u64 {
        self.state.tutorial_ticks_required
    }

    /// Ticks left before the tutorial ends, `None` outside the tutorial
    pub fn tutorial_ticks_remaining(&self) -> Option<u64> {
        self.state
            .mode
            .is_tutorial()
            .then(|| self.state.tutorial_ticks_required.saturating_sub(self.state.ticks))
    }

    /// Welcome delay left before the tutorial starts by itself
    pub fn autostart_remaining(&self) -> Option<Duration> {
        self.autostart
    }

    pub fn in_tutorial(&self) -> bool {
        self.state.mode.is_tutorial()
    }

    pub fn is_running(&self) -> bool {
        self.state.mode.is_running()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Every catalog entry with its fit status for the current board
    pub fn pattern_options(&self) -> Vec<PatternOption> {
        let (rows, cols) = self.state.grid.dimensions();
        self.library.fit_report(rows, cols)
    }

    /// Pattern waiting for a click, if any
    pub fn pending_pattern(&self) -> Option<&Pattern> {
        match self.state.mode {
            RunMode::PlacementPending { pattern } => self.library.get(pattern),
            _ => None,
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Wall time of the most recent generation
    pub fn last_step_time(&self) -> Duration {
        self.last_step_time
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.state.grid.clone(),
            mode: self.state.mode,
            ticks: self.state.ticks,
            tutorial_ticks_remaining: self.tutorial_ticks_remaining(),
            rules: self.state.rules.clone(),
        }
    }

    // Commands

    /// Arm the periodic tick
    pub fn start(&mut self) {
        match self.state.mode {
            RunMode::Running { .. } => return,
            RunMode::Tutorial => {
                self.autostart = None;
                self.state.ticks = 0;
                self.state.mode = RunMode::Running { tutorial: true };
            }
            RunMode::Idle | RunMode::PlacementPending { .. } => {
                self.state.mode = RunMode::Running { tutorial: false };
                self.stats.runs_started += 1;
            }
        }

        self.ticker.start();
        info!("started at tick {} ({})", self.state.ticks, self.state.mode.name());
        self.publish();
    }

    /// Disarm the periodic tick. No tick runs after this returns.
    ///
    /// A tutorial run cannot be paused; only `skip_tutorial` ends it early.
    pub fn stop(&mut self) {
        if self.state.mode != (RunMode::Running { tutorial: false }) {
            debug!("stop ignored in {}", self.state.mode.name());
            return;
        }

        self.ticker.stop();
        self.state.mode = RunMode::Idle;
        info!("stopped at tick {}", self.state.ticks);
        self.publish();
    }

    /// Stop, restore the board and zero the tick counter
    pub fn reset(&mut self) {
        if self.in_tutorial() {
            debug!("reset ignored during tutorial");
            return;
        }

        self.ticker.stop();
        self.apply_grid_policy(self.config.reset_policy);
        self.state.ticks = 0;
        self.state.mode = RunMode::Idle;
        info!("reset board ({:?})", self.config.reset_policy);
        self.publish();
    }

    /// Flip one cell, or resolve a pending placement at that cell.
    ///
    /// A placement that does not fit returns to Idle and reports
    /// `PatternTooLarge` both to the notifier and to the caller.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        if self.in_tutorial() {
            debug!("toggle ({row}, {col}) ignored during tutorial");
            return Ok(());
        }

        if let RunMode::PlacementPending { pattern } = self.state.mode {
            self.state.mode = RunMode::Idle;
            let result = self.centered_request(pattern, row, col).and_then(|request| self.place(request));
            self.publish();
            return result.map(|_| ());
        }

        let (rows, cols) = self.state.grid.dimensions();
        if row >= rows || col >= cols {
            debug!("toggle ({row}, {col}) outside {rows}x{cols} board");
            return Ok(());
        }

        self.state.grid.toggle(row, col);
        self.publish();
        Ok(())
    }

    /// Select a catalog pattern; the next `toggle_cell` places it
    pub fn enter_placement(&mut self, name: &str) -> Result<()> {
        if self.in_tutorial() {
            debug!("placement of '{name}' ignored during tutorial");
            return Ok(());
        }

        let pattern = self
            .library
            .get(name)
            .ok_or_else(|| EngineError::UnknownPattern(name.to_string()))?
            .name;

        self.ticker.stop();
        self.state.mode = RunMode::PlacementPending { pattern };
        info!("placing '{pattern}'");
        self.publish();
        Ok(())
    }

    pub fn cancel_placement(&mut self) {
        if let RunMode::PlacementPending { pattern } = self.state.mode {
            self.state.mode = RunMode::Idle;
            info!("placement of '{pattern}' cancelled");
            self.publish();
        }
    }

    /// Stamp a pattern onto the board at its centre anchor.
    ///
    /// Returns the anchor used, or `None` when ignored during the tutorial.
    pub fn place_centered(&mut self, name: &str) -> Result<Option<(usize, usize)>> {
        if self.in_tutorial() {
            debug!("placement of '{name}' ignored during tutorial");
            return Ok(None);
        }

        let pattern = self
            .library
            .get(name)
            .ok_or_else(|| EngineError::UnknownPattern(name.to_string()))?;
        let (rows, cols) = self.state.grid.dimensions();
        let (anchor_row, anchor_col) = pattern.centered_anchor(rows, cols);
        let request = PlacementRequest { pattern: pattern.name, anchor_row, anchor_col };

        let result = self.place(request);
        self.publish();
        result.map(Some)
    }

    /// Replace the rules; the next tick uses them
    pub fn set_rules(&mut self, rules: RuleSet) {
        if self.in_tutorial() {
            debug!("rule change to {rules} ignored during tutorial");
            return;
        }

        info!("rules set to {rules}");
        self.notifier.rules_updated(&rules);
        self.state.rules = rules;
        self.publish();
    }

    /// Switch between serial and parallel stepping. Results are identical.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.config.algorithm != algorithm {
            info!("stepping with {}", algorithm.name());
            self.config.algorithm = algorithm;
        }
    }

    /// Parse comma-separated survival and birth counts and apply them
    pub fn apply_rule_text(&mut self, survival: &str, birth: &str) {
        self.set_rules(RuleSet::parse(survival, birth));
    }

    /// Reallocate and reseed the board, even at the current size. Only
    /// honoured in Idle.
    ///
    /// Returns `Ok(false)` when ignored.
    pub fn resize_grid(&mut self, rows: usize, cols: usize) -> Result<bool> {
        if self.state.mode != RunMode::Idle {
            debug!("resize to {rows}x{cols} ignored in {}", self.state.mode.name());
            return Ok(false);
        }

        let grid = self.config.seed.build(rows, cols, &mut self.rng)?;
        self.seed_grid = grid.clone();
        self.state.grid = grid;
        self.state.tutorial_ticks_required = self.config.tutorial.ticks_for(rows, cols);
        info!("resized board to {rows}x{cols}");
        self.publish();
        Ok(true)
    }

    /// Leave the tutorial without running its remaining ticks
    pub fn skip_tutorial(&mut self) {
        if !self.in_tutorial() {
            return;
        }

        self.ticker.stop();
        self.autostart = None;
        self.state.mode = RunMode::Idle;
        info!("tutorial skipped at tick {}", self.state.ticks);
        self.publish();
    }

    /// Feed elapsed time to the scheduler and run every tick that fell due.
    /// Time past the end of the tutorial welcome delay counts toward the
    /// first tutorial tick. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed = self.count_down_autostart(elapsed);
        self.ticker.advance(elapsed);

        let mut ran = 0;
        while self.ticker.poll() {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Dispatch a command
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::StartStop if self.is_running() => self.stop(),
            Command::StartStop => self.start(),
            Command::Reset => self.reset(),
            Command::ToggleCell { row, col } => self.toggle_cell(row, col)?,
            Command::EnterPlacement(name) => self.enter_placement(&name)?,
            Command::CancelPlacement => self.cancel_placement(),
            Command::SetRules(rules) => self.set_rules(rules),
            Command::SetRuleText { survival, birth } => self.apply_rule_text(&survival, &birth),
            Command::SkipTutorial => self.skip_tutorial(),
        }
        Ok(())
    }

    // Internals

    /// Spend `elapsed` on the welcome delay and return what is left over
    fn count_down_autostart(&mut self, elapsed: Duration) -> Duration {
        let Some(remaining) = self.autostart else {
            return elapsed;
        };
        if self.state.mode != RunMode::Tutorial {
            self.autostart = None;
            return elapsed;
        }
        if elapsed < remaining {
            self.autostart = Some(remaining - elapsed);
            return Duration::ZERO;
        }

        debug!("welcome delay over");
        self.start();
        elapsed - remaining
    }

    /// One generation plus the end-of-run checks
    fn tick(&mut self) {
        let started = Instant::now();
        let next = self.config.algorithm.step(&self.state.grid, &self.state.rules);
        self.last_step_time = started.elapsed();

        let previous = std::mem::replace(&mut self.state.grid, next);
        self.state.ticks += 1;
        self.stats.total_ticks += 1;

        match self.state.mode {
            RunMode::Running { tutorial: true } if self.state.ticks >= self.state.tutorial_ticks_required => {
                self.ticker.stop();
                self.state.mode = RunMode::Idle;
                self.apply_grid_policy(self.config.tutorial_complete_policy);
                info!("tutorial complete after {} ticks", self.state.ticks);
                self.publish();
                self.notifier.tutorial_complete(self.state.ticks);
            }
            RunMode::Running { tutorial: false } if self.state.grid == previous => {
                self.ticker.stop();
                self.state.mode = RunMode::Idle;
                info!("pattern stable after {} ticks", self.state.ticks);
                self.publish();
                self.notifier.pattern_stable(self.state.ticks);
            }
            _ => self.publish(),
        }
    }

    /// Anchor that centres `pattern` on the clicked cell
    fn centered_request(&self, pattern: &'static str, row: usize, col: usize) -> Result<PlacementRequest> {
        let found = self
            .library
            .get(pattern)
            .ok_or_else(|| EngineError::UnknownPattern(pattern.to_string()))?;

        Ok(PlacementRequest {
            pattern,
            anchor_row: row.saturating_sub(found.height / 2),
            anchor_col: col.saturating_sub(found.width / 2),
        })
    }

    fn place(&mut self, request: PlacementRequest) -> Result<(usize, usize)> {
        let pattern = self
            .library
            .get(request.pattern)
            .ok_or_else(|| EngineError::UnknownPattern(request.pattern.to_string()))?;

        match pattern.place_on(&mut self.state.grid, request.anchor_row, request.anchor_col) {
            Ok((row, col)) => {
                info!("placed '{}' at ({row}, {col})", request.pattern);
                self.stats.patterns_placed += 1;
                self.notifier.pattern_placed(request.pattern, row, col);
                Ok((row, col))
            }
            Err(err) => {
                warn!("placement failed: {err}");
                self.notifier.placement_failed(&err);
                Err(err)
            }
        }
    }

    fn apply_grid_policy(&mut self, policy: GridPolicy) {
        match policy {
            GridPolicy::Reseed => self.state.grid = self.seed_grid.clone(),
            GridPolicy::Blank => self.state.grid.clear(),
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.notifier.state_changed(&snapshot);
    }
}
