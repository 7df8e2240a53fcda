use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::RunMode;
use crate::domain::{Grid, RuleSet};
use crate::error::EngineError;

/// Owned copy of everything a renderer needs for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    pub mode: RunMode,
    pub ticks: u64,
    /// Remaining tutorial ticks, `None` once the tutorial is over
    pub tutorial_ticks_remaining: Option<u64>,
    pub rules: RuleSet,
}

/// Capabilities the controller calls out to. Every hook defaults to a no-op,
/// so collaborators only implement what they observe.
pub trait Notifier {
    /// Called after every mutation of the board or the run state
    fn state_changed(&mut self, _snapshot: &Snapshot) {}

    fn tutorial_complete(&mut self, _ticks: u64) {}

    /// The board stopped changing between two generations
    fn pattern_stable(&mut self, _ticks: u64) {}

    fn rules_updated(&mut self, _rules: &RuleSet) {}

    fn pattern_placed(&mut self, _pattern: &str, _row: usize, _col: usize) {}

    fn placement_failed(&mut self, _error: &EngineError) {}
}

/// Notifier that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

/// Notification as a value
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    StateChanged { mode: RunMode, ticks: u64 },
    TutorialComplete { ticks: u64 },
    PatternStable { ticks: u64 },
    RulesUpdated(RuleSet),
    PatternPlaced { pattern: String, row: usize, col: usize },
    PlacementFailed(EngineError),
}

/// Notifier that queues events for the front-end to drain each frame.
/// Clones share the same queue.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<VecDeque<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all queued events, oldest first
    pub fn drain(&self) -> Vec<Event> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push_back(event);
    }
}

impl Notifier for EventLog {
    fn state_changed(&mut self, snapshot: &Snapshot) {
        self.push(Event::StateChanged {
            mode: snapshot.mode,
            ticks: snapshot.ticks,
        });
    }

    fn tutorial_complete(&mut self, ticks: u64) {
        self.push(Event::TutorialComplete { ticks });
    }

    fn pattern_stable(&mut self, ticks: u64) {
        self.push(Event::PatternStable { ticks });
    }

    fn rules_updated(&mut self, rules: &RuleSet) {
        self.push(Event::RulesUpdated(rules.clone()));
    }

    fn pattern_placed(&mut self, pattern: &str, row: usize, col: usize) {
        self.push(Event::PatternPlaced {
            pattern: pattern.to_string(),
            row,
            col,
        });
    }

    fn placement_failed(&mut self, error: &EngineError) {
        self.push(Event::PlacementFailed(error.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_shares_queue() {
        let log = EventLog::new();
        let mut sink = log.clone();

        sink.pattern_stable(7);
        sink.tutorial_complete(10);
        assert_eq!(log.len(), 2);

        assert_eq!(
            log.drain(),
            vec![
                Event::PatternStable { ticks: 7 },
                Event::TutorialComplete { ticks: 10 },
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_noop_accepts_everything() {
        let mut noop = NoopNotifier;
        noop.pattern_stable(1);
        noop.rules_updated(&RuleSet::default());
        noop.placement_failed(&EngineError::UnknownPattern("x".into()));
    }
}
