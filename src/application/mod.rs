mod controller;
mod mode;
mod notifier;
mod ticker;
mod viewport;

pub use controller::{Command, EngineState, PlacementRequest, RunController, SessionStats};
pub use mode::RunMode;
pub use notifier::{Event, EventLog, NoopNotifier, Notifier, Snapshot};
pub use ticker::Ticker;
pub use viewport::{MAX_GRID_SIDE, MIN_GRID_SIDE, Viewport};
