mod target;
mod tracker;

pub use target::Target;
pub use tracker::{ProgressTracker, TrackerEvent, TrackerSignal, HIT_TOLERANCE_PX};
