// State management module.
// Owns the shift tracker, its clock and ticker, the task prompt, and the status line.

pub mod clock;
pub mod status;
pub mod task;
pub mod ticker;
pub mod tracker;

pub use clock::{Clock, SystemClock};
pub use status::{StatusLevel, StatusMessage};
pub use task::{Task, TaskSelector};
pub use ticker::Ticker;
pub use tracker::{Phase, ShiftRecord, ShiftTracker};
