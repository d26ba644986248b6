//! Event domain module.
//!
//! The scheduled event aggregate, its time-derived status and the errors
//! raised by the services that operate on events.

mod aggregate;
mod errors;
mod properties;
mod status;

pub use aggregate::{AttendanceLimit, Schedule, ScheduledEvent};
pub use errors::{EventError, RemovedRecords};
pub use properties::InhouseProperties;
pub use status::{derive_status, happening_window, next_transition, HappeningMargin};
