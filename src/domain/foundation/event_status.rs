//! EventStatus enum for the time-derived lifecycle of a scheduled event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a scheduled event.
///
/// Never stored; always derived from the schedule and the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Scheduled instant is still in the future.
    Pending,
    /// Scheduled instant has passed but the happening margin has not.
    Happening,
    /// Past the happening margin, or an instant event.
    Expired,
}

impl EventStatus {
    /// Returns true if the event has not expired yet.
    pub fn is_active(&self) -> bool {
        matches!(self, EventStatus::Pending | EventStatus::Happening)
    }

    /// Returns true once the event can no longer change status.
    pub fn is_over(&self) -> bool {
        matches!(self, EventStatus::Expired)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Pending => "pending",
            EventStatus::Happening => "happening",
            EventStatus::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}
