//! ScheduledEvent aggregate.
//!
//! An event is either anchored to an instant in time (`Schedule::Scheduled`)
//! or created ad hoc without a forward schedule (`Schedule::Instant`). The
//! "scheduled time is present iff the event is not instant" rule is carried
//! by the type, so a loaded event can never violate it.
//!
//! Events are read-only here. Creation belongs to the calling service; this
//! crate only reconstitutes them from stored data.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp, ValidationError};

/// When an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    /// Anchored to an instant; `timezone` is kept for display.
    Scheduled { at: Timestamp, timezone: Tz },
    /// Created on the spot with no forward schedule.
    Instant,
}

/// Maximum number of attendees. Zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceLimit(u32);

impl AttendanceLimit {
    pub const UNLIMITED: AttendanceLimit = AttendanceLimit(0);

    pub fn new(limit: u32) -> Self {
        Self(limit)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_unlimited(&self) -> bool {
        self.0 == 0
    }

    /// Seats still free given the number of confirmed attendees.
    ///
    /// `None` when unlimited; saturates at zero when overbooked.
    pub fn seats_left(&self, confirmed: usize) -> Option<u32> {
        if self.is_unlimited() {
            return None;
        }
        let confirmed = u32::try_from(confirmed).unwrap_or(u32::MAX);
        Some(self.0.saturating_sub(confirmed))
    }

    /// Returns true if one more attendee fits.
    pub fn has_room_for(&self, confirmed: usize) -> bool {
        self.seats_left(confirmed).map_or(true, |left| left > 0)
    }
}

/// A named, time-anchored (or instant) social event with a capacity.
///
/// # Invariants
///
/// - `name` is non-empty after trimming
/// - an instant event has no scheduled time, a scheduled one always has one
///
/// Deserialization goes through the same checks as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEvent")]
pub struct ScheduledEvent {
    id: EventId,
    name: String,
    schedule: Schedule,
    attendance_limit: AttendanceLimit,
}

/// Unchecked wire shape of a `ScheduledEvent`.
#[derive(Deserialize)]
struct StoredEvent {
    id: EventId,
    name: String,
    schedule: Schedule,
    attendance_limit: AttendanceLimit,
}

impl TryFrom<StoredEvent> for ScheduledEvent {
    type Error = ValidationError;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        Self::build(stored.id, stored.name, stored.schedule, stored.attendance_limit)
    }
}

impl ScheduledEvent {
    /// Creates an event anchored to the given instant.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn scheduled(
        id: EventId,
        name: impl Into<String>,
        at: Timestamp,
        timezone: Tz,
        attendance_limit: AttendanceLimit,
    ) -> Result<Self, ValidationError> {
        Self::build(id, name.into(), Schedule::Scheduled { at, timezone }, attendance_limit)
    }

    /// Creates an instant event.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn instant(
        id: EventId,
        name: impl Into<String>,
        attendance_limit: AttendanceLimit,
    ) -> Result<Self, ValidationError> {
        Self::build(id, name.into(), Schedule::Instant, attendance_limit)
    }

    /// Creates an event from a wall-clock time in `timezone`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the local time does not exist (DST gap) or is
    ///   ambiguous (DST fold) in `timezone`
    pub fn scheduled_at_local(
        id: EventId,
        name: impl Into<String>,
        local: NaiveDateTime,
        timezone: Tz,
        attendance_limit: AttendanceLimit,
    ) -> Result<Self, ValidationError> {
        let at = match timezone.from_local_datetime(&local) {
            LocalResult::Single(dt) => Timestamp::from_zoned(&dt),
            LocalResult::Ambiguous(_, _) => {
                return Err(ValidationError::invalid_format(
                    "scheduled_time",
                    format!("{} is ambiguous in {}", local, timezone),
                ))
            }
            LocalResult::None => {
                return Err(ValidationError::invalid_format(
                    "scheduled_time",
                    format!("{} does not exist in {}", local, timezone),
                ))
            }
        };
        Self::scheduled(id, name, at, timezone, attendance_limit)
    }

    /// Reconstitutes an event from loosely typed stored fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if `scheduled_time` is present on an instant event
    ///   or missing on a scheduled one
    pub fn from_parts(
        id: EventId,
        name: impl Into<String>,
        scheduled_time: Option<Timestamp>,
        timezone: Tz,
        attendance_limit: AttendanceLimit,
        is_instant: bool,
    ) -> Result<Self, ValidationError> {
        let schedule = match (scheduled_time, is_instant) {
            (Some(at), false) => Schedule::Scheduled { at, timezone },
            (None, true) => Schedule::Instant,
            (Some(_), true) => {
                return Err(ValidationError::invalid_format(
                    "scheduled_time",
                    "instant event must not carry a scheduled time",
                ))
            }
            (None, false) => {
                return Err(ValidationError::invalid_format(
                    "scheduled_time",
                    "scheduled event is missing its scheduled time",
                ))
            }
        };
        Self::build(id, name.into(), schedule, attendance_limit)
    }

    fn build(
        id: EventId,
        name: String,
        schedule: Schedule,
        attendance_limit: AttendanceLimit,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            schedule,
            attendance_limit,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn attendance_limit(&self) -> AttendanceLimit {
        self.attendance_limit
    }

    pub fn is_instant(&self) -> bool {
        matches!(self.schedule, Schedule::Instant)
    }

    /// Returns the scheduled instant, `None` for instant events.
    pub fn scheduled_time(&self) -> Option<Timestamp> {
        match self.schedule {
            Schedule::Scheduled { at, .. } => Some(at),
            Schedule::Instant => None,
        }
    }

    /// Returns the scheduled instant in the timezone it was scheduled in.
    pub fn local_scheduled_time(&self) -> Option<DateTime<Tz>> {
        match self.schedule {
            Schedule::Scheduled { at, timezone } => Some(at.in_timezone(timezone)),
            Schedule::Instant => None,
        }
    }
}
