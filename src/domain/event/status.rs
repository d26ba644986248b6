//! Time-based status derivation.
//!
//! Pure domain service: given an event, the current instant and the
//! happening margin, decide whether the event is pending, happening or
//! expired. No I/O and no clock access here; callers pass `now` in.

use chrono::Duration;

use super::ScheduledEvent;
use crate::domain::foundation::{EventStatus, Timestamp, ValidationError};

/// Grace period after the scheduled instant during which an event still
/// counts as happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HappeningMargin(Duration);

impl HappeningMargin {
    /// Creates a margin from a duration.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the duration is negative
    pub fn new(duration: Duration) -> Result<Self, ValidationError> {
        if duration < Duration::zero() {
            return Err(ValidationError::out_of_range(
                "happening_margin",
                0,
                i64::MAX,
                duration.num_seconds(),
            ));
        }
        Ok(Self(duration))
    }

    /// Creates a margin from whole seconds.
    pub fn from_secs(secs: u32) -> Self {
        Self(Duration::seconds(i64::from(secs)))
    }

    pub fn zero() -> Self {
        Self(Duration::zero())
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

/// Derives the lifecycle status of `event` at `now`.
///
/// - instant events are always `Expired`
/// - `scheduled > now` is `Pending`
/// - `scheduled <= now <= scheduled + margin` is `Happening`
/// - anything later is `Expired`
pub fn derive_status(
    event: &ScheduledEvent,
    now: Timestamp,
    margin: HappeningMargin,
) -> EventStatus {
    let Some(scheduled) = event.scheduled_time() else {
        return EventStatus::Expired;
    };

    if scheduled.duration_since(&now) > Duration::zero() {
        return EventStatus::Pending;
    }

    if now <= scheduled.plus(margin.as_duration()) {
        EventStatus::Happening
    } else {
        EventStatus::Expired
    }
}

/// Returns the closed interval during which `event` is happening.
///
/// `None` for instant events, which never happen in this sense.
pub fn happening_window(
    event: &ScheduledEvent,
    margin: HappeningMargin,
) -> Option<(Timestamp, Timestamp)> {
    event
        .scheduled_time()
        .map(|start| (start, start.plus(margin.as_duration())))
}

/// Returns the instant at which the status derived at `now` stops holding.
///
/// `None` once the event is expired, and for a window that runs to the end of
/// the representable time range, where happening never stops.
pub fn next_transition(
    event: &ScheduledEvent,
    now: Timestamp,
    margin: HappeningMargin,
) -> Option<Timestamp> {
    let (start, end) = happening_window(event, margin)?;
    match derive_status(event, now, margin) {
        EventStatus::Pending => Some(start),
        // Expired begins strictly after the window's end.
        EventStatus::Happening => end.checked_plus(Duration::nanoseconds(1)),
        EventStatus::Expired => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::AttendanceLimit;
    use crate::domain::foundation::EventId;
    use chrono_tz::Tz;
    use proptest::prelude::*;

    fn base() -> Timestamp {
        // 2024-06-01T18:00:00Z
        Timestamp::from_unix_secs(1_717_264_800).unwrap()
    }

    fn scheduled_at(at: Timestamp) -> ScheduledEvent {
        ScheduledEvent::scheduled(EventId::new(), "Meetup", at, Tz::UTC, AttendanceLimit::new(10))
            .unwrap()
    }

    fn instant() -> ScheduledEvent {
        ScheduledEvent::instant(EventId::new(), "Ad hoc", AttendanceLimit::UNLIMITED).unwrap()
    }

    fn ten_minutes() -> HappeningMargin {
        HappeningMargin::from_secs(600)
    }

    #[test]
    fn future_event_is_pending() {
        let now = base();
        let event = scheduled_at(now.add_minutes(60));
        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Pending);
    }

    #[test]
    fn recently_started_event_is_happening() {
        let now = base();
        let event = scheduled_at(now.add_minutes(-5));
        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Happening);
    }

    #[test]
    fn long_past_event_is_expired() {
        let now = base();
        let event = scheduled_at(now.add_minutes(-60));
        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Expired);
    }

    #[test]
    fn instant_event_is_expired() {
        assert_eq!(derive_status(&instant(), base(), ten_minutes()), EventStatus::Expired);
    }

    #[test]
    fn scheduled_instant_itself_is_happening() {
        let now = base();
        let event = scheduled_at(now);
        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Happening);
    }

    #[test]
    fn end_of_margin_is_still_happening() {
        let now = base();
        let event = scheduled_at(now.add_minutes(-10));
        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Happening);
    }

    #[test]
    fn one_second_past_margin_is_expired() {
        let now = base();
        let event = scheduled_at(now.plus(Duration::seconds(-601)));
        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Expired);
    }

    #[test]
    fn zero_margin_happens_only_at_the_scheduled_instant() {
        let now = base();
        assert_eq!(
            derive_status(&scheduled_at(now), now, HappeningMargin::zero()),
            EventStatus::Happening
        );
        assert_eq!(
            derive_status(
                &scheduled_at(now.plus(Duration::seconds(-1))),
                now,
                HappeningMargin::zero()
            ),
            EventStatus::Expired
        );
    }

    #[test]
    fn negative_margin_is_rejected() {
        let result = HappeningMargin::new(Duration::minutes(-1));
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn window_spans_schedule_plus_margin() {
        let event = scheduled_at(base());
        let (start, end) = happening_window(&event, ten_minutes()).unwrap();
        assert_eq!(start, base());
        assert_eq!(end, base().add_minutes(10));
        assert_eq!(happening_window(&instant(), ten_minutes()), None);
    }

    #[test]
    fn next_transition_follows_the_lifecycle() {
        let event = scheduled_at(base());

        assert_eq!(
            next_transition(&event, base().add_minutes(-30), ten_minutes()),
            Some(base())
        );

        let after_happening =
            next_transition(&event, base().add_minutes(1), ten_minutes()).unwrap();
        assert_eq!(
            derive_status(&event, after_happening, ten_minutes()),
            EventStatus::Expired
        );

        assert_eq!(next_transition(&event, base().add_minutes(30), ten_minutes()), None);
        assert_eq!(next_transition(&instant(), base(), ten_minutes()), None);
    }

    #[test]
    fn happening_until_the_end_of_time_has_no_transition() {
        let last = Timestamp::from_datetime(chrono::DateTime::<chrono::Utc>::MAX_UTC);
        let event = scheduled_at(last.add_minutes(-5));
        let now = last.add_minutes(-1);

        assert_eq!(derive_status(&event, now, ten_minutes()), EventStatus::Happening);
        assert_eq!(next_transition(&event, now, ten_minutes()), None);
    }

    const DAY: i64 = 86_400;

    proptest! {
        #[test]
        fn instant_events_expire_for_any_now(
            offset in -DAY * 365..DAY * 365,
            margin in 0u32..86_400,
        ) {
            let now = base().plus(Duration::seconds(offset));
            prop_assert_eq!(
                derive_status(&instant(), now, HappeningMargin::from_secs(margin)),
                EventStatus::Expired
            );
        }

        #[test]
        fn future_events_are_pending(lead in 1i64..DAY * 365, margin in 0u32..86_400) {
            let now = base();
            let event = scheduled_at(now.plus(Duration::seconds(lead)));
            prop_assert_eq!(
                derive_status(&event, now, HappeningMargin::from_secs(margin)),
                EventStatus::Pending
            );
        }

        #[test]
        fn events_inside_margin_are_happening(
            margin in 0u32..86_400,
            elapsed_ratio in 0.0f64..=1.0,
        ) {
            let now = base();
            let elapsed = (f64::from(margin) * elapsed_ratio).floor() as i64;
            let event = scheduled_at(now.plus(Duration::seconds(-elapsed)));
            prop_assert_eq!(
                derive_status(&event, now, HappeningMargin::from_secs(margin)),
                EventStatus::Happening
            );
        }

        #[test]
        fn events_past_margin_are_expired(margin in 0u32..86_400, overshoot in 1i64..DAY * 365) {
            let now = base();
            let elapsed = i64::from(margin) + overshoot;
            let event = scheduled_at(now.plus(Duration::seconds(-elapsed)));
            prop_assert_eq!(
                derive_status(&event, now, HappeningMargin::from_secs(margin)),
                EventStatus::Expired
            );
        }
    }
}
