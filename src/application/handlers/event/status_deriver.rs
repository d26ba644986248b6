//! StatusDeriver - Derives event status from the injected clock.

use std::sync::Arc;

use crate::domain::event::{
    derive_status, happening_window, next_transition, HappeningMargin, ScheduledEvent,
};
use crate::domain::foundation::{EventStatus, Timestamp};
use crate::ports::Clock;

/// Binds the pure status derivation to a clock and a configured margin.
///
/// Never suspends and never fails.
#[derive(Clone)]
pub struct StatusDeriver {
    clock: Arc<dyn Clock>,
    margin: HappeningMargin,
}

impl StatusDeriver {
    pub fn new(clock: Arc<dyn Clock>, margin: HappeningMargin) -> Self {
        Self { clock, margin }
    }

    pub fn margin(&self) -> HappeningMargin {
        self.margin
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Status of `event` right now.
    pub fn status_of(&self, event: &ScheduledEvent) -> EventStatus {
        self.status_at(event, self.clock.now())
    }

    /// Status of `event` at an arbitrary instant.
    pub fn status_at(&self, event: &ScheduledEvent, now: Timestamp) -> EventStatus {
        derive_status(event, now, self.margin)
    }

    /// Interval during which `event` counts as happening.
    pub fn happening_window(&self, event: &ScheduledEvent) -> Option<(Timestamp, Timestamp)> {
        happening_window(event, self.margin)
    }

    /// When the current status of `event` stops holding.
    pub fn next_transition(&self, event: &ScheduledEvent) -> Option<Timestamp> {
        self.next_transition_at(event, self.clock.now())
    }

    /// When the status of `event` derived at `now` stops holding.
    pub fn next_transition_at(&self, event: &ScheduledEvent, now: Timestamp) -> Option<Timestamp> {
        next_transition(event, now, self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::domain::event::AttendanceLimit;
    use crate::domain::foundation::EventId;
    use chrono::Duration;
    use chrono_tz::Tz;

    fn start() -> Timestamp {
        Timestamp::from_unix_secs(1_717_264_800).unwrap()
    }

    fn event_at(at: Timestamp) -> ScheduledEvent {
        ScheduledEvent::scheduled(EventId::new(), "Meetup", at, Tz::UTC, AttendanceLimit::new(10))
            .unwrap()
    }

    #[test]
    fn follows_the_clock_through_the_lifecycle() {
        let clock = Arc::new(FixedClock::new(start()));
        let deriver = StatusDeriver::new(clock.clone(), HappeningMargin::from_secs(600));
        let event = event_at(start().add_minutes(30));

        assert_eq!(deriver.status_of(&event), EventStatus::Pending);

        clock.advance(Duration::minutes(35));
        assert_eq!(deriver.status_of(&event), EventStatus::Happening);

        clock.advance(Duration::minutes(10));
        assert_eq!(deriver.status_of(&event), EventStatus::Expired);
    }

    #[test]
    fn status_at_ignores_the_clock() {
        let clock = Arc::new(FixedClock::new(start()));
        let deriver = StatusDeriver::new(clock, HappeningMargin::from_secs(600));
        let event = event_at(start());

        assert_eq!(
            deriver.status_at(&event, start().add_minutes(-1)),
            EventStatus::Pending
        );
    }

    #[test]
    fn next_transition_uses_current_time() {
        let clock = Arc::new(FixedClock::new(start()));
        let deriver = StatusDeriver::new(clock, HappeningMargin::from_secs(600));
        let event = event_at(start().add_minutes(30));

        assert_eq!(deriver.next_transition(&event), Some(start().add_minutes(30)));
        assert_eq!(
            deriver.happening_window(&event),
            Some((start().add_minutes(30), start().add_minutes(40)))
        );
    }

    #[test]
    fn next_transition_at_ignores_the_clock() {
        let clock = Arc::new(FixedClock::new(start()));
        let deriver = StatusDeriver::new(clock, HappeningMargin::from_secs(600));
        let event = event_at(start().add_minutes(30));

        let during = start().add_minutes(35);
        let expires_at = deriver.next_transition_at(&event, during).unwrap();
        assert_eq!(deriver.status_at(&event, expires_at), EventStatus::Expired);
        assert_eq!(deriver.next_transition_at(&event, start().add_minutes(50)), None);
    }
}
