//! Integration tests for the event lifecycle services.
//!
//! These tests wire the services to the in-memory stores and walk through:
//! 1. Status derivation for pending, happening, expired and instant events
//! 2. Confirmation views merged from both stores
//! 3. Event deletion, including the partial state left by a failed side
//! 4. Summary assembly from configuration-driven wiring

use std::sync::Arc;

use chrono::Duration;
use chrono_tz::Tz;

use meetup_core::adapters::{FixedClock, InMemoryConfirmStore, InMemoryEventStore, StoreOperation};
use meetup_core::application::{
    ConfirmAggregator, EventLifecycleManager, EventSummaryHandler, LobbyStatusManager,
    StatusDeriver,
};
use meetup_core::config::LifecycleConfig;
use meetup_core::domain::confirmation::ConfirmRecord;
use meetup_core::domain::event::{
    AttendanceLimit, EventError, HappeningMargin, RemovedRecords, ScheduledEvent,
};
use meetup_core::domain::foundation::{
    ErrorCode, EventId, EventStatus, LobbyStatus, MessageId, Timestamp, UserId,
};
use meetup_core::ports::{ConfirmStore, EventStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct World {
    clock: Arc<FixedClock>,
    events: Arc<InMemoryEventStore>,
    confirms: Arc<InMemoryConfirmStore>,
}

impl World {
    fn new() -> Self {
        Self {
            clock: Arc::new(FixedClock::new(now())),
            events: Arc::new(InMemoryEventStore::new()),
            confirms: Arc::new(InMemoryConfirmStore::new()),
        }
    }

    fn deriver(&self, margin: HappeningMargin) -> StatusDeriver {
        StatusDeriver::new(self.clock.clone(), margin)
    }

    fn aggregator(&self) -> ConfirmAggregator {
        ConfirmAggregator::new(self.events.clone(), self.confirms.clone())
    }

    fn lifecycle(&self) -> EventLifecycleManager {
        EventLifecycleManager::new(self.events.clone(), self.confirms.clone())
    }

    fn store(&self, event: ScheduledEvent) -> EventId {
        let id = *event.id();
        self.events.insert(event, LobbyStatus::new("closed")).unwrap();
        id
    }

    fn respond(&self, id: EventId, name: &str, attends: bool) {
        self.confirms
            .record(ConfirmRecord::new(id, user(name), attends))
            .unwrap();
    }
}

fn now() -> Timestamp {
    // 2024-06-01T18:00:00Z
    Timestamp::from_unix_secs(1_717_264_800).unwrap()
}

fn user(name: &str) -> UserId {
    UserId::new(name).unwrap()
}

fn ten_minutes() -> HappeningMargin {
    HappeningMargin::new(Duration::minutes(10)).unwrap()
}

fn scheduled(at: Timestamp, limit: u32) -> ScheduledEvent {
    ScheduledEvent::scheduled(EventId::new(), "Meetup", at, Tz::UTC, AttendanceLimit::new(limit))
        .unwrap()
}

// =============================================================================
// Status derivation
// =============================================================================

#[test]
fn event_one_hour_ahead_is_pending() {
    let world = World::new();
    let event = scheduled(now().plus(Duration::hours(1)), 10);

    assert_eq!(world.deriver(ten_minutes()).status_of(&event), EventStatus::Pending);
}

#[test]
fn event_started_five_minutes_ago_is_happening() {
    let world = World::new();
    let event = scheduled(now().minus(Duration::minutes(5)), 10);

    assert_eq!(world.deriver(ten_minutes()).status_of(&event), EventStatus::Happening);
}

#[test]
fn event_started_an_hour_ago_is_expired() {
    let world = World::new();
    let event = scheduled(now().minus(Duration::hours(1)), 10);

    assert_eq!(world.deriver(ten_minutes()).status_of(&event), EventStatus::Expired);
}

#[test]
fn instant_event_is_expired_at_any_time() {
    let world = World::new();
    let deriver = world.deriver(ten_minutes());
    let event =
        ScheduledEvent::instant(EventId::new(), "Now!", AttendanceLimit::UNLIMITED).unwrap();

    for offset in [-600, 0, 600] {
        world.clock.set(now().add_minutes(offset));
        assert_eq!(deriver.status_of(&event), EventStatus::Expired);
    }
}

#[test]
fn stored_fields_with_mismatched_instant_flag_fail_fast() {
    let result = ScheduledEvent::from_parts(
        EventId::new(),
        "Broken row",
        None,
        Tz::UTC,
        AttendanceLimit::UNLIMITED,
        false,
    );
    assert!(result.is_err());
}

#[test]
fn configured_timezone_and_margin_drive_status() {
    let world = World::new();
    let config = LifecycleConfig {
        default_timezone: "America/New_York".to_string(),
        happening_margin_secs: 900,
    };
    config.validate().unwrap();

    // 14:00 in New York is 18:00 UTC on 2024-06-01.
    let local = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let event = ScheduledEvent::scheduled_at_local(
        EventId::new(),
        "Rooftop",
        local,
        config.timezone().unwrap(),
        AttendanceLimit::new(20),
    )
    .unwrap();
    assert_eq!(event.scheduled_time(), Some(now()));

    let deriver = world.deriver(config.happening_margin());
    world.clock.advance(Duration::minutes(15));
    assert_eq!(deriver.status_of(&event), EventStatus::Happening);
    world.clock.advance(Duration::seconds(1));
    assert_eq!(deriver.status_of(&event), EventStatus::Expired);
}

// =============================================================================
// Confirmation views
// =============================================================================

#[tokio::test]
async fn confirmation_view_partitions_responses() {
    let world = World::new();
    let id = world.store(scheduled(now().plus(Duration::hours(2)), 10));
    world.respond(id, "ann", true);
    world.respond(id, "bob", true);
    world.respond(id, "cat", true);
    world.respond(id, "dan", false);
    world.events.set_waiting_list(&id, [user("eve"), user("fay")]).unwrap();

    let view = world.aggregator().get_confirmation_view(&id).await.unwrap();

    assert_eq!(view.confirmed().len(), 3);
    assert_eq!(view.rejected().len(), 1);
    assert_eq!(view.waiting().len(), 2);
    assert!(view.confirmed().is_disjoint(view.rejected()));
    assert!(view.confirmed().is_disjoint(view.waiting()));
    assert!(view.rejected().is_disjoint(view.waiting()));
}

#[tokio::test]
async fn confirmation_view_without_any_data_is_empty() {
    let world = World::new();
    let id = world.store(scheduled(now().plus(Duration::hours(2)), 10));

    let view = world.aggregator().get_confirmation_view(&id).await.unwrap();

    assert!(view.confirmed().is_empty());
    assert!(view.rejected().is_empty());
    assert!(view.waiting().is_empty());
}

// =============================================================================
// Deletion
// =============================================================================

#[tokio::test]
async fn failed_confirm_delete_orphans_confirm_records() {
    let world = World::new();
    let id = world.store(scheduled(now().plus(Duration::hours(1)), 10));
    world.respond(id, "ann", true);
    world.respond(id, "bob", false);
    world.confirms.fail_on(StoreOperation::DeleteConfirms);

    let err = world.lifecycle().delete_event(&id).await.unwrap_err();

    match &err {
        EventError::PartialDeletion {
            event_id,
            removed,
            cause,
        } => {
            assert_eq!(event_id, &id);
            assert_eq!(*removed, RemovedRecords::EventOnly);
            assert_eq!(cause.code, ErrorCode::DatabaseError);
        }
        other => panic!("expected partial deletion, got {:?}", other),
    }
    assert_eq!(err.code(), ErrorCode::PartialDeletion);

    // The event record is already gone...
    assert!(world.events.find_by_id(&id).await.unwrap().is_none());
    // ...while its confirm records are still there.
    world.confirms.recover(StoreOperation::DeleteConfirms);
    let orphaned = world.confirms.find_by_event(&id).await.unwrap();
    assert_eq!(orphaned.len(), 2);

    // Retrying completes the cleanup.
    world.lifecycle().delete_event(&id).await.unwrap();
    assert!(world.confirms.find_by_event(&id).await.unwrap().is_empty());
}

#[tokio::test]
async fn successful_delete_removes_everything() {
    let world = World::new();
    let id = world.store(scheduled(now().plus(Duration::hours(1)), 10));
    world.respond(id, "ann", true);

    world.lifecycle().delete_event(&id).await.unwrap();

    assert!(world.events.find_by_id(&id).await.unwrap().is_none());
    assert!(world.confirms.find_by_event(&id).await.unwrap().is_empty());
}

// =============================================================================
// Bookkeeping and summary
// =============================================================================

#[tokio::test]
async fn lobby_and_message_id_round_trip() {
    let world = World::new();
    let id = world.store(scheduled(now().plus(Duration::hours(1)), 10));
    let lobby = LobbyStatusManager::new(world.events.clone());
    let lifecycle = world.lifecycle();

    lobby.set_lobby_status(&id, LobbyStatus::new("open")).await.unwrap();
    lifecycle
        .set_message_id(&id, MessageId::new("31337").unwrap())
        .await
        .unwrap();

    assert_eq!(lobby.get_lobby_status(&id).await.unwrap(), LobbyStatus::new("open"));
    assert_eq!(
        lifecycle.get_message_id(&id).await.unwrap(),
        Some(MessageId::new("31337").unwrap())
    );
}

#[tokio::test]
async fn summary_tracks_status_as_time_passes() {
    let world = World::new();
    let id = world.store(scheduled(now().plus(Duration::minutes(30)), 2));
    world.respond(id, "ann", true);
    world.respond(id, "bob", true);
    world.respond(id, "cat", true);

    let handler = EventSummaryHandler::new(
        world.events.clone(),
        world.confirms.clone(),
        world.deriver(ten_minutes()),
    );

    let summary = handler.summarize(&id).await.unwrap();
    assert_eq!(summary.status, EventStatus::Pending);
    assert_eq!(summary.seats_left, Some(0));

    world.clock.advance(Duration::minutes(35));
    let summary = handler.summarize(&id).await.unwrap();
    assert_eq!(summary.status, EventStatus::Happening);

    world.clock.advance(Duration::minutes(10));
    let summary = handler.summarize(&id).await.unwrap();
    assert_eq!(summary.status, EventStatus::Expired);
    assert_eq!(summary.next_transition, None);
}
