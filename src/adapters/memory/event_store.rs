//! In-memory event store.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{poisoned, FailureInjector, StoreOperation};
use crate::domain::event::{InhouseProperties, ScheduledEvent};
use crate::domain::foundation::{
    DomainError, ErrorCode, EventId, LobbyStatus, MessageId, UserId,
};
use crate::ports::EventStore;

#[derive(Debug, Clone)]
struct StoredEvent {
    event: ScheduledEvent,
    lobby_status: LobbyStatus,
    summary_message_id: Option<MessageId>,
    waiting_list: Option<HashSet<UserId>>,
    inhouse_properties: Option<InhouseProperties>,
}

/// Event store backed by a `HashMap`.
///
/// Reads of optional data for unknown events return `None`; writes to
/// unknown events fail with `EventNotFound`. Deleting an unknown event is a
/// no-op.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<EventId, StoredEvent>>,
    failures: FailureInjector,
}

impl InMemoryEventStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    /// Stores an event with its initial lobby status.
    pub fn insert(
        &self,
        event: ScheduledEvent,
        lobby_status: LobbyStatus,
    ) -> Result<(), DomainError> {
        let mut events = self.events.write().map_err(|_| poisoned())?;
        events.insert(
            *event.id(),
            StoredEvent {
                event,
                lobby_status,
                summary_message_id: None,
                waiting_list: None,
                inhouse_properties: None,
            },
        );
        Ok(())
    }

    /// Replaces the waiting list of a stored event.
    pub fn set_waiting_list<I>(&self, id: &EventId, users: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = UserId>,
    {
        self.modify(id, |stored| {
            stored.waiting_list = Some(users.into_iter().collect());
        })
    }

    /// Replaces the in-house properties of a stored event.
    pub fn set_inhouse_properties(
        &self,
        id: &EventId,
        properties: InhouseProperties,
    ) -> Result<(), DomainError> {
        self.modify(id, |stored| {
            stored.inhouse_properties = Some(properties);
        })
    }

    // === Failure injection ===

    /// Makes every subsequent call of `op` fail with a database error.
    pub fn fail_on(&self, op: StoreOperation) {
        self.failures.fail_on(op);
    }

    /// Undoes `fail_on`.
    pub fn recover(&self, op: StoreOperation) {
        self.failures.recover(op);
    }

    // === Test Helpers ===

    /// Returns true if the event record exists.
    pub fn contains(&self, id: &EventId) -> bool {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn modify<F>(&self, id: &EventId, f: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut StoredEvent),
    {
        let mut events = self.events.write().map_err(|_| poisoned())?;
        let stored = events.get_mut(id).ok_or_else(|| not_found(id))?;
        f(stored);
        Ok(())
    }

    fn read<T, F>(&self, id: &EventId, f: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce(&StoredEvent) -> Option<T>,
    {
        let events = self.events.read().map_err(|_| poisoned())?;
        Ok(events.get(id).and_then(f))
    }
}

fn not_found(id: &EventId) -> DomainError {
    DomainError::new(ErrorCode::EventNotFound, format!("Event not found: {}", id))
        .with_detail("event_id", id.to_string())
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<ScheduledEvent>, DomainError> {
        self.failures.check(StoreOperation::FindEvent)?;
        self.read(id, |stored| Some(stored.event.clone()))
    }

    async fn get_summary_message_id(&self, id: &EventId) -> Result<Option<MessageId>, DomainError> {
        self.failures.check(StoreOperation::GetSummaryMessageId)?;
        self.read(id, |stored| stored.summary_message_id.clone())
    }

    async fn update_summary_message_id(
        &self,
        id: &EventId,
        message_id: &MessageId,
    ) -> Result<(), DomainError> {
        self.failures.check(StoreOperation::UpdateSummaryMessageId)?;
        self.modify(id, |stored| {
            stored.summary_message_id = Some(message_id.clone());
        })
    }

    async fn get_lobby_status(&self, id: &EventId) -> Result<LobbyStatus, DomainError> {
        self.failures.check(StoreOperation::GetLobbyStatus)?;
        self.read(id, |stored| Some(stored.lobby_status.clone()))?
            .ok_or_else(|| not_found(id))
    }

    async fn update_lobby_status(
        &self,
        id: &EventId,
        status: &LobbyStatus,
    ) -> Result<(), DomainError> {
        self.failures.check(StoreOperation::UpdateLobbyStatus)?;
        self.modify(id, |stored| {
            stored.lobby_status = status.clone();
        })
    }

    async fn get_waiting_list(&self, id: &EventId) -> Result<Option<HashSet<UserId>>, DomainError> {
        self.failures.check(StoreOperation::GetWaitingList)?;
        self.read(id, |stored| stored.waiting_list.clone())
    }

    async fn get_inhouse_properties(
        &self,
        id: &EventId,
    ) -> Result<Option<InhouseProperties>, DomainError> {
        self.failures.check(StoreOperation::GetInhouseProperties)?;
        self.read(id, |stored| stored.inhouse_properties.clone())
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), DomainError> {
        self.failures.check(StoreOperation::DeleteEvent)?;
        let mut events = self.events.write().map_err(|_| poisoned())?;
        events.remove(id);
        Ok(())
    }
}
