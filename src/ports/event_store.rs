//! Event store port.
//!
//! Defines the contract for the collaborator that persists events together
//! with their chat-platform bookkeeping: summary message ids, lobby status,
//! waiting lists and in-house properties.
//!
//! # Design
//!
//! - **Opaque values**: lobby status, message ids and in-house properties are
//!   stored and returned verbatim
//! - **Per-event serialization**: implementations are expected to serialize
//!   writes for the same event id; callers rely on it but do not enforce it

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::event::{InhouseProperties, ScheduledEvent};
use crate::domain::foundation::{DomainError, EventId, LobbyStatus, MessageId, UserId};

/// Repository port for events and their per-event bookkeeping.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Find an event by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<ScheduledEvent>, DomainError>;

    /// Get the id of the summary message posted for the event.
    ///
    /// Returns `None` if no summary has been posted yet.
    async fn get_summary_message_id(&self, id: &EventId) -> Result<Option<MessageId>, DomainError>;

    /// Record the id of the summary message posted for the event.
    async fn update_summary_message_id(
        &self,
        id: &EventId,
        message_id: &MessageId,
    ) -> Result<(), DomainError>;

    /// Get the current lobby status.
    async fn get_lobby_status(&self, id: &EventId) -> Result<LobbyStatus, DomainError>;

    /// Replace the lobby status.
    async fn update_lobby_status(
        &self,
        id: &EventId,
        status: &LobbyStatus,
    ) -> Result<(), DomainError>;

    /// Get the users that joined the event but have not responded yet.
    ///
    /// Returns `None` if the store keeps no waiting list for the event.
    async fn get_waiting_list(&self, id: &EventId) -> Result<Option<HashSet<UserId>>, DomainError>;

    /// Get the store-owned extra settings of the event.
    async fn get_inhouse_properties(
        &self,
        id: &EventId,
    ) -> Result<Option<InhouseProperties>, DomainError>;

    /// Delete the event record.
    ///
    /// Does not touch confirm records; see `ConfirmStore::delete_by_event`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn delete_event(&self, id: &EventId) -> Result<(), DomainError>;
}
