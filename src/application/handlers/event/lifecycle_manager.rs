//! EventLifecycleManager - Cross-store operations on an event.
//!
//! Deleting an event touches two stores that share no transaction. Both
//! deletions run concurrently and both outcomes are observed, so a failure
//! on one side can be reported together with what the other side already
//! removed. Nothing is rolled back.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::event::{EventError, InhouseProperties, RemovedRecords, ScheduledEvent};
use crate::domain::foundation::{EventId, MessageId};
use crate::ports::{ConfirmStore, EventStore};

/// Orchestrates deletion and message-id bookkeeping for events.
pub struct EventLifecycleManager {
    events: Arc<dyn EventStore>,
    confirms: Arc<dyn ConfirmStore>,
}

impl EventLifecycleManager {
    pub fn new(events: Arc<dyn EventStore>, confirms: Arc<dyn ConfirmStore>) -> Self {
        Self { events, confirms }
    }

    /// Loads an event.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the store has no such event
    /// - `Store` on read failure
    pub async fn find_event(&self, event_id: &EventId) -> Result<ScheduledEvent, EventError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| EventError::not_found(*event_id))
    }

    /// Deletes the event record and all of its confirm records.
    ///
    /// # Errors
    ///
    /// - `PartialDeletion` if exactly one of the two deletions failed; the
    ///   other one has taken effect
    /// - `Store` with the event store's error if both failed
    pub async fn delete_event(&self, event_id: &EventId) -> Result<(), EventError> {
        let (event_result, confirms_result) = futures::join!(
            self.events.delete_event(event_id),
            self.confirms.delete_by_event(event_id),
        );

        match (event_result, confirms_result) {
            (Ok(()), Ok(())) => {
                info!(event_id = %event_id, "event deleted");
                Ok(())
            }
            (Ok(()), Err(cause)) => {
                warn!(
                    event_id = %event_id,
                    error = %cause,
                    "confirm records survived event deletion"
                );
                Err(EventError::PartialDeletion {
                    event_id: *event_id,
                    removed: RemovedRecords::EventOnly,
                    cause,
                })
            }
            (Err(cause), Ok(())) => {
                warn!(
                    event_id = %event_id,
                    error = %cause,
                    "event record survived confirm deletion"
                );
                Err(EventError::PartialDeletion {
                    event_id: *event_id,
                    removed: RemovedRecords::ConfirmsOnly,
                    cause,
                })
            }
            (Err(event_err), Err(confirms_err)) => {
                warn!(
                    event_id = %event_id,
                    event_error = %event_err,
                    confirms_error = %confirms_err,
                    "event deletion failed"
                );
                Err(EventError::Store(event_err))
            }
        }
    }

    /// Returns the id of the summary message posted for the event.
    pub async fn get_message_id(
        &self,
        event_id: &EventId,
    ) -> Result<Option<MessageId>, EventError> {
        Ok(self.events.get_summary_message_id(event_id).await?)
    }

    /// Records the id of the summary message posted for the event.
    pub async fn set_message_id(
        &self,
        event_id: &EventId,
        message_id: MessageId,
    ) -> Result<(), EventError> {
        debug!(event_id = %event_id, message_id = %message_id, "recording summary message");
        self.events
            .update_summary_message_id(event_id, &message_id)
            .await?;
        Ok(())
    }

    pub async fn get_inhouse_properties(
        &self,
        event_id: &EventId,
    ) -> Result<Option<InhouseProperties>, EventError> {
        Ok(self.events.get_inhouse_properties(event_id).await?)
    }
}
