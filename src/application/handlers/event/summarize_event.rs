//! EventSummaryHandler - Query handler for the data behind an event's
//! summary message.

use std::sync::Arc;

use serde::Serialize;

use super::{ConfirmAggregator, StatusDeriver};
use crate::domain::confirmation::ConfirmationView;
use crate::domain::event::{EventError, ScheduledEvent};
use crate::domain::foundation::{EventId, EventStatus, LobbyStatus, MessageId, Timestamp};
use crate::ports::{ConfirmStore, EventStore};

/// Everything needed to render an event's summary message.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub event: ScheduledEvent,
    pub status: EventStatus,
    pub lobby_status: LobbyStatus,
    pub confirmations: ConfirmationView,
    pub summary_message_id: Option<MessageId>,
    /// `None` when attendance is unlimited.
    pub seats_left: Option<u32>,
    pub next_transition: Option<Timestamp>,
}

/// Handler assembling an `EventSummary`.
pub struct EventSummaryHandler {
    events: Arc<dyn EventStore>,
    aggregator: ConfirmAggregator,
    deriver: StatusDeriver,
}

impl EventSummaryHandler {
    pub fn new(
        events: Arc<dyn EventStore>,
        confirms: Arc<dyn ConfirmStore>,
        deriver: StatusDeriver,
    ) -> Self {
        Self {
            aggregator: ConfirmAggregator::new(events.clone(), confirms),
            events,
            deriver,
        }
    }

    /// Loads the event, then reads lobby status, confirmations and message
    /// id concurrently.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the event does not exist
    /// - the first failing read otherwise
    pub async fn summarize(&self, event_id: &EventId) -> Result<EventSummary, EventError> {
        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| EventError::not_found(*event_id))?;

        let (lobby_status, confirmations, summary_message_id) = futures::try_join!(
            async { self.events.get_lobby_status(event_id).await.map_err(EventError::from) },
            self.aggregator.get_confirmation_view(event_id),
            async { self.events.get_summary_message_id(event_id).await.map_err(EventError::from) },
        )?;

        let now = self.deriver.now();
        let status = self.deriver.status_at(&event, now);
        let next_transition = self.deriver.next_transition_at(&event, now);
        let seats_left = event
            .attendance_limit()
            .seats_left(confirmations.confirmed().len());

        Ok(EventSummary {
            event,
            status,
            lobby_status,
            confirmations,
            summary_message_id,
            seats_left,
            next_transition,
        })
    }
}
