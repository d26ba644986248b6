//! ConfirmAggregator - Builds the confirmed / rejected / waiting view.

use std::sync::Arc;

use tracing::warn;

use crate::domain::confirmation::ConfirmationView;
use crate::domain::event::EventError;
use crate::domain::foundation::EventId;
use crate::ports::{ConfirmStore, EventStore};

/// Joins confirm records and the waiting list of an event.
pub struct ConfirmAggregator {
    events: Arc<dyn EventStore>,
    confirms: Arc<dyn ConfirmStore>,
}

impl ConfirmAggregator {
    pub fn new(events: Arc<dyn EventStore>, confirms: Arc<dyn ConfirmStore>) -> Self {
        Self { events, confirms }
    }

    /// Reads both stores concurrently and partitions the result.
    ///
    /// The first failing read aborts the whole call; no partial view is
    /// returned.
    pub async fn get_confirmation_view(
        &self,
        event_id: &EventId,
    ) -> Result<ConfirmationView, EventError> {
        let (records, waiting_list) = futures::try_join!(
            self.confirms.find_by_event(event_id),
            self.events.get_waiting_list(event_id),
        )
        .map_err(|err| {
            warn!(event_id = %event_id, error = %err, "failed to read confirmations");
            err
        })?;

        Ok(ConfirmationView::build(records, waiting_list))
    }
}
