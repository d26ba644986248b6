//! LobbyStatusManager - Reads and writes the opaque lobby status.

use std::sync::Arc;

use tracing::debug;

use crate::domain::event::EventError;
use crate::domain::foundation::{EventId, LobbyStatus};
use crate::ports::EventStore;

/// Pass-through to the event store's lobby status.
pub struct LobbyStatusManager {
    events: Arc<dyn EventStore>,
}

impl LobbyStatusManager {
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }

    pub async fn get_lobby_status(&self, event_id: &EventId) -> Result<LobbyStatus, EventError> {
        Ok(self.events.get_lobby_status(event_id).await?)
    }

    pub async fn set_lobby_status(
        &self,
        event_id: &EventId,
        status: LobbyStatus,
    ) -> Result<(), EventError> {
        debug!(event_id = %event_id, lobby_status = %status, "updating lobby status");
        self.events.update_lobby_status(event_id, &status).await?;
        Ok(())
    }
}
