//! A single attendance response.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, UserId};

/// A user's recorded attendance decision for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRecord {
    pub event_id: EventId,
    pub user_id: UserId,
    pub attends: bool,
}

impl ConfirmRecord {
    pub fn new(event_id: EventId, user_id: UserId, attends: bool) -> Self {
        Self {
            event_id,
            user_id,
            attends,
        }
    }

    pub fn attending(event_id: EventId, user_id: UserId) -> Self {
        Self::new(event_id, user_id, true)
    }

    pub fn declining(event_id: EventId, user_id: UserId) -> Self {
        Self::new(event_id, user_id, false)
    }

    pub fn response(&self) -> Response {
        if self.attends {
            Response::Confirmed
        } else {
            Response::Rejected
        }
    }
}

/// Where a user stands for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Confirmed,
    Rejected,
    Waiting,
}
