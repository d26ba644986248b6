//! Event-specific error types.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, EventId};

/// Which side of a two-store deletion actually went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovedRecords {
    /// The event record is gone; its confirm records are orphaned.
    EventOnly,
    /// The confirm records are gone; the event record still exists.
    ConfirmsOnly,
}

impl fmt::Display for RemovedRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RemovedRecords::EventOnly => "event record removed, confirm records kept",
            RemovedRecords::ConfirmsOnly => "confirm records removed, event record kept",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by the event application services.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// A store read or write failed. The store's error is kept verbatim.
    #[error(transparent)]
    Store(#[from] DomainError),

    /// One of the two deletions of `delete_event` failed after the other
    /// succeeded. Nothing was rolled back.
    #[error("Partial deletion of event {event_id} ({removed}): {cause}")]
    PartialDeletion {
        event_id: EventId,
        removed: RemovedRecords,
        cause: DomainError,
    },
}

impl EventError {
    pub fn not_found(id: EventId) -> Self {
        EventError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EventError::NotFound(_) => ErrorCode::EventNotFound,
            EventError::Store(err) => err.code,
            EventError::PartialDeletion { .. } => ErrorCode::PartialDeletion,
        }
    }

    /// Returns true if some state changed even though the operation failed.
    pub fn left_partial_state(&self) -> bool {
        matches!(self, EventError::PartialDeletion { .. })
    }
}
