//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the meetup domain.

mod ids;
mod timestamp;
mod event_status;
mod lobby_status;
mod errors;

pub use ids::{EventId, MessageId, UserId};
pub use timestamp::Timestamp;
pub use event_status::EventStatus;
pub use lobby_status::LobbyStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
