//! Confirm store port.
//!
//! Defines the contract for the collaborator that persists per-user
//! attendance responses.

use async_trait::async_trait;

use crate::domain::confirmation::ConfirmRecord;
use crate::domain::foundation::{DomainError, EventId};

/// Repository port for attendance responses.
#[async_trait]
pub trait ConfirmStore: Send + Sync {
    /// Find every response recorded for an event.
    ///
    /// Returns an empty list if nobody has responded.
    async fn find_by_event(&self, event_id: &EventId) -> Result<Vec<ConfirmRecord>, DomainError>;

    /// Delete every response recorded for an event.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn delete_by_event(&self, event_id: &EventId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ConfirmStore) {}
    }
}
