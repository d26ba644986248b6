//! In-memory store adapters.
//!
//! Back the store ports with process-local maps. Used by the test suites and
//! for wiring the services without a database. Each store can be told to fail
//! a given operation, which is how partial-failure paths are exercised.

mod clock;
mod confirm_store;
mod event_store;

pub use clock::FixedClock;
pub use confirm_store::InMemoryConfirmStore;
pub use event_store::InMemoryEventStore;

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Store operations that can be made to fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    FindEvent,
    GetSummaryMessageId,
    UpdateSummaryMessageId,
    GetLobbyStatus,
    UpdateLobbyStatus,
    GetWaitingList,
    GetInhouseProperties,
    DeleteEvent,
    FindConfirms,
    DeleteConfirms,
}

impl StoreOperation {
    fn name(&self) -> &'static str {
        match self {
            StoreOperation::FindEvent => "find_event",
            StoreOperation::GetSummaryMessageId => "get_summary_message_id",
            StoreOperation::UpdateSummaryMessageId => "update_summary_message_id",
            StoreOperation::GetLobbyStatus => "get_lobby_status",
            StoreOperation::UpdateLobbyStatus => "update_lobby_status",
            StoreOperation::GetWaitingList => "get_waiting_list",
            StoreOperation::GetInhouseProperties => "get_inhouse_properties",
            StoreOperation::DeleteEvent => "delete_event",
            StoreOperation::FindConfirms => "find_confirms",
            StoreOperation::DeleteConfirms => "delete_confirms",
        }
    }
}

/// Set of operations a store should fail.
#[derive(Debug, Default)]
struct FailureInjector {
    failing: RwLock<HashSet<StoreOperation>>,
}

impl FailureInjector {
    fn fail_on(&self, op: StoreOperation) {
        self.failing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(op);
    }

    fn recover(&self, op: StoreOperation) {
        self.failing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&op);
    }

    fn check(&self, op: StoreOperation) -> Result<(), DomainError> {
        let failing = self.failing.read().unwrap_or_else(PoisonError::into_inner);
        if failing.contains(&op) {
            return Err(DomainError::database(format!("injected failure: {}", op.name()))
                .with_detail("operation", op.name()));
        }
        Ok(())
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "in-memory store lock poisoned")
}
