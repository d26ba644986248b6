//! In-memory confirm store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{poisoned, FailureInjector, StoreOperation};
use crate::domain::confirmation::ConfirmRecord;
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::ConfirmStore;

/// Confirm store keeping records per event in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryConfirmStore {
    records: RwLock<HashMap<EventId, Vec<ConfirmRecord>>>,
    failures: FailureInjector,
}

impl InMemoryConfirmStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a response, replacing an earlier one from the same user.
    pub fn record(&self, record: ConfirmRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let for_event = records.entry(record.event_id).or_default();
        for_event.retain(|existing| existing.user_id != record.user_id);
        for_event.push(record);
        Ok(())
    }

    /// Makes every subsequent call of `op` fail with a database error.
    pub fn fail_on(&self, op: StoreOperation) {
        self.failures.fail_on(op);
    }

    /// Undoes `fail_on`.
    pub fn recover(&self, op: StoreOperation) {
        self.failures.recover(op);
    }

    /// Number of records kept for an event.
    pub fn count_for(&self, event_id: &EventId) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl ConfirmStore for InMemoryConfirmStore {
    async fn find_by_event(&self, event_id: &EventId) -> Result<Vec<ConfirmRecord>, DomainError> {
        self.failures.check(StoreOperation::FindConfirms)?;
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(event_id).cloned().unwrap_or_default())
    }

    async fn delete_by_event(&self, event_id: &EventId) -> Result<(), DomainError> {
        self.failures.check(StoreOperation::DeleteConfirms)?;
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.remove(event_id);
        Ok(())
    }
}
