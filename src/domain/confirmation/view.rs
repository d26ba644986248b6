//! Partitioned view of the responses to an event.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ConfirmRecord, Response};
use crate::domain::foundation::UserId;

/// Confirmed, rejected and waiting users of one event.
///
/// # Invariants
///
/// - the three sets are pairwise disjoint
/// - a recorded response always beats a waiting-list entry
/// - with several records for the same user, the last one wins
///
/// The union is not required to cover every participant; the stores are
/// authoritative about who takes part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationView {
    confirmed: HashSet<UserId>,
    rejected: HashSet<UserId>,
    waiting: HashSet<UserId>,
}

impl ConfirmationView {
    /// Partitions confirm records and merges the waiting list.
    pub fn build<I>(records: I, waiting_list: Option<HashSet<UserId>>) -> Self
    where
        I: IntoIterator<Item = ConfirmRecord>,
    {
        let mut view = Self::default();

        for record in records {
            if record.attends {
                view.rejected.remove(&record.user_id);
                view.confirmed.insert(record.user_id);
            } else {
                view.confirmed.remove(&record.user_id);
                view.rejected.insert(record.user_id);
            }
        }

        view.waiting = waiting_list
            .unwrap_or_default()
            .into_iter()
            .filter(|user| !view.confirmed.contains(user) && !view.rejected.contains(user))
            .collect();

        view
    }

    pub fn confirmed(&self) -> &HashSet<UserId> {
        &self.confirmed
    }

    pub fn rejected(&self) -> &HashSet<UserId> {
        &self.rejected
    }

    pub fn waiting(&self) -> &HashSet<UserId> {
        &self.waiting
    }

    /// Number of users who recorded a decision either way.
    pub fn responded_count(&self) -> usize {
        self.confirmed.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty() && self.rejected.is_empty() && self.waiting.is_empty()
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.response_of(user).is_some()
    }

    pub fn response_of(&self, user: &UserId) -> Option<Response> {
        if self.confirmed.contains(user) {
            Some(Response::Confirmed)
        } else if self.rejected.contains(user) {
            Some(Response::Rejected)
        } else if self.waiting.contains(user) {
            Some(Response::Waiting)
        } else {
            None
        }
    }
}
