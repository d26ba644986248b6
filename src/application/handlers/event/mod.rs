//! Event command and query handlers.

mod confirm_aggregator;
mod lifecycle_manager;
mod lobby_status_manager;
mod status_deriver;
mod summarize_event;

pub use confirm_aggregator::ConfirmAggregator;
pub use lifecycle_manager::EventLifecycleManager;
pub use lobby_status_manager::LobbyStatusManager;
pub use status_deriver::StatusDeriver;
pub use summarize_event::{EventSummary, EventSummaryHandler};
