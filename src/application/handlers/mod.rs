//! Application handlers.
//!
//! Services that orchestrate domain operations over the store ports.

pub mod event;

pub use event::{
    ConfirmAggregator, EventLifecycleManager, EventSummary, EventSummaryHandler,
    LobbyStatusManager, StatusDeriver,
};
