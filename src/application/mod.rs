//! Application layer - Handlers over the store ports.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Reads that combine several stores fan out concurrently and join before
//! producing a result.

pub mod handlers;

pub use handlers::{
    ConfirmAggregator, EventLifecycleManager, EventSummary, EventSummaryHandler,
    LobbyStatusManager, StatusDeriver,
};
