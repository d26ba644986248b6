//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory event and confirm stores, manually driven clock

pub mod memory;

pub use memory::{FixedClock, InMemoryConfirmStore, InMemoryEventStore, StoreOperation};
