//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `EventStore` - Events, summary message ids, lobby status, waiting lists
//! - `ConfirmStore` - Per-user attendance responses
//!
//! ## Environment Ports
//!
//! - `Clock` - Current instant for status derivation

mod clock;
mod confirm_store;
mod event_store;

pub use clock::{Clock, SystemClock};
pub use confirm_store::ConfirmStore;
pub use event_store::EventStore;
