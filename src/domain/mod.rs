//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `event` - Scheduled event aggregate and its time-derived status
//! - `confirmation` - Attendance responses and the partitioned confirmation view

pub mod confirmation;
pub mod event;
pub mod foundation;
