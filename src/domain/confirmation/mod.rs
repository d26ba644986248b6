//! Confirmation domain module.
//!
//! Attendance responses as stored by the confirm store, and the derived
//! confirmed / rejected / waiting view of an event.

mod record;
mod view;

pub use record::{ConfirmRecord, Response};
pub use view::ConfirmationView;
