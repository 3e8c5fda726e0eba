//! Question list state for one exam session.
//!
//! [`QuestionStore`] is created explicitly for a session and passed to both
//! the input handling and the export path. Export works on a [`Snapshot`],
//! which no later mutation can change.

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::{Result, StoreError};
pub use snapshot::Snapshot;
pub use store::{EditTicket, QuestionStore};
