//! Task store trait.

use super::SinkResult;
use crate::models::NewTask;

/// Trait for relational task stores.
///
/// The router only ever issues blind inserts, so the contract is a single
/// write plus a printable location for routing results.
pub trait TaskStore: Send + Sync {
    /// Inserts one task row.
    fn insert_task(&self, task: &NewTask) -> SinkResult<()>;

    /// Human-readable location of the store (a path or logical name).
    fn location(&self) -> String;
}
