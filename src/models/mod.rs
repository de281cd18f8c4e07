//! Data models for natcap.
//!
//! Captures, routing results, and the task rows the router writes.

mod capture;
mod route;
mod task;

pub use capture::{Capture, CaptureType, UNKNOWN_SOURCE};
pub use route::{NO_DESTINATION, RouteResult};
pub use task::{NewTask, TaskCategory, TaskStatus};
