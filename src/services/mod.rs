//! Business logic services.
//!
//! - [`CaptureParser`]: classifies raw text into a [`Capture`](crate::Capture)
//! - [`CaptureRouter`]: persists a capture to its sink
//! - [`CaptureService`]: parse, route and acknowledge in one call

mod capture;
mod parser;
pub mod patterns;
mod router;

pub use capture::{CaptureOutcome, CaptureService, format_response};
pub use parser::{CaptureParser, extract_due_date, extract_project_tag, parse_capture};
pub use router::CaptureRouter;
