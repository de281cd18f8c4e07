//! Capture service.
//!
//! Classifies a message, routes it, and phrases the acknowledgment.

use serde::Serialize;
use tracing::instrument;

use crate::config::NatcapConfig;
use crate::models::{Capture, CaptureType, RouteResult};
use crate::services::{CaptureParser, CaptureRouter};
use crate::{Error, Result};

/// A classified capture and where it ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureOutcome {
    /// The parsed capture.
    pub capture: Capture,
    /// The routing result.
    pub result: RouteResult,
}

impl CaptureOutcome {
    /// Returns true if the capture reached its sink.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.success
    }

    /// Returns the user-facing acknowledgment.
    #[must_use]
    pub fn response(&self) -> String {
        format_response(&self.capture, &self.result)
    }
}

/// Service for capturing free text.
pub struct CaptureService {
    parser: CaptureParser,
    router: CaptureRouter,
}

impl CaptureService {
    /// Creates a capture service over an existing router.
    #[must_use]
    pub const fn new(router: CaptureRouter) -> Self {
        Self {
            parser: CaptureParser::new(),
            router,
        }
    }

    /// Creates a capture service from configuration.
    #[must_use]
    pub fn from_config(config: &NatcapConfig) -> Self {
        Self::new(CaptureRouter::from_config(config))
    }

    /// Returns the router.
    #[must_use]
    pub const fn router(&self) -> &CaptureRouter {
        &self.router
    }

    /// Classifies and routes one message.
    ///
    /// Routing failures are reported in the outcome, not as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the message is empty after trimming.
    #[instrument(skip(self, message), fields(source = %source))]
    pub fn capture(&self, message: &str, source: &str) -> Result<CaptureOutcome> {
        if message.trim().is_empty() {
            return Err(Error::InvalidInput("nothing to capture".to_string()));
        }

        let capture = self.parser.parse(message, source);
        let result = self.router.route(&capture);
        Ok(CaptureOutcome { capture, result })
    }
}

/// Builds the short acknowledgment for a routed capture.
#[must_use]
pub fn format_response(capture: &Capture, result: &RouteResult) -> String {
    if !result.success {
        let error = result.error.as_deref().unwrap_or("unknown error");
        return format!("Could not capture that: {error}");
    }

    let mut response = acknowledgment(capture.capture_type).to_string();
    if let Some(project) = &capture.project {
        response.push_str(&format!(" Project: {project}"));
    }
    if let Some(due) = capture.due_date {
        response.push_str(&format!(" Due: {}", due.format("%Y-%m-%d")));
    }
    response
}

const fn acknowledgment(capture_type: CaptureType) -> &'static str {
    match capture_type {
        CaptureType::Idea => "Got it. Added to ideas.",
        CaptureType::Todo | CaptureType::Task => "Got it. Added task.",
        CaptureType::Note => "Noted.",
        CaptureType::Reminder => "Got it. Set reminder.",
        CaptureType::Bookmark => "Saved the link.",
        CaptureType::Quote => "Captured the quote.",
        CaptureType::BrainDump => "Got it all.",
        CaptureType::Unknown => "Got it.",
    }
}
