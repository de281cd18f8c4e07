//! Routing outcome.

use serde::{Deserialize, Serialize};

/// Destination reported when no sink was selected.
pub const NO_DESTINATION: &str = "none";

/// Result of dispatching a capture to a sink.
///
/// `error` is present exactly when `success` is false. Use
/// [`RouteResult::delivered`] and [`RouteResult::failed`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Whether the sink write succeeded.
    pub success: bool,
    /// The sink that was written, or would have been.
    pub destination: String,
    /// Why the write failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteResult {
    /// A successful write to `destination`.
    #[must_use]
    pub fn delivered(destination: impl Into<String>) -> Self {
        Self {
            success: true,
            destination: destination.into(),
            error: None,
        }
    }

    /// A failed write to `destination`.
    ///
    /// An empty error message is replaced so failures are never silent.
    #[must_use]
    pub fn failed(destination: impl Into<String>, error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            "unspecified sink error".to_string()
        } else {
            error
        };
        Self {
            success: false,
            destination: destination.into(),
            error: Some(error),
        }
    }
}
