//! Error types for submission serialization.

use thiserror::Error;

/// Errors that can occur when serializing a submission record.
///
/// Store and session operations on unknown ids are deliberate no-ops, not
/// errors; the only fallible boundary is turning a record into JSON.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
