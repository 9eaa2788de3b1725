//! Submission record: the boundary contract handed to an external endpoint.
//!
//! A submission is a flat snapshot of the store: the image reference, every
//! annotation in display order, and the capture timestamp. In this build the
//! record is only serialized and handed to the host; a full system would
//! post it to a backend.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::model::Rect;
use crate::store::AnnotationStore;

/// Pixel geometry of one annotation as the endpoint expects it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Rect> for Coordinates {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// One annotation in the submission payload.
///
/// Ids cross the boundary as opaque strings even though they are numeric
/// internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionEntry {
    pub id: String,
    pub label: String,
    pub coordinates: Coordinates,
}

/// The full submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Reference to the annotated image.
    pub image: String,
    /// All annotations in display order.
    pub annotations: Vec<SubmissionEntry>,
    /// ISO-8601 UTC timestamp taken when the record was built.
    pub timestamp: String,
}

impl SubmissionRecord {
    /// Snapshot the store into a submission record.
    pub fn from_store(image: &str, store: &AnnotationStore) -> Self {
        Self {
            image: image.to_string(),
            annotations: store
                .iter()
                .map(|ann| SubmissionEntry {
                    id: ann.id.to_string(),
                    label: ann.label.clone(),
                    coordinates: ann.rect.into(),
                })
                .collect(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to compact JSON.
    pub fn to_json_compact(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }
}
