//! Annotation data model: geometry types, identifiers, and labeled boxes.

use serde::{Deserialize, Serialize};

/// Unique identifier for an annotation.
///
/// Ids are generated by the store's monotonic counter and are never reused
/// within a session.
pub type BoxId = u64;

/// Minimum size (width/height) a dragged rectangle must strictly exceed
/// to be committed as an annotation.
pub const MIN_BOX_SIZE: f32 = 10.0;

/// Label assigned to a freshly committed box before the user edits it.
pub const DEFAULT_LABEL: &str = "New Annotation";

/// A 2D point in image-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in image-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner X coordinate
    pub x: f32,
    /// Top-left corner Y coordinate
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a normalized rectangle from two corner points.
    ///
    /// The corners may be given in any order; the result always has its
    /// origin at the top-left and non-negative extents.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
        }
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Get the area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// A single committed annotation: a rectangle plus its text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier, assigned at creation and immutable afterwards.
    pub id: BoxId,
    /// The annotated region.
    pub rect: Rect,
    /// Free-form label text, mutable via the session's label editor.
    pub label: String,
}

impl Annotation {
    /// Create a new annotation with the given geometry and label.
    pub fn new(id: BoxId, rect: Rect, label: impl Into<String>) -> Self {
        Self {
            id,
            rect,
            label: label.into(),
        }
    }
}
