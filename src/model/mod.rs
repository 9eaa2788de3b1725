//! Data models for the annotation session.

mod annotation;
mod preset;

pub use annotation::{Annotation, BoxId, DEFAULT_LABEL, MIN_BOX_SIZE, Point, Rect};
pub use preset::default_presets;
