//! BBAT - Bounding Box Annotation Tool
//!
//! Host-agnostic core of a bounding-box annotation widget: an ordered
//! annotation store with single selection, a drag-to-rectangle draw state
//! machine, label editing with presets, and a submission formatter.
//!
//! The host UI owns rendering and raw input; it feeds pointer and edit
//! events into an [`AnnotationSession`] and re-renders whenever the store
//! reports itself dirty.

pub mod draw;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod submit;

pub use draw::DrawState;
pub use error::SubmitError;
pub use session::{AnnotationSession, PointerTarget};
pub use store::AnnotationStore;
pub use submit::SubmissionRecord;
