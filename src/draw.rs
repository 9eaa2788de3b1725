//! Drag-to-rectangle draw state machine.

use crate::model::{MIN_BOX_SIZE, Point, Rect};

/// State of the in-progress draw interaction.
///
/// `begin` is gated by the caller: only pointer-downs that hit the bare
/// image surface start a drag (see [`AnnotationSession::pointer_down`]).
///
/// [`AnnotationSession::pointer_down`]: crate::session::AnnotationSession::pointer_down
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    /// Not currently drawing.
    #[default]
    Idle,
    /// Dragging out a rectangle between the pointer-down point and the
    /// current pointer position.
    Dragging { start: Point, current: Point },
}

impl DrawState {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DrawState::Idle)
    }

    /// Start a drag at the given point. No-op if already dragging.
    pub fn begin(&mut self, point: Point) {
        if let DrawState::Idle = self {
            *self = DrawState::Dragging {
                start: point,
                current: point,
            };
        }
    }

    /// Update the tracked pointer position while dragging. No-op when idle.
    pub fn update(&mut self, point: Point) {
        if let DrawState::Dragging { current, .. } = self {
            *current = point;
        }
    }

    /// The draft rectangle spanned so far, or `None` when idle.
    pub fn draft(&self) -> Option<Rect> {
        match self {
            DrawState::Idle => None,
            DrawState::Dragging { start, current } => Some(Rect::from_corners(*start, *current)),
        }
    }

    /// End the drag and return the draft rectangle if it is large enough
    /// to commit. Undersized drafts are discarded silently.
    pub fn finish(&mut self) -> Option<Rect> {
        let rect = self.draft()?;
        *self = DrawState::Idle;

        if rect.width > MIN_BOX_SIZE && rect.height > MIN_BOX_SIZE {
            Some(rect)
        } else {
            None
        }
    }

    /// Abort the drag, discarding the draft.
    ///
    /// Interrupted drags (pointer leaving the surface, focus loss) are
    /// routed here by the host rather than being committed.
    pub fn cancel(&mut self) {
        *self = DrawState::Idle;
    }
}
