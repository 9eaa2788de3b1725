//! Annotation session: routes host events into the store and draw state.
//!
//! One session covers one open image. The host feeds pointer and edit
//! events in, renders the committed annotations plus the draft rectangle,
//! and polls `store().is_dirty()` after each event to decide whether a
//! re-render is needed.

use crate::draw::DrawState;
use crate::model::{BoxId, DEFAULT_LABEL, Point, Rect, default_presets};
use crate::store::AnnotationStore;
use crate::submit::SubmissionRecord;

/// What a pointer-down event hit, as determined by the host's hit-testing.
///
/// [`AnnotationStore::hit_test`] answers this for hosts that overlay
/// annotations directly on the image surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The bare image surface, not covered by an existing annotation.
    Surface,
    /// An existing annotation overlay.
    Annotation(BoxId),
}

/// One open annotation session over a single image.
pub struct AnnotationSession {
    /// Reference to the image being annotated.
    image: String,
    /// Committed annotations and selection.
    store: AnnotationStore,
    /// The in-progress drag, if any.
    draw: DrawState,
    /// Edit buffer mirroring the selected annotation's label.
    label_buffer: String,
    /// Preset labels offered in the sidebar.
    presets: Vec<String>,
}

impl AnnotationSession {
    /// Create a session for the given image with the default presets.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            store: AnnotationStore::new(),
            draw: DrawState::default(),
            label_buffer: String::new(),
            presets: default_presets(),
        }
    }

    /// Replace the preset label list.
    pub fn with_presets(mut self, presets: Vec<String>) -> Self {
        self.presets = presets;
        self
    }

    /// The image this session annotates.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The committed annotations.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Mutable store access, for host-side render bookkeeping
    /// (`clear_dirty`) and bulk edits.
    pub fn store_mut(&mut self) -> &mut AnnotationStore {
        &mut self.store
    }

    /// The label edit buffer, mirroring the selected annotation's label.
    pub fn label_buffer(&self) -> &str {
        &self.label_buffer
    }

    /// Preset labels to offer in the sidebar.
    pub fn presets(&self) -> &[String] {
        &self.presets
    }

    /// The draft rectangle of the in-progress drag, for rendering.
    pub fn draft(&self) -> Option<Rect> {
        self.draw.draft()
    }

    /// Handle pointer-down.
    ///
    /// On the bare surface this clears the selection and starts a drag;
    /// on an existing annotation it selects that annotation instead.
    pub fn pointer_down(&mut self, point: Point, target: PointerTarget) {
        match target {
            PointerTarget::Surface => {
                self.store.select(None);
                self.label_buffer.clear();
                self.draw.begin(point);
                self.store.mark_dirty();
                log::debug!("✏️  Drag started at ({:.0}, {:.0})", point.x, point.y);
            }
            PointerTarget::Annotation(id) => self.select(id),
        }
    }

    /// Handle pointer-move: grow the draft rectangle while dragging.
    pub fn pointer_move(&mut self, point: Point) {
        if self.draw.is_dragging() {
            self.draw.update(point);
            self.store.mark_dirty();
        }
    }

    /// Handle pointer-up: commit the draft as a new annotation if it is
    /// large enough, select it, and load its label into the edit buffer.
    pub fn pointer_up(&mut self) {
        let was_dragging = self.draw.is_dragging();
        let Some(rect) = self.draw.finish() else {
            // An undersized draft vanishes without committing; the host
            // still has to repaint to drop the dashed rectangle.
            if was_dragging {
                self.store.mark_dirty();
            }
            return;
        };
        let id = self.store.add(rect, DEFAULT_LABEL);
        self.store.select(Some(id));
        self.label_buffer = DEFAULT_LABEL.to_string();
        log::debug!(
            "📦 Committed box {} at ({:.0}, {:.0}) size {:.0}x{:.0}",
            id,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    }

    /// Abort the in-progress drag.
    ///
    /// Hosts call this when the drag is interrupted: the pointer leaves the
    /// tracked surface or the window loses focus mid-drag.
    pub fn cancel_drag(&mut self) {
        if self.draw.is_dragging() {
            self.draw.cancel();
            self.store.mark_dirty();
            log::debug!("🚫 Drag cancelled");
        }
    }

    /// Select an annotation and load its label into the edit buffer.
    /// No-op on an unknown id.
    pub fn select(&mut self, id: BoxId) {
        let Some(ann) = self.store.get(id) else {
            return;
        };
        self.label_buffer = ann.label.clone();
        self.store.select(Some(id));
    }

    /// Write label text to the selected annotation, keystroke by keystroke.
    /// No-op while nothing is selected.
    pub fn edit_label(&mut self, text: &str) {
        let Some(id) = self.store.selected() else {
            return;
        };
        self.label_buffer = text.to_string();
        self.store.update_label(id, text);
    }

    /// Apply a preset label to the selected annotation.
    /// Identical to typing the preset into the label editor.
    pub fn apply_preset(&mut self, preset: &str) {
        self.edit_label(preset);
    }

    /// Delete an annotation, clearing the selection if it was selected.
    /// No-op on an unknown id.
    pub fn delete(&mut self, id: BoxId) {
        let was_selected = self.store.selected() == Some(id);
        if self.store.remove(id).is_some() {
            if was_selected {
                self.label_buffer.clear();
            }
            log::debug!("🗑️  Deleted box {}", id);
        }
    }

    /// Snapshot the current annotations into a submission record.
    pub fn submit(&self) -> SubmissionRecord {
        log::info!(
            "📤 Submitting {} annotations for '{}'",
            self.store.len(),
            self.image
        );
        SubmissionRecord::from_store(&self.image, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a full down/move/up drag over the bare surface.
    fn drag(session: &mut AnnotationSession, from: (f32, f32), to: (f32, f32)) {
        session.pointer_down(Point::new(from.0, from.1), PointerTarget::Surface);
        session.pointer_move(Point::new(to.0, to.1));
        session.pointer_up();
    }

    #[test]
    fn test_small_drag_adds_nothing() {
        let mut session = AnnotationSession::new("img");

        drag(&mut session, (100.0, 100.0), (108.0, 200.0)); // |dx| <= 10
        drag(&mut session, (100.0, 100.0), (200.0, 105.0)); // |dy| <= 10
        drag(&mut session, (100.0, 100.0), (110.0, 110.0)); // Both exactly 10

        assert!(session.store().is_empty());
        assert_eq!(session.store().selected(), None);
    }

    #[test]
    fn test_drag_commits_and_selects() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (100.0, 100.0), (50.0, 60.0));

        assert_eq!(session.store().len(), 1);
        let ann = session.store().iter().next().unwrap();
        assert_eq!(ann.rect, Rect::new(50.0, 60.0, 50.0, 40.0));
        assert_eq!(ann.label, DEFAULT_LABEL);
        assert_eq!(session.store().selected(), Some(ann.id));
        assert_eq!(session.label_buffer(), DEFAULT_LABEL);
    }

    #[test]
    fn test_pointer_down_on_annotation_selects_instead_of_drawing() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (0.0, 0.0), (50.0, 50.0));
        let id = session.store().selected().unwrap();
        session.edit_label("Steering Column");

        session.pointer_down(Point::new(25.0, 25.0), PointerTarget::Annotation(id));
        assert!(session.draft().is_none());
        assert_eq!(session.store().selected(), Some(id));
        assert_eq!(session.label_buffer(), "Steering Column");
    }

    #[test]
    fn test_pointer_down_on_surface_clears_selection() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (0.0, 0.0), (50.0, 50.0));
        assert!(session.store().selected().is_some());

        session.pointer_down(Point::new(200.0, 200.0), PointerTarget::Surface);
        assert_eq!(session.store().selected(), None);
    }

    #[test]
    fn test_edit_label_without_selection_is_noop() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (0.0, 0.0), (50.0, 50.0));
        let id = session.store().selected().unwrap();
        session.store_mut().select(None);

        session.edit_label("should go nowhere");
        assert_eq!(session.store().get(id).unwrap().label, DEFAULT_LABEL);
        assert_eq!(session.label_buffer(), "");
    }

    #[test]
    fn test_apply_preset_sets_exact_text() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (0.0, 0.0), (50.0, 50.0));
        let id = session.store().selected().unwrap();

        let preset = session.presets()[1].clone();
        session.apply_preset(&preset);
        assert_eq!(session.store().get(id).unwrap().label, preset);
        assert_eq!(session.label_buffer(), preset);
    }

    #[test]
    fn test_apply_preset_without_selection_is_noop() {
        let mut session = AnnotationSession::new("img");
        session.apply_preset("U Joint");
        assert!(session.store().is_empty());
        assert_eq!(session.label_buffer(), "");
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (0.0, 0.0), (50.0, 50.0));
        let id = session.store().selected().unwrap();

        session.delete(id);
        assert!(session.store().is_empty());
        assert_eq!(session.store().selected(), None);
        assert_eq!(session.label_buffer(), "");
    }

    #[test]
    fn test_delete_first_keeps_second_intact() {
        let mut session = AnnotationSession::new("img");
        drag(&mut session, (0.0, 0.0), (50.0, 50.0));
        let first = session.store().selected().unwrap();
        drag(&mut session, (100.0, 100.0), (150.0, 150.0));
        let second = session.store().selected().unwrap();
        session.edit_label("Cross Pinch Bolt");

        session.delete(first);
        assert_eq!(session.store().len(), 1);
        let survivor = session.store().iter().next().unwrap();
        assert_eq!(survivor.id, second);
        assert_eq!(survivor.label, "Cross Pinch Bolt");
        assert_eq!(session.store().selected(), Some(second));
    }

    #[test]
    fn test_cancelled_drag_commits_nothing() {
        let mut session = AnnotationSession::new("img");
        session.pointer_down(Point::new(0.0, 0.0), PointerTarget::Surface);
        session.pointer_move(Point::new(100.0, 100.0));
        assert!(session.draft().is_some());

        session.cancel_drag();
        session.pointer_up();
        assert!(session.store().is_empty());
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_dirty_tracks_pointer_events() {
        let mut session = AnnotationSession::new("img");
        session.store_mut().clear_dirty();

        session.pointer_down(Point::new(0.0, 0.0), PointerTarget::Surface);
        assert!(session.store().is_dirty());
        session.store_mut().clear_dirty();

        session.pointer_move(Point::new(50.0, 50.0));
        assert!(session.store().is_dirty());
        session.store_mut().clear_dirty();

        session.pointer_up();
        assert!(session.store().is_dirty());

        // Pointer-move outside a drag changes nothing
        session.store_mut().clear_dirty();
        session.pointer_move(Point::new(80.0, 80.0));
        assert!(!session.store().is_dirty());
    }

    #[test]
    fn test_undersized_discard_marks_dirty() {
        let mut session = AnnotationSession::new("img");
        session.pointer_down(Point::new(0.0, 0.0), PointerTarget::Surface);
        session.pointer_move(Point::new(8.0, 8.0));
        session.store_mut().clear_dirty();

        session.pointer_up();
        assert!(session.draft().is_none());
        assert!(session.store().is_empty());
        // The vanished draft must still trigger a repaint
        assert!(session.store().is_dirty());
    }

    #[test]
    fn test_pointer_up_when_idle_stays_clean() {
        let mut session = AnnotationSession::new("img");
        session.store_mut().clear_dirty();

        session.pointer_up();
        assert!(!session.store().is_dirty());
    }

    #[test]
    fn test_submit_snapshot() {
        let mut session = AnnotationSession::new("steering-column-image");
        drag(&mut session, (180.0, 80.0), (360.0, 160.0));
        session.edit_label("Correct Cross Pinch Bolt");

        let record = session.submit();
        assert_eq!(record.image, "steering-column-image");
        assert_eq!(record.annotations.len(), 1);
        assert_eq!(record.annotations[0].label, "Correct Cross Pinch Bolt");
        assert_eq!(record.annotations[0].coordinates.x, 180.0);
        assert_eq!(record.annotations[0].coordinates.width, 180.0);
    }
}
