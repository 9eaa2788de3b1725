//! Ordered annotation storage with single selection.

use crate::model::{Annotation, BoxId, Point, Rect};

/// Storage for the annotations of a single image.
///
/// Annotations are kept in insertion order, which is also display order.
/// At most one annotation is selected at a time; the selection is a weak
/// reference and is cleared when the referenced annotation is removed.
///
/// Operations on ids not present in the store are no-ops.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    /// All annotations in insertion order.
    annotations: Vec<Annotation>,
    /// Counter for generating unique annotation IDs.
    next_id: BoxId,
    /// Currently selected annotation ID.
    selected_id: Option<BoxId>,
    /// Dirty flag - set when annotations or selection change.
    /// The host polls this to decide when to re-render the overlay.
    dirty: bool,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
            next_id: 1,
            selected_id: None,
            dirty: true, // Start dirty so the first render happens
        }
    }

    /// Check if the store has been modified since last clear_dirty().
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag. Call after re-rendering.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Mark the store as dirty.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Add an annotation and return its ID.
    pub fn add(&mut self, rect: Rect, label: impl Into<String>) -> BoxId {
        let id = self.next_id;
        self.next_id += 1;
        self.annotations.push(Annotation::new(id, rect, label));
        self.mark_dirty();
        id
    }

    /// Remove an annotation by ID, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: BoxId) -> Option<Annotation> {
        let index = self.annotations.iter().position(|ann| ann.id == id)?;
        let removed = self.annotations.remove(index);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        self.mark_dirty();
        Some(removed)
    }

    /// Write a new label to the annotation with the given ID.
    /// Returns false if no such annotation exists.
    pub fn update_label(&mut self, id: BoxId, label: &str) -> bool {
        match self.get_mut(id) {
            Some(ann) => {
                ann.label = label.to_string();
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Get an annotation by ID.
    pub fn get(&self, id: BoxId) -> Option<&Annotation> {
        self.annotations.iter().find(|ann| ann.id == id)
    }

    /// Get a mutable reference to an annotation by ID.
    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|ann| ann.id == id)
    }

    /// Get all annotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Get the number of annotations.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check if there are no annotations.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Clear all annotations and the selection.
    pub fn clear(&mut self) {
        if !self.annotations.is_empty() || self.selected_id.is_some() {
            self.mark_dirty();
        }
        self.annotations.clear();
        self.selected_id = None;
    }

    /// Select an annotation, or clear the selection with `None`.
    /// Selecting an id not present in the store is a no-op.
    pub fn select(&mut self, id: Option<BoxId>) {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return;
            }
        }
        if self.selected_id != id {
            self.selected_id = id;
            self.mark_dirty();
        }
    }

    /// Get the selected annotation ID.
    pub fn selected(&self) -> Option<BoxId> {
        self.selected_id
    }

    /// Find the topmost annotation at a given point.
    ///
    /// Later annotations draw on top of earlier ones, so the search runs in
    /// reverse insertion order.
    pub fn hit_test(&self, point: Point) -> Option<BoxId> {
        self.annotations
            .iter()
            .rev()
            .find(|ann| ann.rect.contains(point))
            .map(|ann| ann.id)
    }
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}
