//! Selection and hover state with outside-click dismissal
//!
//! A [`Selection`] owns the document-level pointer-down listener of its
//! widget. A pointer-down outside the widget's bounding container clears the
//! selection; one inside does not.

use crate::env::{Environment, ListenerId, ListenerKind};
use crate::event::{Point, Rect};

#[derive(Debug, Clone)]
pub struct Selection<K> {
    selected: Option<K>,
    hovered: Option<K>,
    listener: Option<ListenerId>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self {
            selected: None,
            hovered: None,
            listener: None,
        }
    }
}

impl<K: Copy + PartialEq> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<K> {
        self.selected
    }

    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    pub fn is_selected(&self, key: K) -> bool {
        self.selected == Some(key)
    }

    pub fn is_hovered(&self, key: K) -> bool {
        self.hovered == Some(key)
    }

    pub fn select(&mut self, key: K) {
        self.selected = Some(key);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// `Some` on hover start, `None` on hover end
    pub fn hover(&mut self, key: Option<K>) {
        self.hovered = key;
    }

    /// Register the outside-click listener; no-op while attached
    pub fn attach(&mut self, env: &mut dyn Environment) {
        if self.listener.is_none() {
            self.listener = Some(env.add_listener(ListenerKind::PointerDown));
        }
    }

    /// Drop the listener and forget all state
    pub fn detach(&mut self, env: &mut dyn Environment) {
        if let Some(listener) = self.listener.take() {
            env.remove_listener(listener);
        }
        self.selected = None;
        self.hovered = None;
    }

    /// Clear the selection when `point` falls outside `bounds`. Returns whether it did.
    pub fn on_pointer_down(&mut self, bounds: Rect, point: Point) -> bool {
        if self.listener.is_none() || bounds.contains(point) || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        true
    }
}
