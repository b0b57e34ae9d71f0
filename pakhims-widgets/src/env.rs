//! Host environment capability
//!
//! Everything a widget needs from the document and window goes through
//! [`Environment`]: scroll position, element geometry, smooth scrolling, the
//! durable preference store, timers and event listeners. Widgets never reach
//! for globals, so a [`VirtualEnvironment`](crate::VirtualEnvironment) can
//! stand in for a browser in tests and headless previews.

use std::time::Duration;

use serde::Serialize;

/// Handle to a repeating interval or one-shot timeout
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timer(pub(crate) u64);

impl Timer {
    /// Raw id, for logging
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Handle to a registered event listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Document/window events a widget can subscribe to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Resize,
    KeyDown,
    PointerDown,
    PointerMove,
}

/// Capability interface over the browser window and document
pub trait Environment {
    /// Current vertical scroll offset in pixels
    fn scroll_position(&self) -> f64;

    /// Top offset of the element with `id`, or `None` if no such element exists
    fn element_offset(&self, id: &str) -> Option<f64>;

    /// Smooth-scroll the document to an absolute offset
    fn scroll_to(&mut self, position: f64);

    fn viewport_width(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Lock or unlock page scrolling (modal overlays)
    fn set_scroll_locked(&mut self, locked: bool);

    /// Read a value from the durable client-side key-value store
    fn preference(&self, key: &str) -> Option<String>;

    /// Write a value to the durable client-side key-value store
    fn set_preference(&mut self, key: &str, value: &str);

    /// Whether a static asset resolves
    fn asset_exists(&self, path: &str) -> bool;

    /// Start a repeating timer firing every `period`
    fn start_interval(&mut self, period: Duration) -> Timer;

    /// Start a timer firing once after `delay`
    fn start_timeout(&mut self, delay: Duration) -> Timer;

    /// Cancel a timer. Stopping an unknown or already-fired timer is a no-op.
    fn stop_timer(&mut self, timer: Timer);

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Detach a listener. Removing an unknown listener is a no-op.
    fn remove_listener(&mut self, id: ListenerId);
}
