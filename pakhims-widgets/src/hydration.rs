//! Hydration gate
//!
//! Closed during server rendering and the first client paint, opened once per
//! mount when the host delivers [`Event::Hydrated`](crate::Event::Hydrated).
//! While closed, widgets must render only deterministic values and every
//! motion collapses to the identity state.

use std::time::Duration;

use crate::animator::{Animator, Transition, VisualState};

#[derive(Debug, Default, Clone)]
pub struct HydrationGate {
    open: bool,
    mounts: u32,
}

impl HydrationGate {
    pub const fn new() -> Self {
        Self {
            open: false,
            mounts: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the gate. Returns `true` only for the first call after a mount.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.mounts += 1;
        true
    }

    /// Close the gate on unmount; the next mount hydrates again
    pub fn close(&mut self) {
        self.open = false;
    }

    /// How many times the gate has opened over the widget's life
    pub fn hydrations(&self) -> u32 {
        self.mounts
    }

    /// `live` once hydrated, `neutral` before
    pub fn select<T>(&self, live: T, neutral: T) -> T {
        if self.open {
            live
        } else {
            neutral
        }
    }

    /// Transition through `animator` once hydrated; no motion before
    pub fn motion(
        &self,
        animator: &dyn Animator,
        from: VisualState,
        to: VisualState,
        duration: Duration,
    ) -> Option<Transition> {
        self.open.then(|| animator.animate(from, to, duration))
    }
}
