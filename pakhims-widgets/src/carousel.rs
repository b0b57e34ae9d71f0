//! Carousel and modal viewer state machines
//!
//! [`Carousel`] is a bounded, wrapping index with optional autoplay. User
//! navigation cancels autoplay; timer navigation does not. [`ModalViewer`]
//! wraps a carousel with `Closed`/`Open(index)` states, page-scroll locking,
//! keyboard handling and a focused hotspot.

use std::time::Duration;

use crate::env::{Environment, Timer};
use crate::event::Key;

/// Who asked for the navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    User,
    Timer,
}

/// Wrapping index into a fixed-length list
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
    period: Duration,
    timer: Option<Timer>,
}

impl Carousel {
    pub fn new(len: usize, period: Duration, autoplay: bool) -> Self {
        Self {
            len,
            index: 0,
            autoplay,
            period,
            timer: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether autoplay is requested (the timer may still be paused)
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// Whether the autoplay timer is live
    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self, env: &mut dyn Environment, source: NavSource) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.after_navigation(env, source);
    }

    pub fn prev(&mut self, env: &mut dyn Environment, source: NavSource) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.after_navigation(env, source);
    }

    /// Jump to `index` (user navigation). Out-of-range indices are ignored.
    pub fn go_to(&mut self, env: &mut dyn Environment, index: usize) -> bool {
        if index >= self.len {
            ::log::debug!("Ignoring jump to slide {} of {}", index, self.len);
            return false;
        }
        self.index = index;
        self.after_navigation(env, NavSource::User);
        true
    }

    /// Set the index without touching autoplay
    pub fn set_index(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Turn autoplay on or off. The timer runs only while `active` also holds.
    pub fn set_autoplay(&mut self, env: &mut dyn Environment, autoplay: bool, active: bool) {
        self.autoplay = autoplay;
        self.sync_timer(env, active);
    }

    /// Start or stop the autoplay timer for the current conditions
    pub fn sync_timer(&mut self, env: &mut dyn Environment, active: bool) {
        let should_tick = self.autoplay && active && self.len > 0;
        match (should_tick, self.timer) {
            (true, None) => self.timer = Some(env.start_interval(self.period)),
            (false, Some(timer)) => {
                env.stop_timer(timer);
                self.timer = None;
            }
            _ => {}
        }
    }

    /// Advance if `timer` is this carousel's autoplay tick
    pub fn on_timer(&mut self, env: &mut dyn Environment, timer: Timer) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        self.next(env, NavSource::Timer);
        true
    }

    fn after_navigation(&mut self, env: &mut dyn Environment, source: NavSource) {
        if source == NavSource::User && self.autoplay {
            self.autoplay = false;
            self.sync_timer(env, false);
        }
    }
}

/// Observable state of a modal viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerState {
    Closed,
    Open(usize),
}

/// What a key press did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Navigated,
    Closed,
    AutoplayToggled(bool),
    FocusedSection(usize),
}

/// Full-screen viewer over a carousel
#[derive(Debug, Clone)]
pub struct ModalViewer {
    carousel: Carousel,
    open: bool,
    paused: bool,
    focused_section: Option<usize>,
}

impl ModalViewer {
    /// Autoplay starts off; it can only be toggled on while open
    pub fn new(len: usize, autoplay_period: Duration) -> Self {
        Self {
            carousel: Carousel::new(len, autoplay_period, false),
            open: false,
            paused: false,
            focused_section: None,
        }
    }

    pub fn state(&self) -> ViewerState {
        if self.open {
            ViewerState::Open(self.carousel.index())
        } else {
            ViewerState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.carousel.is_autoplaying()
    }

    pub fn is_ticking(&self) -> bool {
        self.carousel.is_ticking()
    }

    pub fn focused_section(&self) -> Option<usize> {
        self.focused_section
    }

    /// `Closed -> Open(index)`; locks page scroll. Out-of-range indices are ignored.
    pub fn open_at(&mut self, env: &mut dyn Environment, index: usize) -> bool {
        if index >= self.carousel.len() {
            return false;
        }
        self.carousel.set_index(index);
        self.focused_section = None;
        if !self.open {
            self.open = true;
            env.set_scroll_locked(true);
        }
        self.carousel.sync_timer(env, self.ticks());
        true
    }

    /// Any state `-> Closed`; unlocks page scroll and stops autoplay
    pub fn close(&mut self, env: &mut dyn Environment) {
        self.carousel.set_autoplay(env, false, false);
        self.focused_section = None;
        if self.open {
            self.open = false;
            env.set_scroll_locked(false);
        }
    }

    pub fn next(&mut self, env: &mut dyn Environment, source: NavSource) {
        if !self.open {
            return;
        }
        self.carousel.next(env, source);
        self.focused_section = None;
    }

    pub fn prev(&mut self, env: &mut dyn Environment, source: NavSource) {
        if !self.open {
            return;
        }
        self.carousel.prev(env, source);
        self.focused_section = None;
    }

    /// Jump to an item from the thumbnail strip (user navigation)
    pub fn go_to(&mut self, env: &mut dyn Environment, index: usize) -> bool {
        if !self.open {
            return false;
        }
        let moved = self.carousel.go_to(env, index);
        if moved {
            self.focused_section = None;
        }
        moved
    }

    pub fn toggle_autoplay(&mut self, env: &mut dyn Environment) -> bool {
        let autoplay = !self.carousel.is_autoplaying();
        self.carousel.set_autoplay(env, autoplay, self.ticks());
        autoplay
    }

    /// Focus hotspot `section` of the current item; ignored when out of range
    pub fn focus_section(&mut self, section: usize, section_count: usize) -> bool {
        if !self.open || section >= section_count {
            return false;
        }
        self.focused_section = Some(section);
        true
    }

    pub fn clear_focus(&mut self) {
        self.focused_section = None;
    }

    /// Arrows navigate, escape closes, space toggles autoplay, digits focus hotspots.
    ///
    /// `section_count` is the hotspot count of the current item. Keys are
    /// ignored while closed.
    pub fn handle_key(
        &mut self,
        env: &mut dyn Environment,
        key: Key,
        section_count: usize,
    ) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::ArrowRight => {
                self.next(env, NavSource::User);
                KeyOutcome::Navigated
            }
            Key::ArrowLeft => {
                self.prev(env, NavSource::User);
                KeyOutcome::Navigated
            }
            Key::Escape => {
                self.close(env);
                KeyOutcome::Closed
            }
            Key::Space => KeyOutcome::AutoplayToggled(self.toggle_autoplay(env)),
            Key::Digit(n) => {
                let section = usize::from(n).saturating_sub(1);
                if n >= 1 && self.focus_section(section, section_count) {
                    KeyOutcome::FocusedSection(section)
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Autoplay tick; only advances while open
    pub fn on_timer(&mut self, env: &mut dyn Environment, timer: Timer) -> bool {
        if !self.open {
            return false;
        }
        let advanced = self.carousel.on_timer(env, timer);
        if advanced {
            self.focused_section = None;
        }
        advanced
    }

    /// Stop autoplay ticking without forgetting the autoplay request.
    /// Nothing restarts the timer until [`resume`](ModalViewer::resume).
    pub fn pause(&mut self, env: &mut dyn Environment) {
        self.paused = true;
        self.carousel.sync_timer(env, false);
    }

    /// Resume ticking if autoplay was requested and the viewer is open
    pub fn resume(&mut self, env: &mut dyn Environment) {
        self.paused = false;
        self.carousel.sync_timer(env, self.ticks());
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn ticks(&self) -> bool {
        self.open && !self.paused
    }
}
