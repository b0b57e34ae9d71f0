//! Virtual environment
//!
//! An [`Environment`] with a virtual clock, an ordered timer queue and a
//! listener registry. Tests use it to drive widgets deterministically; the
//! site binary uses it for headless previews with a file-backed store.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use crate::env::{Environment, ListenerId, ListenerKind, Timer};
use crate::prefs::{MemoryPreferences, PreferenceStore};

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    period: Option<Duration>,
}

/// Browser stand-in driven by explicit time advances
#[derive(Debug)]
pub struct VirtualEnvironment<P: PreferenceStore = MemoryPreferences> {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<Timer, Scheduled>,
    listeners: BTreeMap<ListenerId, ListenerKind>,
    scroll_y: f64,
    viewport: (f64, f64),
    scroll_locked: bool,
    offsets: HashMap<String, f64>,
    known_assets: Option<BTreeSet<String>>,
    scroll_log: Vec<f64>,
    timers_started: usize,
    preferences: P,
}

impl VirtualEnvironment<MemoryPreferences> {
    /// Desktop-sized viewport at the top of an empty document
    pub fn new() -> Self {
        Self::with_preferences(MemoryPreferences::new())
    }
}

impl Default for VirtualEnvironment<MemoryPreferences> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PreferenceStore> VirtualEnvironment<P> {
    pub fn with_preferences(preferences: P) -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            timers: BTreeMap::new(),
            listeners: BTreeMap::new(),
            scroll_y: 0.0,
            viewport: (1280.0, 800.0),
            scroll_locked: false,
            offsets: HashMap::new(),
            known_assets: None,
            scroll_log: Vec::new(),
            timers_started: 0,
            preferences,
        }
    }

    /// Place an element with `id` at a top offset
    pub fn set_element_offset(&mut self, id: impl Into<String>, offset: f64) {
        self.offsets.insert(id.into(), offset);
    }

    pub fn remove_element(&mut self, id: &str) {
        self.offsets.remove(id);
    }

    /// Jump the scroll position without recording a smooth scroll
    pub fn set_scroll_position(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    /// Restrict resolvable assets to `paths`; by default every asset resolves
    pub fn set_known_assets<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_assets = Some(paths.into_iter().map(Into::into).collect());
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Every smooth-scroll target requested so far
    pub fn scroll_log(&self) -> &[f64] {
        &self.scroll_log
    }

    pub fn active_timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_timer_active(&self, timer: Timer) -> bool {
        self.timers.contains_key(&timer)
    }

    /// Total timers ever started, including stopped ones
    pub fn timers_started(&self) -> usize {
        self.timers_started
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    pub fn total_listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Pop the earliest timer due at or before `deadline`, moving the clock to it.
    ///
    /// Ties fire in start order. Intervals are rescheduled; timeouts are removed.
    pub fn fire_next(&mut self, deadline: Duration) -> Option<Timer> {
        let (timer, scheduled) = self
            .timers
            .iter()
            .filter(|(_, s)| s.due <= deadline)
            .min_by_key(|(timer, s)| (s.due, **timer))
            .map(|(t, s)| (*t, *s))?;

        self.now = scheduled.due;
        match scheduled.period {
            Some(period) => {
                if let Some(entry) = self.timers.get_mut(&timer) {
                    entry.due += period;
                }
            }
            None => {
                self.timers.remove(&timer);
            }
        }
        Some(timer)
    }

    /// Advance the clock by `elapsed`, handing each fired timer to `on_fire`.
    ///
    /// Timers are fired one at a time, so a timer stopped by an earlier
    /// callback in the same advance never fires.
    pub fn run_for<F>(&mut self, elapsed: Duration, mut on_fire: F)
    where
        F: FnMut(&mut Self, Timer),
    {
        let deadline = self.now + elapsed;
        while let Some(timer) = self.fire_next(deadline) {
            on_fire(self, timer);
        }
        self.now = deadline;
    }

    /// Advance the clock and collect the fired timers
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Timer> {
        let mut fired = Vec::new();
        self.run_for(elapsed, |_, timer| fired.push(timer));
        fired
    }

    fn schedule(&mut self, delay: Duration, period: Option<Duration>) -> Timer {
        let timer = Timer(self.next_id);
        self.next_id += 1;
        self.timers_started += 1;
        self.timers.insert(
            timer,
            Scheduled {
                due: self.now + delay,
                period,
            },
        );
        timer
    }
}

impl<P: PreferenceStore> Environment for VirtualEnvironment<P> {
    fn scroll_position(&self) -> f64 {
        self.scroll_y
    }

    fn element_offset(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).copied()
    }

    fn scroll_to(&mut self, position: f64) {
        self.scroll_log.push(position);
        self.scroll_y = position;
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.0
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.1
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn preference(&self, key: &str) -> Option<String> {
        self.preferences.get(key)
    }

    fn set_preference(&mut self, key: &str, value: &str) {
        self.preferences.set(key, value);
    }

    fn asset_exists(&self, path: &str) -> bool {
        match &self.known_assets {
            Some(known) => known.contains(path),
            None => true,
        }
    }

    fn start_interval(&mut self, period: Duration) -> Timer {
        let period = period.max(MIN_PERIOD);
        self.schedule(period, Some(period))
    }

    fn start_timeout(&mut self, delay: Duration) -> Timer {
        self.schedule(delay, None)
    }

    fn stop_timer(&mut self, timer: Timer) {
        self.timers.remove(&timer);
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_interval_fires_every_period() {
        let mut env = VirtualEnvironment::new();
        let timer = env.start_interval(ms(100));
        let fired = env.advance(ms(350));
        assert_eq!(fired, vec![timer, timer, timer]);
        assert_eq!(env.now(), ms(350));
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut env = VirtualEnvironment::new();
        let timer = env.start_timeout(ms(500));
        assert!(env.advance(ms(499)).is_empty());
        assert_eq!(env.advance(ms(1)), vec![timer]);
        assert!(env.advance(ms(5000)).is_empty());
        assert!(!env.is_timer_active(timer));
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let mut env = VirtualEnvironment::new();
        let slow = env.start_interval(ms(300));
        let fast = env.start_interval(ms(200));
        assert_eq!(env.advance(ms(600)), vec![fast, slow, fast, slow, fast]);
    }

    #[test]
    fn test_stop_inside_callback_cancels_pending_fires() {
        let mut env = VirtualEnvironment::new();
        let a = env.start_interval(ms(100));
        let b = env.start_interval(ms(100));
        let mut seen = Vec::new();
        env.run_for(ms(100), |env, timer| {
            seen.push(timer);
            if timer == a {
                env.stop_timer(b);
            }
        });
        assert_eq!(seen, vec![a]);
    }

    #[test]
    fn test_listener_registry_counts_by_kind() {
        let mut env = VirtualEnvironment::new();
        let scroll = env.add_listener(ListenerKind::Scroll);
        env.add_listener(ListenerKind::Resize);
        assert_eq!(env.listener_count(ListenerKind::Scroll), 1);
        env.remove_listener(scroll);
        env.remove_listener(scroll);
        assert_eq!(env.listener_count(ListenerKind::Scroll), 0);
        assert_eq!(env.total_listener_count(), 1);
    }

    #[test]
    fn test_known_assets_restrict_resolution() {
        let mut env = VirtualEnvironment::new();
        assert!(env.asset_exists("/images/1.png"));
        env.set_known_assets(["/images/1.png"]);
        assert!(env.asset_exists("/images/1.png"));
        assert!(!env.asset_exists("/images/2.png"));
    }
}
