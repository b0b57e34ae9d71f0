//! Timer-driven animation loops
//!
//! Each loop owns at most one environment timer and cancels it on `stop`.
//! Widgets call [`IntervalAnimation::sync`] whenever an enabling condition may
//! have changed (gate opened, preference toggled, unmount) so that the loop
//! runs exactly while the condition holds.

use std::time::Duration;

use crate::animator::Easing;
use crate::env::{Environment, Timer};

/// Integer counter advanced modulo `modulus` on a fixed period
#[derive(Debug, Clone)]
pub struct IntervalAnimation {
    period: Duration,
    modulus: u32,
    value: u32,
    timer: Option<Timer>,
}

impl IntervalAnimation {
    pub fn new(period: Duration, modulus: u32) -> Self {
        Self {
            period,
            modulus: modulus.max(1),
            value: 0,
            timer: None,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start the loop; no-op while already running
    pub fn start(&mut self, env: &mut dyn Environment) {
        if self.timer.is_none() {
            self.timer = Some(env.start_interval(self.period));
        }
    }

    /// Cancel the loop; no-op while stopped
    pub fn stop(&mut self, env: &mut dyn Environment) {
        if let Some(timer) = self.timer.take() {
            env.stop_timer(timer);
        }
    }

    /// Run exactly while `enabled` holds
    pub fn sync(&mut self, env: &mut dyn Environment, enabled: bool) {
        if enabled {
            self.start(env);
        } else {
            self.stop(env);
        }
    }

    /// Advance if `timer` belongs to this loop. Returns whether it did.
    pub fn on_timer(&mut self, timer: Timer) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        self.value = (self.value + 1) % self.modulus;
        true
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Reveals a fixed string one character per tick
///
/// Before [`start`](Typewriter::start) the full text is shown, which is what
/// the server renders. Every start rewinds to zero and replays.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    period: Duration,
    revealed: Option<usize>,
    timer: Option<Timer>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, period: Duration) -> Self {
        Self {
            text: text.into(),
            period,
            revealed: None,
            timer: None,
        }
    }

    /// Text currently on screen
    pub fn displayed(&self) -> &str {
        match self.revealed {
            None => &self.text,
            Some(count) => match self.text.char_indices().nth(count) {
                Some((byte, _)) => &self.text[..byte],
                None => &self.text,
            },
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.displayed().len() == self.text.len()
    }

    /// Rewind to an empty string and start revealing
    pub fn start(&mut self, env: &mut dyn Environment) {
        self.rewind(env);
        self.timer = Some(env.start_interval(self.period));
    }

    /// Rewind to an empty string without ticking; [`resume`](Typewriter::resume) starts it
    pub fn rewind(&mut self, env: &mut dyn Environment) {
        self.stop(env);
        self.revealed = Some(0);
    }

    pub fn stop(&mut self, env: &mut dyn Environment) {
        if let Some(timer) = self.timer.take() {
            env.stop_timer(timer);
        }
    }

    /// Continue a stopped, unfinished replay from where it left off
    pub fn resume(&mut self, env: &mut dyn Environment) {
        if self.timer.is_none() && self.revealed.is_some() && !self.is_complete() {
            self.timer = Some(env.start_interval(self.period));
        }
    }

    /// Show the full text again, as before the first start
    pub fn reset(&mut self, env: &mut dyn Environment) {
        self.stop(env);
        self.revealed = None;
    }

    /// Reveal the next character; the timer is cancelled once the text is complete
    pub fn on_timer(&mut self, env: &mut dyn Environment, timer: Timer) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        let total = self.text.chars().count();
        let next = self.revealed.map_or(total, |n| n + 1).min(total);
        self.revealed = Some(next);
        if next >= total {
            self.stop(env);
        }
        true
    }
}

/// Eased count from zero to a target over a fixed duration, frame by frame
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    decimals: usize,
    duration: Duration,
    elapsed: Option<Duration>,
}

impl CountUp {
    pub fn new(target: f64, decimals: usize, duration: Duration) -> Self {
        Self {
            target,
            decimals,
            duration,
            elapsed: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed.is_some_and(|e| e >= self.duration)
    }

    pub fn start(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(Duration::ZERO);
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = None;
    }

    /// Move the count forward by one frame
    pub fn tick(&mut self, frame: Duration) {
        if let Some(elapsed) = self.elapsed.as_mut() {
            *elapsed = (*elapsed + frame).min(self.duration);
        }
    }

    pub fn current(&self) -> f64 {
        let Some(elapsed) = self.elapsed else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.target * Easing::EaseOutCubic.apply(progress)
    }

    /// Current value with the configured number of decimals
    pub fn formatted(&self) -> String {
        format!("{:.*}", self.decimals, self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::virtual_env::VirtualEnvironment;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_interval_wraps_modulo() {
        let mut env = VirtualEnvironment::new();
        let mut heartbeat = IntervalAnimation::new(ms(500), 4);
        heartbeat.start(&mut env);
        heartbeat.start(&mut env);
        assert_eq!(env.active_timer_count(), 1);

        let mut phases = Vec::new();
        env.run_for(ms(2500), |_, timer| {
            heartbeat.on_timer(timer);
            phases.push(heartbeat.value());
        });
        assert_eq!(phases, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_sync_tears_down_when_condition_drops() {
        let mut env = VirtualEnvironment::new();
        let mut wave = IntervalAnimation::new(ms(50), 360);
        wave.sync(&mut env, true);
        assert!(wave.is_running());
        wave.sync(&mut env, false);
        assert!(!wave.is_running());
        assert_eq!(env.active_timer_count(), 0);
        for timer in env.advance(ms(1000)) {
            wave.on_timer(timer);
        }
        assert_eq!(wave.value(), 0);
    }

    #[test]
    fn test_foreign_timer_is_ignored() {
        let mut env = VirtualEnvironment::new();
        let mut loop_a = IntervalAnimation::new(ms(100), 10);
        let other = env.start_interval(ms(100));
        loop_a.start(&mut env);
        assert!(!loop_a.on_timer(other));
        assert_eq!(loop_a.value(), 0);
    }

    #[test]
    fn test_typewriter_shows_full_text_until_started() {
        let mut env = VirtualEnvironment::new();
        let mut tw = Typewriter::new("PAKHIMS", ms(100));
        assert_eq!(tw.displayed(), "PAKHIMS");

        tw.start(&mut env);
        assert_eq!(tw.displayed(), "");
        env.run_for(ms(300), |env, timer| {
            tw.on_timer(env, timer);
        });
        assert_eq!(tw.displayed(), "PAK");

        env.run_for(ms(1000), |env, timer| {
            tw.on_timer(env, timer);
        });
        assert!(tw.is_complete());
        assert!(!tw.is_running());
        assert_eq!(env.active_timer_count(), 0);
    }

    #[test]
    fn test_typewriter_restarts_from_zero() {
        let mut env = VirtualEnvironment::new();
        let mut tw = Typewriter::new("Ease", ms(100));
        tw.start(&mut env);
        env.run_for(ms(1000), |env, timer| {
            tw.on_timer(env, timer);
        });
        assert_eq!(tw.displayed(), "Ease");

        tw.start(&mut env);
        assert_eq!(tw.displayed(), "");
        assert_eq!(env.active_timer_count(), 1);
    }

    #[test]
    fn test_rewound_typewriter_waits_for_resume() {
        let mut env = VirtualEnvironment::new();
        let mut tw = Typewriter::new("PAKHIMS", ms(100));
        tw.rewind(&mut env);
        assert_eq!(tw.displayed(), "");
        assert!(!tw.is_running());
        assert_eq!(env.active_timer_count(), 0);

        tw.resume(&mut env);
        env.run_for(ms(200), |env, timer| {
            tw.on_timer(env, timer);
        });
        assert_eq!(tw.displayed(), "PA");
    }

    #[test]
    fn test_typewriter_resume_keeps_progress() {
        let mut env = VirtualEnvironment::new();
        let mut tw = Typewriter::new("PAKHIMS", ms(100));
        tw.resume(&mut env);
        assert!(!tw.is_running());

        tw.start(&mut env);
        env.run_for(ms(200), |env, timer| {
            tw.on_timer(env, timer);
        });
        tw.stop(&mut env);
        tw.resume(&mut env);
        env.run_for(ms(100), |env, timer| {
            tw.on_timer(env, timer);
        });
        assert_eq!(tw.displayed(), "PAK");

        tw.reset(&mut env);
        assert_eq!(tw.displayed(), "PAKHIMS");
        assert_eq!(env.active_timer_count(), 0);
    }

    #[test]
    fn test_typewriter_respects_char_boundaries() {
        let mut env = VirtualEnvironment::new();
        let mut tw = Typewriter::new("héllo", ms(10));
        tw.start(&mut env);
        env.run_for(ms(20), |env, timer| {
            tw.on_timer(env, timer);
        });
        assert_eq!(tw.displayed(), "hé");
    }

    #[test]
    fn test_count_up_eases_to_target() {
        let mut count = CountUp::new(500.0, 0, ms(2500));
        assert_eq!(count.formatted(), "0");
        count.tick(ms(1000));
        assert_eq!(count.current(), 0.0);

        count.start();
        count.tick(ms(1250));
        assert!(count.current() > 250.0 && count.current() < 500.0);
        count.tick(ms(5000));
        assert!(count.is_finished());
        assert_eq!(count.formatted(), "500");
    }

    #[test]
    fn test_count_up_decimals() {
        let mut count = CountUp::new(99.9, 1, ms(100));
        count.start();
        count.tick(ms(100));
        assert_eq!(count.formatted(), "99.9");
    }
}
