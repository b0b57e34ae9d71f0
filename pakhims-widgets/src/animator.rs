//! Animator capability
//!
//! Widgets describe motion as a [`Transition`] between two [`VisualState`]s
//! and leave interpolation to whichever [`Animator`] the host installs. The
//! default [`EasedAnimator`] uses the cubic ease-out of the shell's sidebar
//! slide; [`StillAnimator`] jumps straight to the target (reduced motion).

use std::time::Duration;

use serde::Serialize;

/// Transform and opacity of one rendered element
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VisualState {
    pub opacity: f64,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

impl VisualState {
    /// Fully opaque, unscaled, untranslated
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        scale: 1.0,
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
    };

    /// Invisible, otherwise identity
    pub const HIDDEN: VisualState = VisualState {
        opacity: 0.0,
        ..Self::IDENTITY
    };

    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn with_offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Linear blend; `t` is clamped to `[0, 1]`
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            rotate: mix(self.rotate, to.rotate),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Timing curve of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
            Easing::EaseInOutCubic => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A resolved animation from one visual state to another
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    /// Visual state `elapsed` into the transition
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        if self.duration_ms == 0 {
            return self.to;
        }
        let progress = elapsed.as_secs_f64() * 1000.0 / self.duration_ms as f64;
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed.as_millis() >= u128::from(self.duration_ms)
    }
}

/// Rendering backend that turns state pairs into transitions
pub trait Animator {
    fn animate(&self, from: VisualState, to: VisualState, duration: Duration) -> Transition;
}

/// Eased interpolation (cubic ease-out unless told otherwise)
#[derive(Clone, Copy, Debug)]
pub struct EasedAnimator {
    easing: Easing,
}

impl EasedAnimator {
    pub const fn new(easing: Easing) -> Self {
        Self { easing }
    }
}

impl Default for EasedAnimator {
    fn default() -> Self {
        Self::new(Easing::EaseOutCubic)
    }
}

impl Animator for EasedAnimator {
    fn animate(&self, from: VisualState, to: VisualState, duration: Duration) -> Transition {
        Transition {
            from,
            to,
            duration_ms: duration.as_millis() as u64,
            easing: self.easing,
        }
    }
}

/// Reduced-motion backend: every transition lands immediately
#[derive(Clone, Copy, Debug, Default)]
pub struct StillAnimator;

impl Animator for StillAnimator {
    fn animate(&self, _from: VisualState, to: VisualState, _duration: Duration) -> Transition {
        Transition {
            from: to,
            to,
            duration_ms: 0,
            easing: Easing::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        let easing = Easing::EaseOutCubic;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!(easing.apply(0.5) > 0.5);
        assert_eq!(easing.apply(2.0), 1.0);
    }

    #[test]
    fn test_sample_reaches_target() {
        let animator = EasedAnimator::default();
        let t = animator.animate(
            VisualState::HIDDEN.with_offset(0.0, 30.0),
            VisualState::IDENTITY,
            Duration::from_millis(800),
        );
        assert_eq!(t.sample(Duration::ZERO), t.from);
        assert_eq!(t.sample(Duration::from_millis(800)), VisualState::IDENTITY);
        assert!(t.is_finished(Duration::from_millis(800)));
        let mid = t.sample(Duration::from_millis(400));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
    }

    #[test]
    fn test_still_animator_lands_immediately() {
        let t = StillAnimator.animate(
            VisualState::HIDDEN,
            VisualState::IDENTITY.with_scale(1.1),
            Duration::from_millis(300),
        );
        assert_eq!(t.sample(Duration::ZERO).scale, 1.1);
        assert!(t.is_finished(Duration::ZERO));
    }
}
