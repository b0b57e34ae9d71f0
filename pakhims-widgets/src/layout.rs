//! Deterministic layout generator
//!
//! Pure arithmetic placement for decorative nodes: the same `(index, offset)`
//! always yields the same position, so the server render and the first client
//! render agree. Randomness is only available through [`ParticleField::reshuffle`],
//! which widgets call after the hydration gate opens.

use std::f64::consts::PI;

use rand::Rng;
use serde::Serialize;

/// Position in percent of the container, origin top-left
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates inside `[0, 100]`
    pub fn is_within_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// CSS `left`/`top` values, e.g. `("15%", "25%")`
    pub fn css(&self) -> (String, String) {
        (format_percent(self.x), format_percent(self.y))
    }
}

/// Format a percentage without trailing zeros
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{}%", rounded)
    }
}

/// Modular-hash parameters mapping an index into `[0, 100)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatterParams {
    pub x_step: u32,
    pub x_shift: u32,
    pub y_step: u32,
    pub y_shift: u32,
}

/// Background particles of the journey section
pub const JOURNEY_PARTICLES: ScatterParams = ScatterParams {
    x_step: 17,
    x_shift: 23,
    y_step: 31,
    y_shift: 13,
};

/// Background particles of the screenshot gallery
pub const GALLERY_PARTICLES: ScatterParams = ScatterParams {
    x_step: 37,
    x_shift: 11,
    y_step: 53,
    y_shift: 29,
};

/// Scatter `index` across the container
pub fn scatter(index: u32, params: ScatterParams) -> Position {
    let x = (index.wrapping_mul(params.x_step).wrapping_add(params.x_shift)) % 100;
    let y = (index.wrapping_mul(params.y_step).wrapping_add(params.y_shift)) % 100;
    Position::new(f64::from(x), f64::from(y))
}

/// Horizontal drift of a floating particle: -15, 0 or 15 px
pub fn drift(index: u32) -> f64 {
    (f64::from(index % 3) - 1.0) * 15.0
}

/// Float cycle of a particle in seconds: 4, 5 or 6
pub fn float_period_secs(index: u32) -> f64 {
    4.0 + f64::from(index % 3)
}

/// Height of the healing wave at horizontal position `x`
pub fn wave_height(x: f64, offset: f64, amplitude: f64) -> f64 {
    50.0 + ((x + offset) * 0.1).sin() * amplitude
}

/// Wave sampled at x = 0, 2, .., 100
pub fn wave_points(offset: f64, amplitude: f64) -> Vec<Position> {
    (0..=100)
        .step_by(2)
        .map(|x| {
            let x = f64::from(x);
            Position::new(x, wave_height(x, offset, amplitude))
        })
        .collect()
}

/// SVG path data for the wave, `M x,y L x,y ...`
pub fn wave_path(offset: f64, amplitude: f64) -> String {
    let points: Vec<String> = wave_points(offset, amplitude)
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect();
    format!("M {}", points.join(" L "))
}

/// Vertical bob, in px, of a node riding the wave at `position` percent
pub fn wave_bob(position: f64, offset: f64) -> f64 {
    ((position + offset) * 0.08).sin() * 30.0
}

/// Point `index` of `count` evenly spaced on a circle of `radius` percent
pub fn radial(index: usize, count: usize, radius: f64) -> Position {
    if count == 0 {
        return Position::new(50.0, 50.0);
    }
    let angle = index as f64 / count as f64 * 2.0 * PI;
    Position::new(50.0 + radius * angle.cos(), 50.0 + radius * angle.sin())
}

/// Parallax nudge contributed by the heartbeat phase
pub fn heartbeat_influence(phase: u32) -> f64 {
    (f64::from(phase) * PI * 0.5).sin() * 2.0
}

/// One decorative particle
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub position: Position,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

/// A fixed number of particles with deterministic placement
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Index-derived placement and timing; safe for server rendering
    pub fn deterministic(count: u32, params: ScatterParams) -> Self {
        let particles = (0..count)
            .map(|i| Particle {
                position: scatter(i, params),
                delay_secs: f64::from(i.wrapping_mul(7) % 50) / 10.0,
                duration_secs: 15.0 + f64::from(i.wrapping_mul(3) % 10),
            })
            .collect();
        Self { particles }
    }

    /// Randomize cosmetic timing, keeping positions. Only call once hydrated.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            particle.delay_secs = rng.gen_range(0.0..5.0);
            particle.duration_secs = rng.gen_range(15.0..25.0);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
