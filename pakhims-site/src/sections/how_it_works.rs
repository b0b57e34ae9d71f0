//! Healing-wave journey
//!
//! Four steps ride a sine wave that scrolls once hydrated. Before that the
//! wave and the steps sit at offset zero so the server markup is stable.

use std::time::Duration;

use pakhims_widgets::layout::{
    drift, float_period_secs, wave_bob, wave_path, JOURNEY_PARTICLES,
};
use pakhims_widgets::{
    Animator, Environment, Event, HydrationGate, IntervalAnimation, Node, ParticleField, Point,
    Rect, SectionInfo, SectionWidget, Selection, SiteConfig, TimerControl, VisualState,
};

use super::{fade_up, heading, placed};
use crate::content::{find_step, JourneyStep, JOURNEY_STEPS, JOURNEY_TRUST_FEATURES};

const WAVE_MODULUS: u32 = 360;
const MAIN_AMPLITUDE: f64 = 15.0;
const ECHO_AMPLITUDE: f64 = 8.0;
const ECHO_SHIFT: f64 = 30.0;
const PARTICLE_COUNT: u32 = 12;

pub struct HowItWorks {
    gate: HydrationGate,
    wave: IntervalAnimation,
    selection: Selection<u32>,
    particles: ParticleField,
    suspended: bool,
    bounds: Rect,
}

impl HowItWorks {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            wave: IntervalAnimation::new(config.timing.wave_tick(), WAVE_MODULUS),
            selection: Selection::new(),
            particles: ParticleField::deterministic(PARTICLE_COUNT, JOURNEY_PARTICLES),
            suspended: false,
            bounds: Rect::new(0.0, 0.0, 1152.0, 400.0),
        }
    }

    /// Wave phase in use; zero until hydrated
    pub fn wave_offset(&self) -> f64 {
        self.gate.select(f64::from(self.wave.value()), 0.0)
    }

    /// Vertical bob of a step in px
    pub fn bob(&self, step: &JourneyStep) -> f64 {
        if !self.gate.is_open() {
            return 0.0;
        }
        let bob = wave_bob(step.position, self.wave_offset());
        if bob.is_finite() {
            bob
        } else {
            0.0
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Step click; ignored until hydrated
    pub fn select(&mut self, id: u32) -> bool {
        if !self.gate.is_open() {
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn close_detail(&mut self) {
        self.selection.clear();
    }

    pub fn selected_step(&self) -> Option<&'static JourneyStep> {
        self.selection.selected().and_then(find_step)
    }

    fn sync_wave(&mut self, env: &mut dyn Environment) {
        self.wave.sync(env, self.gate.is_open() && !self.suspended);
    }

    fn outside_click(&mut self, point: Point) {
        if self.selection.on_pointer_down(self.bounds, point) {
            ::log::debug!("Journey step detail closed by outside click");
        }
    }

    fn step_node(&self, step: &JourneyStep, index: usize, animator: &dyn Animator) -> Node {
        let breathe = self.gate.motion(
            animator,
            VisualState::IDENTITY,
            VisualState::IDENTITY.with_scale(1.05),
            Duration::from_millis(600 + 100 * index as u64),
        );
        Node::new("button")
            .id(format!("step-{}", step.id))
            .attr("left", format!("{}%", step.position))
            .attr("top", format!("calc(50% + {}px)", self.bob(step)))
            .attr("data-shape", format!("{:?}", step.shape).to_lowercase())
            .attr("data-rotation", step.shape.rotation().to_string())
            .attr("icon", step.icon.name())
            .style(step.color.style())
            .motion(breathe)
            .child(Node::new("span").text(step.title))
    }

    fn detail_card(&self, step: &JourneyStep, animator: &dyn Animator) -> Node {
        Node::new("div")
            .id("step-detail")
            .attr("role", "dialog")
            .motion(self.gate.motion(
                animator,
                VisualState::HIDDEN.with_scale(0.8).with_offset(0.0, 50.0),
                VisualState::IDENTITY,
                Duration::from_millis(300),
            ))
            .child(Node::new("button").attr("aria-label", "Close"))
            .child(
                Node::new("i")
                    .attr("icon", step.icon.name())
                    .attr("data-shape", format!("{:?}", step.shape).to_lowercase())
                    .style(step.color.style()),
            )
            .child(Node::new("h3").text(step.title))
            .child(Node::new("p").text(step.description))
            .child(Node::new("ul").children(step.details.iter().map(|d| Node::new("li").text(*d))))
            .child(Node::new("button").text("Learn More"))
    }
}

impl TimerControl for HowItWorks {
    fn stop_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = true;
        self.sync_wave(env);
    }

    fn start_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = false;
        self.sync_wave(env);
    }
}

impl SectionWidget for HowItWorks {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "How It Works",
            id: "how-it-works",
            description: "Patient journey on an animated wave",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                if self.gate.open() {
                    self.selection.attach(env);
                    self.sync_wave(env);
                }
            }
            Event::Timer(timer) => {
                self.wave.on_timer(*timer);
            }
            Event::PointerDown(point) => self.outside_click(*point),
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.selection.detach(env);
        self.wave.stop(env);
        self.wave.reset();
        self.gate.close();
        self.suspended = false;
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let offset = self.wave_offset();

        let particles = self.particles.particles().iter().enumerate().map(|(i, particle)| {
            let i = i as u32;
            placed("span", particle.position)
                .attr("class", "particle")
                .motion(self.gate.motion(
                    animator,
                    VisualState::IDENTITY.with_scale(0.5).with_opacity(0.1),
                    VisualState::IDENTITY
                        .with_offset(drift(i), -50.0)
                        .with_opacity(0.5),
                    Duration::from_secs_f64(float_period_secs(i)),
                ))
        });

        let waves = Node::new("svg")
            .id("healing-wave")
            .attr("viewBox", "0 0 100 100")
            .child(
                Node::new("path")
                    .attr("class", "wave")
                    .attr("d", wave_path(offset, MAIN_AMPLITUDE)),
            )
            .child(
                Node::new("path")
                    .attr("class", "wave-echo")
                    .attr("d", wave_path(offset + ECHO_SHIFT, ECHO_AMPLITUDE)),
            );

        let steps = JOURNEY_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| self.step_node(step, i, animator));

        let trust = Node::new("div")
            .attr("class", "trust")
            .motion(fade_up(&self.gate, animator, 30.0))
            .child(Node::new("h3").text("Why Choose PAKHIMS?"))
            .child(Node::new("p").text("Harmonized for trust, speed, and care"))
            .children(JOURNEY_TRUST_FEATURES.iter().map(|(icon, label, description, color)| {
                Node::new("div")
                    .attr("icon", icon.name())
                    .style(color.style())
                    .child(Node::new("strong").text(*label))
                    .child(Node::new("small").text(*description))
            }));

        let outline = Node::new("div")
            .attr("class", "sr-only")
            .child(Node::new("h3").text("How PAKHIMS Works - Step by Step"))
            .child(Node::new("ol").children(JOURNEY_STEPS.iter().map(|step| {
                Node::new("li")
                    .child(Node::new("strong").text(step.title))
                    .child(Node::new("span").text(step.description))
            })));

        Node::new("section")
            .id("how-it-works")
            .child(Node::new("div").attr("class", "particles").children(particles))
            .child(heading(
                "🎵 Your Healing Symphony",
                "How PAKHIMS Works Magic",
                "Experience our revolutionary healthcare process, orchestrated for your ultimate care and convenience.",
                fade_up(&self.gate, animator, 30.0),
            ))
            .child(Node::new("div").attr("class", "journey").child(waves).children(steps))
            .maybe_child(self.selected_step().map(|step| self.detail_card(step, animator)))
            .child(trust)
            .child(outline)
    }
}
