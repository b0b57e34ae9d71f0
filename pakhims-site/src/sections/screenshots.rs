//! Screenshot gallery with a modal viewer
//!
//! Cards open a full-screen viewer; clicking a hotspot on a card opens the
//! viewer and zooms into that hotspot shortly after. Keyboard control and
//! autoplay live in [`ModalViewer`].

use std::time::Duration;

use pakhims_widgets::layout::GALLERY_PARTICLES;
use pakhims_widgets::{
    Animator, AssetResolver, Environment, Event, HydrationGate, ImageSlot, Key, KeyOutcome,
    ListenerId, ListenerKind, ModalViewer, NavSource, Node, ParticleField, SectionInfo,
    SectionWidget, SiteConfig, Timer, TimerControl, ViewerState, VisualState,
};

use super::{fade_up, heading, placed};
use crate::content::{Device, ScreenshotRecord, SCREENSHOTS};

const PARTICLE_COUNT: u32 = 8;

/// Zoom scheduled by a hotspot click on a card
#[derive(Clone, Copy, Debug)]
struct PendingZoom {
    timer: Timer,
    shot: usize,
    section: usize,
}

pub struct Screenshots {
    gate: HydrationGate,
    viewer: ModalViewer,
    zoom_delay: Duration,
    pending_zoom: Option<PendingZoom>,
    hovered_card: Option<usize>,
    particles: ParticleField,
    images: Vec<ImageSlot>,
    resolver: AssetResolver,
    key_listener: Option<ListenerId>,
}

impl Screenshots {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            viewer: ModalViewer::new(SCREENSHOTS.len(), config.timing.screenshot_autoplay()),
            zoom_delay: config.timing.hotspot_zoom_delay(),
            pending_zoom: None,
            hovered_card: None,
            particles: ParticleField::deterministic(PARTICLE_COUNT, GALLERY_PARTICLES),
            images: SCREENSHOTS.iter().map(|shot| ImageSlot::new(shot.src)).collect(),
            resolver: AssetResolver::new(&config.assets),
            key_listener: None,
        }
    }

    pub fn viewer_state(&self) -> ViewerState {
        self.viewer.state()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.viewer.is_autoplaying()
    }

    /// Id of the zoomed hotspot of the current screenshot
    pub fn zoomed_section(&self) -> Option<&'static str> {
        let section = self.viewer.focused_section()?;
        self.current()?.sections.get(section).map(|s| s.id)
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn hover_card(&mut self, index: Option<usize>) {
        self.hovered_card = index.filter(|i| *i < SCREENSHOTS.len());
    }

    /// Card click
    pub fn open(&mut self, env: &mut dyn Environment, index: usize) -> bool {
        self.cancel_zoom(env);
        let opened = self.viewer.open_at(env, index);
        if opened {
            ::log::debug!("Opened screenshot {}", index);
        }
        opened
    }

    pub fn close(&mut self, env: &mut dyn Environment) {
        self.cancel_zoom(env);
        self.viewer.close(env);
    }

    /// Hotspot click on a card: open the viewer, then zoom after a short delay.
    /// A hidden page zooms at once.
    pub fn open_hotspot(&mut self, env: &mut dyn Environment, shot: usize, section: usize) -> bool {
        let in_range = SCREENSHOTS
            .get(shot)
            .is_some_and(|record| section < record.sections.len());
        if !in_range || !self.open(env, shot) {
            return false;
        }
        if self.viewer.is_paused() {
            return self.zoom(section);
        }
        self.pending_zoom = Some(PendingZoom {
            timer: env.start_timeout(self.zoom_delay),
            shot,
            section,
        });
        true
    }

    /// Hotspot click inside the open viewer
    pub fn zoom(&mut self, section: usize) -> bool {
        let count = self.current().map_or(0, |shot| shot.sections.len());
        self.viewer.focus_section(section, count)
    }

    pub fn clear_zoom(&mut self) {
        self.viewer.clear_focus();
    }

    pub fn next(&mut self, env: &mut dyn Environment) {
        self.viewer.next(env, NavSource::User);
    }

    pub fn prev(&mut self, env: &mut dyn Environment) {
        self.viewer.prev(env, NavSource::User);
    }

    /// Thumbnail click
    pub fn go_to(&mut self, env: &mut dyn Environment, index: usize) -> bool {
        self.viewer.go_to(env, index)
    }

    pub fn toggle_autoplay(&mut self, env: &mut dyn Environment) -> bool {
        self.viewer.toggle_autoplay(env)
    }

    pub fn handle_key(&mut self, env: &mut dyn Environment, key: Key) -> KeyOutcome {
        let count = self.current().map_or(0, |shot| shot.sections.len());
        let outcome = self.viewer.handle_key(env, key, count);
        if outcome == KeyOutcome::Closed {
            self.cancel_zoom(env);
        }
        outcome
    }

    fn current(&self) -> Option<&'static ScreenshotRecord> {
        match self.viewer.state() {
            ViewerState::Open(index) => SCREENSHOTS.get(index),
            ViewerState::Closed => None,
        }
    }

    fn cancel_zoom(&mut self, env: &mut dyn Environment) {
        if let Some(pending) = self.pending_zoom.take() {
            env.stop_timer(pending.timer);
        }
    }

    fn on_timer(&mut self, env: &mut dyn Environment, timer: Timer) {
        match self.pending_zoom {
            Some(pending) if pending.timer == timer => {
                self.pending_zoom = None;
                if self.viewer.state() == ViewerState::Open(pending.shot) {
                    self.zoom(pending.section);
                }
            }
            _ => {
                self.viewer.on_timer(env, timer);
            }
        }
    }

    fn image_failed(&mut self, path: &str) {
        for (slot, shot) in self.images.iter_mut().zip(SCREENSHOTS.iter()) {
            if slot.on_error(&self.resolver, path) {
                ::log::warn!("Screenshot {} failed to load, using placeholder", shot.title);
            }
        }
    }

    fn image_src(&self, env: &dyn Environment, index: usize) -> String {
        self.images
            .get(index)
            .map(|slot| slot.current(&self.resolver, env))
            .unwrap_or_else(|| self.resolver.placeholder().to_string())
    }

    fn frame(device: Device) -> Node {
        match device {
            Device::Browser => Node::new("div")
                .attr("class", "browser-chrome")
                .child(Node::new("span").text("pakhims.com")),
            Device::Phone => Node::new("div").attr("class", "phone-notch"),
        }
    }

    fn card(
        &self,
        env: &dyn Environment,
        index: usize,
        shot: &ScreenshotRecord,
        animator: &dyn Animator,
    ) -> Node {
        let hovered = self.hovered_card == Some(index);
        let hotspots = shot.sections.iter().enumerate().map(|(i, section)| {
            placed("button", section.position)
                .attr("data-hotspot", section.id)
                .attr("title", section.label)
                .style(section.color.style())
                .motion(self.gate.motion(
                    animator,
                    VisualState::HIDDEN.with_scale(0.0),
                    VisualState::IDENTITY,
                    Duration::from_millis(500 + 200 * index as u64 + 100 * i as u64),
                ))
                .text(section.icon)
        });
        Node::new("article")
            .id(format!("screenshot-{}", index))
            .attr("data-device", format!("{:?}", shot.device).to_lowercase())
            .attr("data-hovered", hovered.to_string())
            .style(shot.color.style())
            .motion(self.gate.motion(
                animator,
                VisualState::HIDDEN.with_offset(0.0, 50.0).with_scale(0.9),
                VisualState::IDENTITY,
                Duration::from_millis(200 + 100 * index as u64),
            ))
            .child(Self::frame(shot.device))
            .child(
                Node::new("img")
                    .attr("src", self.image_src(env, index))
                    .attr("alt", shot.alt)
                    .attr("loading", "lazy"),
            )
            .children(hotspots)
            .child(Node::new("span").attr("class", "category").text(shot.category))
            .child(Node::new("h3").text(shot.title))
            .child(Node::new("p").text(shot.description))
    }

    fn modal(
        &self,
        env: &dyn Environment,
        index: usize,
        shot: &ScreenshotRecord,
        animator: &dyn Animator,
    ) -> Node {
        let focused = self.viewer.focused_section();
        let hotspots = shot.sections.iter().enumerate().map(|(i, section)| {
            let zoomed = focused == Some(i);
            placed("button", section.position)
                .attr("data-hotspot", section.id)
                .attr("data-zoomed", zoomed.to_string())
                .style(section.color.style())
                .motion(self.gate.motion(
                    animator,
                    VisualState::HIDDEN.with_scale(0.0),
                    VisualState::IDENTITY
                        .with_scale(if zoomed { 1.5 } else { 1.0 })
                        .with_opacity(if zoomed { 1.0 } else { 0.8 }),
                    Duration::from_millis(300),
                ))
                .text(section.icon)
        });
        let zoom_panel = focused.and_then(|i| shot.sections.get(i)).map(|section| {
            Node::new("div")
                .id("zoom-panel")
                .style(section.color.style())
                .child(Node::new("h4").text(section.label))
                .child(Node::new("p").text(section.description))
                .child(Node::new("button").attr("aria-label", "Close zoom"))
        });
        let thumbnails = SCREENSHOTS.iter().enumerate().map(|(i, thumb)| {
            Node::new("button")
                .attr("aria-label", thumb.title)
                .attr("aria-current", (i == index).to_string())
        });
        let stats = shot.stats.iter().map(|(label, value)| {
            Node::new("div")
                .child(Node::new("strong").text(*value))
                .child(Node::new("small").text(*label))
        });

        Node::new("div")
            .id("screenshot-modal")
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .motion(self.gate.motion(
                animator,
                VisualState::HIDDEN.with_scale(0.8).with_offset(0.0, 100.0),
                VisualState::IDENTITY,
                Duration::from_millis(300),
            ))
            .child(
                Node::new("header")
                    .child(Node::new("h3").text(shot.title))
                    .child(Node::new("p").text(shot.subtitle))
                    .child(
                        Node::new("button")
                            .id("autoplay-toggle")
                            .attr("aria-pressed", self.viewer.is_autoplaying().to_string()),
                    )
                    .child(Node::new("button").attr("aria-label", "Close")),
            )
            .child(Node::new("button").attr("aria-label", "Previous"))
            .child(Node::new("button").attr("aria-label", "Next"))
            .child(
                Node::new("figure")
                    .id("modal-image")
                    .child(Self::frame(shot.device))
                    .child(
                        Node::new("img")
                            .attr("src", self.image_src(env, index))
                            .attr("alt", shot.alt),
                    )
                    .children(hotspots),
            )
            .maybe_child(zoom_panel)
            .child(Node::new("p").text(shot.long_description))
            .child(Node::new("div").attr("class", "stats").children(stats))
            .child(Node::new("nav").children(thumbnails))
    }
}

impl TimerControl for Screenshots {
    fn stop_timers(&mut self, env: &mut dyn Environment) {
        self.cancel_zoom(env);
        self.viewer.pause(env);
    }

    fn start_timers(&mut self, env: &mut dyn Environment) {
        self.viewer.resume(env);
    }
}

impl SectionWidget for Screenshots {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Screenshots",
            id: "screenshots",
            description: "Platform screenshots with hotspots and a modal viewer",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                if self.gate.open() {
                    self.particles.reshuffle(&mut rand::thread_rng());
                    if self.key_listener.is_none() {
                        self.key_listener = Some(env.add_listener(ListenerKind::KeyDown));
                    }
                }
            }
            Event::KeyDown(key) if self.key_listener.is_some() => {
                self.handle_key(env, *key);
            }
            Event::Timer(timer) => self.on_timer(env, *timer),
            Event::ImageError(path) => self.image_failed(path),
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.close(env);
        self.viewer.resume(env);
        if let Some(listener) = self.key_listener.take() {
            env.remove_listener(listener);
        }
        self.hovered_card = None;
        self.particles = ParticleField::deterministic(PARTICLE_COUNT, GALLERY_PARTICLES);
        self.gate.close();
    }

    fn render(&self, env: &dyn Environment, animator: &dyn Animator) -> Node {
        let particles = self.particles.particles().iter().map(|particle| {
            placed("span", particle.position)
                .attr("class", "particle")
                .attr("data-delay", format!("{}s", particle.delay_secs))
                .attr("data-duration", format!("{}s", particle.duration_secs))
        });
        let cards = SCREENSHOTS
            .iter()
            .enumerate()
            .map(|(i, shot)| self.card(env, i, shot, animator));
        let modal = self.current().map(|shot| self.modal(env, self.viewer.index(), shot, animator));

        Node::new("section")
            .id("screenshots")
            .child(Node::new("div").attr("class", "particles").children(particles))
            .child(heading(
                "Platform Showcase",
                "See PAKHIMS in Action",
                "Experience our comprehensive healthcare platforms designed for seamless patient care, professional management, and innovative health solutions.",
                fade_up(&self.gate, animator, 20.0),
            ))
            .child(Node::new("div").attr("class", "gallery").children(cards))
            .child(
                Node::new("div")
                    .attr("class", "cta")
                    .motion(fade_up(&self.gate, animator, 30.0))
                    .child(Node::new("h3").text("Ready to Transform Healthcare?"))
                    .child(Node::new("p").text(
                        "Join thousands of healthcare professionals and patients who trust PAKHIMS for their medical needs.",
                    ))
                    .child(Node::new("button").text("Start Your Journey"))
                    .child(Node::new("button").text("Watch Demo")),
            )
            .maybe_child(modal)
    }
}
