//! Hero section
//!
//! The headline types itself out once hydrated (the server renders it in
//! full), a heartbeat phase drives pulses and parallax, and a click on the
//! background shows a short message. Animations can be switched off; the
//! choice persists in the preference store.

use std::time::Duration;

use pakhims_widgets::config::LinkConfig;
use pakhims_widgets::layout::heartbeat_influence;
use pakhims_widgets::prefs::{animations_enabled, store_animations_enabled};
use pakhims_widgets::{
    Animator, Environment, Event, HydrationGate, IntervalAnimation, ListenerId, ListenerKind,
    Node, Point, Rect, SectionInfo, SectionWidget, SiteConfig, Timer, TimerControl, Typewriter,
    VisualState,
};

use super::placed;
use crate::content::{
    BOOK_APPOINTMENT_LABEL, HEART_MESSAGE, HERO_BADGE, HERO_HEADLINE, HERO_SUBHEADING,
    HERO_TRUST_BADGES, MEDICAL_ICONS, SIGNUP_LABEL,
};

/// Phases per heartbeat cycle
const HEARTBEAT_PHASES: u32 = 4;
/// Pulse length of one beat
const BEAT_MS: u64 = 100;
const PARALLAX_RANGE: f64 = 20.0;

pub struct Hero {
    gate: HydrationGate,
    typewriter: Typewriter,
    heartbeat: IntervalAnimation,
    heart_message: Option<Timer>,
    heart_message_delay: Duration,
    animations_enabled: bool,
    suspended: bool,
    bounds: Rect,
    cursor: Option<Point>,
    over_interactive: bool,
    parallax: (f64, f64),
    listeners: Vec<ListenerId>,
    links: LinkConfig,
}

impl Hero {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            typewriter: Typewriter::new(HERO_HEADLINE, config.timing.typewriter()),
            heartbeat: IntervalAnimation::new(config.timing.heartbeat(), HEARTBEAT_PHASES),
            heart_message: None,
            heart_message_delay: config.timing.heart_message(),
            animations_enabled: true,
            suspended: false,
            bounds: Rect::new(0.0, 0.0, 1280.0, 800.0),
            cursor: None,
            over_interactive: false,
            parallax: (0.0, 0.0),
            listeners: Vec::new(),
            links: config.links.clone(),
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.gate.is_open()
    }

    /// Headline text currently on screen
    pub fn displayed_text(&self) -> &str {
        self.typewriter.displayed()
    }

    pub fn heartbeat_phase(&self) -> u32 {
        self.heartbeat.value()
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    pub fn is_heart_message_visible(&self) -> bool {
        self.gate.is_open() && self.animations_enabled && self.heart_message.is_some()
    }

    /// Parallax offset in px, `(x, y)`
    pub fn parallax(&self) -> (f64, f64) {
        self.parallax
    }

    /// Section bounds in viewport coordinates, reported by the host on layout
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Pointer entered or left a button or link inside the hero
    pub fn set_pointer_over_interactive(&mut self, over: bool) {
        self.over_interactive = over;
    }

    /// Toggle animations and persist the choice
    pub fn set_animations_enabled(&mut self, env: &mut dyn Environment, enabled: bool) {
        self.animations_enabled = enabled;
        store_animations_enabled(env, enabled);
        if !enabled {
            self.dismiss_heart_message(env);
            self.parallax = (0.0, 0.0);
        }
        self.sync_heartbeat(env);
        ::log::info!("Hero animations {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Click on the hero background. Returns whether the message was shown.
    pub fn heart_interaction(&mut self, env: &mut dyn Environment, point: Point) -> bool {
        if !self.gate.is_open() || self.over_interactive || !self.bounds.contains(point) {
            return false;
        }
        if !self.animations_enabled || self.suspended {
            return false;
        }
        self.cursor = Some(point);
        self.dismiss_heart_message(env);
        self.heart_message = Some(env.start_timeout(self.heart_message_delay));
        true
    }

    fn pointer_moved(&mut self, point: Point) {
        if !self.gate.is_open() {
            return;
        }
        self.cursor = Some(point);
        let in_section = self.bounds.contains(point);
        if self.animations_enabled && (!in_section || self.over_interactive) {
            let influence = heartbeat_influence(self.heartbeat.value());
            let center = self.bounds.center();
            let center_x = (point.x - center.x) / self.bounds.width;
            let center_y = (point.y - center.y) / self.bounds.height;
            self.parallax = (
                center_x * PARALLAX_RANGE + influence,
                center_y * PARALLAX_RANGE + influence,
            );
        }
    }

    fn sync_heartbeat(&mut self, env: &mut dyn Environment) {
        let run = self.gate.is_open() && self.animations_enabled && !self.suspended;
        self.heartbeat.sync(env, run);
    }

    fn dismiss_heart_message(&mut self, env: &mut dyn Environment) {
        if let Some(timer) = self.heart_message.take() {
            env.stop_timer(timer);
        }
    }

    fn hydrate(&mut self, env: &mut dyn Environment) {
        if !self.gate.open() {
            return;
        }
        self.animations_enabled = animations_enabled(env);
        if self.suspended {
            self.typewriter.rewind(env);
        } else {
            self.typewriter.start(env);
        }
        self.sync_heartbeat(env);
        if self.listeners.is_empty() {
            self.listeners.push(env.add_listener(ListenerKind::PointerMove));
            self.listeners.push(env.add_listener(ListenerKind::PointerDown));
        }
        ::log::debug!("Hero hydrated, animations enabled: {}", self.animations_enabled);
    }

    fn pulse(&self, animator: &dyn Animator) -> Option<pakhims_widgets::Transition> {
        if !self.animations_enabled {
            return None;
        }
        let scale = if self.heartbeat.value() == 0 { 1.05 } else { 1.0 };
        self.gate.motion(
            animator,
            VisualState::IDENTITY,
            VisualState::IDENTITY.with_scale(scale),
            Duration::from_millis(BEAT_MS),
        )
    }
}

impl TimerControl for Hero {
    fn stop_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = true;
        self.typewriter.stop(env);
        self.heartbeat.stop(env);
        self.dismiss_heart_message(env);
    }

    fn start_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = false;
        if self.gate.is_open() {
            self.typewriter.resume(env);
        }
        self.sync_heartbeat(env);
    }
}

impl SectionWidget for Hero {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Home",
            id: "home",
            description: "Headline, heartbeat animation and booking calls to action",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => self.hydrate(env),
            Event::Timer(timer) => {
                if self.typewriter.on_timer(env, *timer) || self.heartbeat.on_timer(*timer) {
                    return;
                }
                if self.heart_message == Some(*timer) {
                    self.heart_message = None;
                }
            }
            Event::PointerMove(point) => self.pointer_moved(*point),
            Event::PointerDown(point) => {
                self.heart_interaction(env, *point);
            }
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.typewriter.reset(env);
        self.heartbeat.stop(env);
        self.heartbeat.reset();
        self.dismiss_heart_message(env);
        for listener in self.listeners.drain(..) {
            env.remove_listener(listener);
        }
        self.gate.close();
        self.cursor = None;
        self.over_interactive = false;
        self.parallax = (0.0, 0.0);
        self.suspended = false;
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let pulse = self.pulse(animator);
        let parallax = if self.animations_enabled {
            let (x, y) = self.parallax;
            self.gate.motion(
                animator,
                VisualState::IDENTITY,
                VisualState::IDENTITY.with_offset(x, y),
                Duration::from_millis(300),
            )
        } else {
            None
        };

        let icons = MEDICAL_ICONS.iter().map(|icon| {
            placed("i", icon.position)
                .attr("icon", icon.icon.name())
                .attr("size", icon.size.to_string())
                .motion(pulse)
        });

        let message = self.is_heart_message_visible().then(|| {
            let at = self.cursor.unwrap_or_else(|| self.bounds.center());
            Node::new("div")
                .id("heart-message")
                .attr("left", format!("{}px", at.x))
                .attr("top", format!("{}px", at.y - 60.0))
                .motion(self.gate.motion(
                    animator,
                    VisualState::HIDDEN.with_offset(0.0, 20.0).with_scale(0.8),
                    VisualState::IDENTITY.with_offset(0.0, -20.0),
                    self.heart_message_delay,
                ))
                .text(HEART_MESSAGE)
        });

        Node::new("section")
            .id("home")
            .attr("data-heartbeat-phase", self.heartbeat.value().to_string())
            .child(Node::new("div").attr("class", "parallax").motion(parallax).children(icons))
            .child(Node::new("i").id("hero-heart").attr("icon", "heart").motion(pulse))
            .maybe_child(message)
            .child(Node::new("span").attr("class", "badge").text(HERO_BADGE))
            .child(
                Node::new("h1")
                    .child(Node::new("span").id("hero-headline").text(self.typewriter.displayed()))
                    .child(Node::new("span").attr("class", "caret")),
            )
            .child(Node::new("p").motion(pulse).text(HERO_SUBHEADING))
            .child(
                Node::new("div")
                    .attr("class", "cta")
                    .child(
                        Node::new("a")
                            .attr("href", self.links.booking_login.as_str())
                            .text(BOOK_APPOINTMENT_LABEL),
                    )
                    .child(
                        Node::new("a")
                            .attr("href", self.links.signup.as_str())
                            .attr("target", "_blank")
                            .attr("rel", "noopener noreferrer")
                            .text(SIGNUP_LABEL),
                    ),
            )
            .child(Node::new("ul").children(HERO_TRUST_BADGES.iter().map(|(icon, text)| {
                Node::new("li")
                    .attr("icon", icon.name())
                    .motion(pulse)
                    .text(*text)
            })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::prefs::ANIMATIONS_ENABLED_KEY;
    use pakhims_widgets::{EasedAnimator, VirtualEnvironment};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn run(hero: &mut Hero, env: &mut VirtualEnvironment, elapsed: Duration) {
        env.run_for(elapsed, |env, timer| hero.handle_event(env, &Event::Timer(timer)));
    }

    fn hydrated(env: &mut VirtualEnvironment) -> Hero {
        let mut hero = Hero::new(&SiteConfig::default());
        hero.mount(env);
        hero.handle_event(env, &Event::Hydrated);
        hero
    }

    #[test]
    fn test_server_render_shows_full_headline() {
        let env = VirtualEnvironment::new();
        let hero = Hero::new(&SiteConfig::default());
        let tree = hero.render(&env, &EasedAnimator::default());
        assert_eq!(
            tree.find("hero-headline").and_then(|n| n.text.as_deref()),
            Some(HERO_HEADLINE)
        );
        assert!(tree.find("heart-message").is_none());
        assert_eq!(env.active_timer_count(), 0);
    }

    #[test]
    fn test_typewriter_replays_after_hydration() {
        let mut env = VirtualEnvironment::new();
        let mut hero = hydrated(&mut env);
        assert_eq!(hero.displayed_text(), "");

        run(&mut hero, &mut env, ms(700));
        assert_eq!(hero.displayed_text(), "PAKHIMS");
        run(&mut hero, &mut env, ms(10_000));
        assert_eq!(hero.displayed_text(), HERO_HEADLINE);
    }

    #[test]
    fn test_heartbeat_cycles_through_four_phases() {
        let mut env = VirtualEnvironment::new();
        let mut hero = hydrated(&mut env);
        run(&mut hero, &mut env, ms(1500));
        assert_eq!(hero.heartbeat_phase(), 3);
        run(&mut hero, &mut env, ms(500));
        assert_eq!(hero.heartbeat_phase(), 0);
    }

    #[test]
    fn test_stored_preference_disables_heartbeat() {
        let mut env = VirtualEnvironment::new();
        env.set_preference(ANIMATIONS_ENABLED_KEY, "false");
        let mut hero = hydrated(&mut env);
        assert!(!hero.animations_enabled());
        run(&mut hero, &mut env, ms(2000));
        assert_eq!(hero.heartbeat_phase(), 0);
    }

    #[test]
    fn test_toggle_persists_and_stops_heartbeat() {
        let mut env = VirtualEnvironment::new();
        let mut hero = hydrated(&mut env);
        run(&mut hero, &mut env, ms(500));
        assert_eq!(hero.heartbeat_phase(), 1);

        hero.set_animations_enabled(&mut env, false);
        assert_eq!(env.preference(ANIMATIONS_ENABLED_KEY).as_deref(), Some("false"));
        run(&mut hero, &mut env, ms(2000));
        assert_eq!(hero.heartbeat_phase(), 1);

        hero.set_animations_enabled(&mut env, true);
        run(&mut hero, &mut env, ms(500));
        assert_eq!(hero.heartbeat_phase(), 2);
    }

    #[test]
    fn test_suspended_hero_starts_no_timers() {
        let mut env = VirtualEnvironment::new();
        let mut hero = Hero::new(&SiteConfig::default());
        hero.mount(&mut env);
        hero.stop_timers(&mut env);
        hero.handle_event(&mut env, &Event::Hydrated);
        assert_eq!(hero.displayed_text(), "");
        assert!(!hero.heart_interaction(&mut env, Point::new(640.0, 400.0)));
        assert_eq!(env.active_timer_count(), 0);

        hero.start_timers(&mut env);
        run(&mut hero, &mut env, ms(700));
        assert_eq!(hero.displayed_text(), "PAKHIMS");
        assert!(hero.heart_interaction(&mut env, Point::new(640.0, 400.0)));
    }

    #[test]
    fn test_heart_message_times_out() {
        let mut env = VirtualEnvironment::new();
        let mut hero = Hero::new(&SiteConfig::default());
        let inside = Point::new(640.0, 400.0);

        hero.handle_event(&mut env, &Event::PointerDown(inside));
        assert!(!hero.is_heart_message_visible());

        hero.handle_event(&mut env, &Event::Hydrated);
        hero.set_pointer_over_interactive(true);
        assert!(!hero.heart_interaction(&mut env, inside));
        hero.set_pointer_over_interactive(false);

        hero.handle_event(&mut env, &Event::PointerDown(inside));
        assert!(hero.is_heart_message_visible());
        run(&mut hero, &mut env, ms(2400));
        assert!(hero.is_heart_message_visible());
        run(&mut hero, &mut env, ms(100));
        assert!(!hero.is_heart_message_visible());
    }

    #[test]
    fn test_parallax_includes_heartbeat_influence() {
        let mut env = VirtualEnvironment::new();
        let mut hero = hydrated(&mut env);
        hero.set_bounds(Rect::new(0.0, 0.0, 1000.0, 500.0));
        run(&mut hero, &mut env, ms(500));

        hero.set_pointer_over_interactive(true);
        hero.handle_event(&mut env, &Event::PointerMove(Point::new(750.0, 250.0)));
        let (x, y) = hero.parallax();
        assert!((x - 7.0).abs() < 1e-9);
        assert!((y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmount_cancels_everything() {
        let mut env = VirtualEnvironment::new();
        let mut hero = hydrated(&mut env);
        hero.handle_event(&mut env, &Event::PointerDown(Point::new(10.0, 10.0)));
        assert!(env.active_timer_count() >= 3);
        assert_eq!(env.total_listener_count(), 2);

        hero.unmount(&mut env);
        assert_eq!(env.active_timer_count(), 0);
        assert_eq!(env.total_listener_count(), 0);
        assert_eq!(hero.displayed_text(), HERO_HEADLINE);
    }
}
