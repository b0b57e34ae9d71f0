//! Feature map
//!
//! Four features sit on a heart-shaped map that pulses with a heartbeat.
//! Selecting a node opens its detail card; clicking anywhere outside the
//! map closes it again.

use std::time::Duration;

use pakhims_widgets::{
    Animator, Environment, Event, HydrationGate, IntervalAnimation, Node, Point, Rect,
    SectionInfo, SectionWidget, Selection, SiteConfig, TimerControl, Transition, VisualState,
};

use super::{fade_up, heading, placed};
use crate::content::{find_feature, FeatureDescriptor, FEATURES, FEATURE_TRUST_INDICATORS};

pub const HEART_PATH: &str = "M50,25 C50,15 35,5 25,15 C15,5 0,15 0,25 C0,35 25,60 50,85 C75,60 100,35 100,25 C100,15 85,5 75,15 C65,5 50,15 50,25 Z";

const PULSE_MS: u64 = 100;
const CARD_MS: u64 = 300;

pub struct Features {
    gate: HydrationGate,
    selection: Selection<u32>,
    heartbeat: IntervalAnimation,
    suspended: bool,
    bounds: Rect,
}

impl Features {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            selection: Selection::new(),
            heartbeat: IntervalAnimation::new(config.timing.heartbeat(), 2),
            suspended: false,
            bounds: Rect::new(0.0, 0.0, 1152.0, 600.0),
        }
    }

    /// Map bounds in viewport coordinates
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn select(&mut self, id: u32) {
        self.selection.select(id);
    }

    pub fn hover(&mut self, id: Option<u32>) {
        self.selection.hover(id);
    }

    /// Close button or backdrop click on the detail card
    pub fn close_detail(&mut self) {
        self.selection.clear();
    }

    /// Feature whose card is open. An unknown id opens nothing.
    pub fn selected_feature(&self) -> Option<&'static FeatureDescriptor> {
        self.selection.selected().and_then(find_feature)
    }

    pub fn hovered(&self) -> Option<u32> {
        self.selection.hovered()
    }

    fn is_beating(&self) -> bool {
        self.heartbeat.value() == 0
    }

    fn pulse(&self, animator: &dyn Animator) -> Option<Transition> {
        let scale = if self.is_beating() { 1.1 } else { 1.0 };
        self.gate.motion(
            animator,
            VisualState::IDENTITY,
            VisualState::IDENTITY.with_scale(scale),
            Duration::from_millis(PULSE_MS),
        )
    }

    fn feature_node(
        &self,
        feature: &FeatureDescriptor,
        index: usize,
        animator: &dyn Animator,
    ) -> Node {
        let highlighted =
            self.selection.is_hovered(feature.id) || self.selection.is_selected(feature.id);
        let motion = if highlighted {
            self.gate.motion(
                animator,
                VisualState::IDENTITY,
                VisualState::IDENTITY.with_scale(1.2),
                Duration::from_millis(CARD_MS),
            )
        } else {
            self.gate.motion(
                animator,
                VisualState::HIDDEN.with_scale(0.0),
                VisualState::IDENTITY,
                Duration::from_millis(600 + 200 * index as u64),
            )
        };
        placed("button", feature.position)
            .id(format!("feature-{}", feature.id))
            .attr("icon", feature.icon.name())
            .attr("data-highlighted", highlighted.to_string())
            .style(feature.color.style())
            .motion(motion)
            .child(Node::new("span").text(feature.title))
            .maybe_child(
                self.selection
                    .is_hovered(feature.id)
                    .then(|| Node::new("small").text(feature.stat_label)),
            )
    }

    fn detail_card(&self, feature: &FeatureDescriptor, animator: &dyn Animator) -> Node {
        Node::new("div")
            .id("feature-detail")
            .attr("role", "dialog")
            .motion(self.gate.motion(
                animator,
                VisualState::HIDDEN.with_scale(0.8).with_offset(0.0, 50.0),
                VisualState::IDENTITY,
                Duration::from_millis(CARD_MS),
            ))
            .child(Node::new("button").attr("aria-label", "Close"))
            .child(
                Node::new("i")
                    .attr("icon", feature.icon.name())
                    .style(feature.color.style()),
            )
            .child(Node::new("h3").text(feature.title))
            .child(Node::new("p").text(feature.description))
            .child(
                Node::new("div")
                    .child(Node::new("strong").text(feature.stat_label))
                    .child(Node::new("small").text("Performance Metric")),
            )
            .child(Node::new("button").text("Learn More"))
    }
}

impl TimerControl for Features {
    fn stop_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = true;
        self.heartbeat.stop(env);
    }

    fn start_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = false;
        self.heartbeat.sync(env, self.gate.is_open());
    }
}

impl SectionWidget for Features {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Features",
            id: "features",
            description: "Heartbeat feature map with detail cards",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                if self.gate.open() {
                    self.selection.attach(env);
                    self.heartbeat.sync(env, !self.suspended);
                }
            }
            Event::Timer(timer) => {
                self.heartbeat.on_timer(*timer);
            }
            Event::PointerDown(point) => {
                self.outside_click(*point);
            }
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.selection.detach(env);
        self.heartbeat.stop(env);
        self.heartbeat.reset();
        self.gate.close();
        self.suspended = false;
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let pulse = self.pulse(animator);
        let map = Node::new("div")
            .attr("class", "feature-map")
            .child(
                Node::new("svg")
                    .attr("viewBox", "0 0 100 100")
                    .child(Node::new("path").attr("d", HEART_PATH).motion(pulse)),
            )
            .children(
                FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| self.feature_node(feature, i, animator)),
            );

        let trust = Node::new("div")
            .attr("class", "trust")
            .motion(fade_up(&self.gate, animator, 30.0))
            .child(Node::new("h3").text("Vital Signs of Trust"))
            .child(Node::new("p").text("PAKHIMS is built on a foundation of reliability and care"))
            .children(FEATURE_TRUST_INDICATORS.iter().map(|indicator| {
                Node::new("div")
                    .attr("icon", indicator.icon.name())
                    .child(Node::new("strong").text(indicator.label))
                    .child(Node::new("small").text(indicator.value))
            }));

        Node::new("section")
            .id("features")
            .child(heading(
                "Your Healthcare Journey",
                "Explore PAKHIMS's Heartbeat",
                "Navigate your healthcare with ease, guided by our innovative features and trusted care.",
                fade_up(&self.gate, animator, 30.0),
            ))
            .child(map)
            .maybe_child(
                self.selected_feature()
                    .map(|feature| self.detail_card(feature, animator)),
            )
            .child(trust)
    }
}

impl Features {
    fn outside_click(&mut self, point: Point) -> bool {
        let closed = self.selection.on_pointer_down(self.bounds, point);
        if closed {
            ::log::debug!("Feature card closed by outside click");
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::{EasedAnimator, ListenerKind, VirtualEnvironment};

    fn hydrated(env: &mut VirtualEnvironment) -> Features {
        let mut features = Features::new(&SiteConfig::default());
        features.mount(env);
        features.handle_event(env, &Event::Hydrated);
        features
    }

    #[test]
    fn test_select_opens_detail_card() {
        let mut env = VirtualEnvironment::new();
        let mut features = hydrated(&mut env);
        features.select(FEATURES[1].id);

        let tree = features.render(&env, &EasedAnimator::default());
        let card = tree.find("feature-detail").map(|n| n.text_content());
        assert!(card.is_some_and(|text| text.contains(FEATURES[1].title)));
    }

    #[test]
    fn test_unknown_id_renders_no_card() {
        let mut env = VirtualEnvironment::new();
        let mut features = hydrated(&mut env);
        features.select(99);
        assert!(features.selected_feature().is_none());
        let tree = features.render(&env, &EasedAnimator::default());
        assert!(tree.find("feature-detail").is_none());
    }

    #[test]
    fn test_outside_click_closes_card() {
        let mut env = VirtualEnvironment::new();
        let mut features = hydrated(&mut env);
        features.set_bounds(Rect::new(0.0, 1000.0, 1000.0, 600.0));
        features.select(FEATURES[0].id);

        features.handle_event(&mut env, &Event::PointerDown(Point::new(500.0, 1200.0)));
        assert!(features.selected_feature().is_some());
        features.handle_event(&mut env, &Event::PointerDown(Point::new(500.0, 200.0)));
        assert!(features.selected_feature().is_none());
    }

    #[test]
    fn test_listener_and_heartbeat_only_after_hydration() {
        let mut env = VirtualEnvironment::new();
        let mut features = Features::new(&SiteConfig::default());
        features.mount(&mut env);
        assert_eq!(env.listener_count(ListenerKind::PointerDown), 0);
        assert_eq!(env.active_timer_count(), 0);

        features.handle_event(&mut env, &Event::Hydrated);
        assert_eq!(env.listener_count(ListenerKind::PointerDown), 1);
        assert_eq!(env.active_timer_count(), 1);

        features.unmount(&mut env);
        assert_eq!(env.total_listener_count(), 0);
        assert_eq!(env.active_timer_count(), 0);
    }

    #[test]
    fn test_hover_shows_stat_label() {
        let mut env = VirtualEnvironment::new();
        let mut features = hydrated(&mut env);
        features.hover(Some(FEATURES[2].id));
        let tree = features.render(&env, &EasedAnimator::default());
        let node = tree.find(&format!("feature-{}", FEATURES[2].id));
        assert_eq!(node.and_then(|n| n.attr_value("data-highlighted")), Some("true"));
        assert!(node.is_some_and(|n| n.text_content().contains(FEATURES[2].stat_label)));
    }
}
