//! Audience wheel
//!
//! Renders the stacked mobile list until hydrated. Afterwards a viewport at
//! or above the breakpoint gets the radial wheel.

use std::time::Duration;

use serde::Serialize;

use pakhims_widgets::layout::radial;
use pakhims_widgets::{
    Animator, Environment, Event, HydrationGate, ListenerId, ListenerKind, Node, SectionInfo,
    SectionWidget, SiteConfig, TimerControl, VisualState,
};

use super::{fade_up, heading, placed};
use crate::content::AUDIENCES;

const WHEEL_RADIUS: f64 = 35.0;
const WHEEL_WAVE: &str = "M0,50 Q25,30 50,50 T100,50 V100 H0 Z";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLayout {
    List,
    Wheel,
}

pub struct WhoItsFor {
    gate: HydrationGate,
    is_mobile: bool,
    breakpoint: f64,
    resize_listener: Option<ListenerId>,
}

impl WhoItsFor {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            is_mobile: true,
            breakpoint: config.layout.mobile_breakpoint,
            resize_listener: None,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn layout(&self) -> AudienceLayout {
        if self.gate.is_open() && !self.is_mobile {
            AudienceLayout::Wheel
        } else {
            AudienceLayout::List
        }
    }

    fn measure(&mut self, env: &dyn Environment) {
        let was_mobile = self.is_mobile;
        self.is_mobile = env.viewport_width() < self.breakpoint;
        if was_mobile != self.is_mobile {
            ::log::debug!("Audience layout now {:?}", self.layout());
        }
    }

    fn wheel(&self, animator: &dyn Animator) -> Node {
        let spokes = AUDIENCES.iter().enumerate().map(|(i, audience)| {
            placed("div", radial(i, AUDIENCES.len(), WHEEL_RADIUS))
                .attr("class", "spoke")
                .attr("icon", audience.icon.name())
                .style(audience.color.style())
                .motion(self.gate.motion(
                    animator,
                    VisualState::HIDDEN.with_scale(0.8),
                    VisualState::IDENTITY,
                    Duration::from_millis(500 + 100 * i as u64),
                ))
                .child(Node::new("h3").text(audience.title))
                .child(Node::new("p").text(audience.description))
        });
        Node::new("div")
            .id("audience-wheel")
            .children(spokes)
            .child(
                Node::new("svg")
                    .attr("viewBox", "0 0 100 100")
                    .child(Node::new("path").attr("d", WHEEL_WAVE)),
            )
    }

    fn list(&self, animator: &dyn Animator) -> Node {
        Node::new("div")
            .id("audience-list")
            .children(AUDIENCES.iter().enumerate().map(|(i, audience)| {
                Node::new("div")
                    .attr("icon", audience.icon.name())
                    .style(audience.color.style())
                    .motion(self.gate.motion(
                        animator,
                        VisualState::HIDDEN.with_offset(0.0, 20.0),
                        VisualState::IDENTITY,
                        Duration::from_millis(500 + 100 * i as u64),
                    ))
                    .child(Node::new("h3").text(audience.title))
                    .child(Node::new("p").text(audience.description))
            }))
    }
}

impl TimerControl for WhoItsFor {
    fn stop_timers(&mut self, _env: &mut dyn Environment) {}

    fn start_timers(&mut self, _env: &mut dyn Environment) {}
}

impl SectionWidget for WhoItsFor {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Who It's For",
            id: "who-its-for",
            description: "Audiences served by the platform",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                if self.gate.open() {
                    self.measure(env);
                    if self.resize_listener.is_none() {
                        self.resize_listener = Some(env.add_listener(ListenerKind::Resize));
                    }
                }
            }
            Event::Resize if self.resize_listener.is_some() => self.measure(env),
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        if let Some(listener) = self.resize_listener.take() {
            env.remove_listener(listener);
        }
        self.is_mobile = true;
        self.gate.close();
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let body = match self.layout() {
            AudienceLayout::Wheel => self.wheel(animator),
            AudienceLayout::List => self.list(animator),
        };
        Node::new("section")
            .id("who-its-for")
            .attr("data-layout", format!("{:?}", self.layout()).to_lowercase())
            .child(heading(
                "Who Benefits",
                "Who It’s For",
                "PAKHIMS connects a diverse ecosystem to revolutionize healthcare.",
                fade_up(&self.gate, animator, 0.0),
            ))
            .child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::{EasedAnimator, VirtualEnvironment};

    fn desktop() -> VirtualEnvironment {
        let mut env = VirtualEnvironment::new();
        env.set_viewport(1280.0, 800.0);
        env
    }

    #[test]
    fn test_list_before_hydration_even_on_desktop() {
        let mut env = desktop();
        let mut audience = WhoItsFor::new(&SiteConfig::default());
        audience.mount(&mut env);
        assert_eq!(audience.layout(), AudienceLayout::List);
        assert_eq!(env.listener_count(ListenerKind::Resize), 0);

        let tree = audience.render(&env, &EasedAnimator::default());
        assert!(tree.find("audience-list").is_some());
        assert!(tree.find("audience-wheel").is_none());
    }

    #[test]
    fn test_wheel_after_hydration_on_desktop() {
        let mut env = desktop();
        let mut audience = WhoItsFor::new(&SiteConfig::default());
        audience.handle_event(&mut env, &Event::Hydrated);
        assert_eq!(audience.layout(), AudienceLayout::Wheel);

        let tree = audience.render(&env, &EasedAnimator::default());
        let wheel = tree.find("audience-wheel");
        let spokes = wheel.map(|w| w.find_all("div").len()).unwrap_or(0);
        assert_eq!(spokes, 1 + AUDIENCES.len());
    }

    #[test]
    fn test_resize_switches_layout() {
        let mut env = desktop();
        let mut audience = WhoItsFor::new(&SiteConfig::default());
        audience.handle_event(&mut env, &Event::Hydrated);

        env.set_viewport(767.0, 800.0);
        audience.handle_event(&mut env, &Event::Resize);
        assert!(audience.is_mobile());
        assert_eq!(audience.layout(), AudienceLayout::List);

        env.set_viewport(768.0, 800.0);
        audience.handle_event(&mut env, &Event::Resize);
        assert_eq!(audience.layout(), AudienceLayout::Wheel);
    }

    #[test]
    fn test_unmount_removes_resize_listener() {
        let mut env = desktop();
        let mut audience = WhoItsFor::new(&SiteConfig::default());
        audience.handle_event(&mut env, &Event::Hydrated);
        assert_eq!(env.listener_count(ListenerKind::Resize), 1);
        audience.unmount(&mut env);
        assert_eq!(env.listener_count(ListenerKind::Resize), 0);
        assert_eq!(audience.layout(), AudienceLayout::List);
    }
}
