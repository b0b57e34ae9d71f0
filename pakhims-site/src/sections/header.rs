//! Fixed site header
//!
//! Slides out while the page scrolls down past the hide threshold and back
//! on any upward scroll. Highlights the active section and navigates with
//! a smooth scroll that leaves room for the header itself.

use std::time::Duration;

use pakhims_widgets::scroll::navigate_to;
use pakhims_widgets::{
    Animator, Environment, Event, HeaderVisibility, HydrationGate, Node, ScrollObserver,
    SectionInfo, SectionWidget, SiteConfig, TimerControl, VisualState,
};

use super::anchor_links;
use crate::content::NAVIGATION;

const SLIDE_PX: f64 = -100.0;
const SLIDE_MS: u64 = 300;

pub struct Header {
    gate: HydrationGate,
    observer: ScrollObserver,
    nav_offset: f64,
    mobile_menu_open: bool,
}

impl Header {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            observer: ScrollObserver::new(&NAVIGATION, config.scroll.clone()),
            nav_offset: config.scroll.nav_offset,
            mobile_menu_open: false,
        }
    }

    pub fn visibility(&self) -> HeaderVisibility {
        self.observer.visibility()
    }

    pub fn is_scrolled(&self) -> bool {
        self.observer.is_scrolled()
    }

    pub fn active_section(&self) -> &'static str {
        self.observer.active_section()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Click on a navigation link. Closes the mobile menu.
    pub fn navigate(&mut self, env: &mut dyn Environment, href: &str) -> bool {
        self.mobile_menu_open = false;
        navigate_to(env, href, self.nav_offset)
    }
}

impl TimerControl for Header {
    fn stop_timers(&mut self, _env: &mut dyn Environment) {}

    fn start_timers(&mut self, _env: &mut dyn Environment) {}
}

impl SectionWidget for Header {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Header",
            id: "header",
            description: "Fixed navigation bar",
        }
    }

    fn mount(&mut self, env: &mut dyn Environment) {
        self.observer.attach(env);
    }

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                self.gate.open();
            }
            Event::Scroll => {
                let change = self.observer.on_scroll(env);
                if change.visibility_changed {
                    ::log::debug!("Header {:?}", self.observer.visibility());
                }
            }
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.observer.detach(env);
        self.gate.close();
        self.mobile_menu_open = false;
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let hidden = VisualState::IDENTITY.with_offset(0.0, SLIDE_PX);
        let (from, to) = match self.visibility() {
            HeaderVisibility::Visible => (hidden, VisualState::IDENTITY),
            HeaderVisibility::Hidden => (VisualState::IDENTITY, hidden),
        };
        let visible = self.visibility() == HeaderVisibility::Visible;
        let active = Some(self.active_section());

        Node::new("header")
            .id("header")
            .attr("data-visible", visible.to_string())
            .attr("data-scrolled", self.is_scrolled().to_string())
            .motion(self.gate.motion(animator, from, to, Duration::from_millis(SLIDE_MS)))
            .child(
                Node::new("a")
                    .attr("href", "#home")
                    .attr("class", "logo")
                    .child(Node::new("span").text("PAKHIMS"))
                    .child(Node::new("small").text("Healthcare Excellence")),
            )
            .child(Node::new("nav").children(anchor_links(&NAVIGATION, active)))
            .child(
                Node::new("button")
                    .attr("aria-expanded", self.mobile_menu_open.to_string())
                    .attr("aria-label", "Toggle menu"),
            )
            .maybe_child(self.mobile_menu_open.then(|| {
                Node::new("nav")
                    .id("mobile-menu")
                    .children(anchor_links(&NAVIGATION, active))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::{EasedAnimator, ListenerKind, VirtualEnvironment};

    fn scroll(header: &mut Header, env: &mut VirtualEnvironment, y: f64) {
        env.set_scroll_position(y);
        header.handle_event(env, &Event::Scroll);
    }

    #[test]
    fn test_hides_on_scroll_down_and_returns_on_scroll_up() {
        let mut env = VirtualEnvironment::new();
        let mut header = Header::new(&SiteConfig::default());
        header.mount(&mut env);

        scroll(&mut header, &mut env, 80.0);
        assert_eq!(header.visibility(), HeaderVisibility::Visible);
        assert!(header.is_scrolled());
        scroll(&mut header, &mut env, 300.0);
        assert_eq!(header.visibility(), HeaderVisibility::Hidden);
        scroll(&mut header, &mut env, 290.0);
        assert_eq!(header.visibility(), HeaderVisibility::Visible);
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut env = VirtualEnvironment::new();
        env.set_element_offset("home", 0.0);
        env.set_element_offset("features", 800.0);
        env.set_element_offset("stats", 1600.0);
        let mut header = Header::new(&SiteConfig::default());
        header.mount(&mut env);

        scroll(&mut header, &mut env, 700.0);
        assert_eq!(header.active_section(), "features");
        scroll(&mut header, &mut env, 1500.0);
        assert_eq!(header.active_section(), "stats");
        scroll(&mut header, &mut env, 0.0);
        assert_eq!(header.active_section(), "home");

        let tree = header.render(&env, &EasedAnimator::default());
        let current: Vec<_> = tree
            .find_all("a")
            .into_iter()
            .filter(|a| a.attr_value("aria-current").is_some())
            .collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].attr_value("href"), Some("#home"));
    }

    #[test]
    fn test_navigation_closes_mobile_menu() {
        let mut env = VirtualEnvironment::new();
        env.set_element_offset("stats", 1600.0);
        let mut header = Header::new(&SiteConfig::default());
        header.toggle_mobile_menu();
        assert!(header.is_mobile_menu_open());

        assert!(header.navigate(&mut env, "#stats"));
        assert!(!header.is_mobile_menu_open());
        assert!(!header.navigate(&mut env, "#nowhere"));
        assert_eq!(env.scroll_log(), &[1500.0]);
    }

    #[test]
    fn test_unmount_detaches_scroll_listener() {
        let mut env = VirtualEnvironment::new();
        let mut header = Header::new(&SiteConfig::default());
        header.mount(&mut env);
        assert_eq!(env.listener_count(ListenerKind::Scroll), 1);
        header.unmount(&mut env);
        assert_eq!(env.listener_count(ListenerKind::Scroll), 0);

        scroll(&mut header, &mut env, 900.0);
        assert_eq!(header.visibility(), HeaderVisibility::Visible);
    }

    #[test]
    fn test_no_slide_before_hydration() {
        let env = VirtualEnvironment::new();
        let mut header = Header::new(&SiteConfig::default());
        let animator = EasedAnimator::default();
        assert!(header.render(&env, &animator).motion.is_none());
        header.gate.open();
        assert!(header.render(&env, &animator).motion.is_some());
    }
}
