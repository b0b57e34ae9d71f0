//! Site footer with in-page links and contact details

use pakhims_widgets::scroll::navigate_to;
use pakhims_widgets::{
    Animator, Environment, Event, HydrationGate, Node, SectionInfo, SectionWidget, SiteConfig,
    TimerControl,
};

use super::{anchor_links, fade_up};
use crate::content::{
    footer_links, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, COPYRIGHT, FOOTER_TAGLINE,
};

const FOOTER_WAVE: &str = "M0,100 Q25,75 50,100 T75,75 T100,100 V0 H0 Z";

pub struct Footer {
    gate: HydrationGate,
    nav_offset: f64,
}

impl Footer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            nav_offset: config.scroll.nav_offset,
        }
    }

    /// Footer link click
    pub fn navigate(&mut self, env: &mut dyn Environment, href: &str) -> bool {
        navigate_to(env, href, self.nav_offset)
    }
}

impl TimerControl for Footer {
    fn stop_timers(&mut self, _env: &mut dyn Environment) {}

    fn start_timers(&mut self, _env: &mut dyn Environment) {}
}

impl SectionWidget for Footer {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Contact",
            id: "contact",
            description: "Footer links and contact details",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, _env: &mut dyn Environment, event: &Event) {
        if *event == Event::Hydrated {
            self.gate.open();
        }
    }

    fn unmount(&mut self, _env: &mut dyn Environment) {
        self.gate.close();
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let contact = [
            ("envelope", CONTACT_EMAIL),
            ("phone", CONTACT_PHONE),
            ("map-pin", CONTACT_ADDRESS),
        ];
        Node::new("footer")
            .id("contact")
            .child(
                Node::new("svg")
                    .attr("viewBox", "0 0 100 100")
                    .child(Node::new("path").attr("d", FOOTER_WAVE)),
            )
            .child(
                Node::new("div")
                    .motion(fade_up(&self.gate, animator, 20.0))
                    .child(Node::new("h3").text("PAKHIMS"))
                    .child(Node::new("p").text(FOOTER_TAGLINE)),
            )
            .child(
                Node::new("nav")
                    .child(Node::new("h4").text("Explore"))
                    .children(anchor_links(footer_links(), None)),
            )
            .child(
                Node::new("address")
                    .child(Node::new("h4").text("Get in Touch"))
                    .children(contact.iter().map(|(icon, text)| {
                        Node::new("span").attr("icon", *icon).text(*text)
                    })),
            )
            .child(Node::new("p").attr("class", "copyright").text(COPYRIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::{StillAnimator, VirtualEnvironment};

    #[test]
    fn test_links_cover_first_seven_sections() {
        let env = VirtualEnvironment::new();
        let footer = Footer::new(&SiteConfig::default());
        let tree = footer.render(&env, &StillAnimator);
        let hrefs: Vec<_> = tree
            .find_all("a")
            .iter()
            .filter_map(|a| a.attr_value("href"))
            .collect();
        assert_eq!(hrefs.len(), 7);
        assert_eq!(hrefs[0], "#home");
        assert!(!hrefs.contains(&"#contact"));
    }

    #[test]
    fn test_navigation_offsets_for_header() {
        let mut env = VirtualEnvironment::new();
        env.set_element_offset("testimonials", 4200.0);
        let mut footer = Footer::new(&SiteConfig::default());

        assert!(footer.navigate(&mut env, "#testimonials"));
        assert!(footer.navigate(&mut env, "#home"));
        assert!(!footer.navigate(&mut env, "#missing"));
        assert_eq!(env.scroll_log(), &[4100.0, 0.0]);
    }
}
