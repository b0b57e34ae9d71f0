//! Privacy policy page body
//!
//! Static content only; it has no timers and no listeners.

use pakhims_widgets::{
    Animator, Environment, Event, Node, SectionInfo, SectionWidget, TimerControl,
};

use crate::content::{PolicySection, PRIVACY_CONTACT_LINKS, PRIVACY_SECTIONS, PRIVACY_TITLE};

pub const POLICY_COMPANY: &str = "Company: Curely Health / Pakhims";
pub const POLICY_EFFECTIVE_DATE: &str = "Effective Date: 6 November 2025";

#[derive(Default)]
pub struct PrivacyPolicy;

impl PrivacyPolicy {
    pub fn new() -> Self {
        Self
    }

    fn section(policy: &PolicySection, is_last: bool) -> Node {
        let subsections = policy.subsections.iter().map(|(title, text)| {
            Node::new("div")
                .child(Node::new("h3").text(*title))
                .child(Node::new("p").text(*text))
        });
        let list = (!policy.list.is_empty()).then(|| {
            Node::new("ul").children(policy.list.iter().map(|item| Node::new("li").text(*item)))
        });
        let contact = is_last.then(|| {
            Node::new("p").children(PRIVACY_CONTACT_LINKS.iter().map(|(label, href)| {
                Node::new("a").attr("href", *href).text(*label)
            }))
        });

        Node::new("section")
            .child(Node::new("h2").text(policy.title))
            .maybe_child(policy.text.map(|text| Node::new("p").text(text)))
            .children(subsections)
            .maybe_child(list)
            .maybe_child(contact)
    }
}

impl TimerControl for PrivacyPolicy {
    fn stop_timers(&mut self, _env: &mut dyn Environment) {}

    fn start_timers(&mut self, _env: &mut dyn Environment) {}
}

impl SectionWidget for PrivacyPolicy {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Privacy Policy",
            id: "privacy-policy",
            description: "Privacy policy for the PAK Health app",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, _env: &mut dyn Environment, _event: &Event) {}

    fn unmount(&mut self, _env: &mut dyn Environment) {}

    fn render(&self, _env: &dyn Environment, _animator: &dyn Animator) -> Node {
        let last = PRIVACY_SECTIONS.len().saturating_sub(1);
        Node::new("main")
            .id("privacy-policy")
            .child(Node::new("a").attr("href", "/").text("Back to Home"))
            .child(Node::new("h1").text(PRIVACY_TITLE))
            .children(
                PRIVACY_SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(i, policy)| Self::section(policy, i == last)),
            )
            .child(
                Node::new("footer")
                    .child(Node::new("p").text(POLICY_COMPANY))
                    .child(Node::new("p").text(POLICY_EFFECTIVE_DATE)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::{StillAnimator, VirtualEnvironment};

    #[test]
    fn test_renders_every_section_and_contact_links() {
        let env = VirtualEnvironment::new();
        let tree = PrivacyPolicy::new().render(&env, &StillAnimator);
        assert_eq!(tree.find_all("h2").len(), PRIVACY_SECTIONS.len());
        let links: Vec<_> = tree
            .find_all("a")
            .iter()
            .filter_map(|a| a.attr_value("href"))
            .collect();
        assert_eq!(
            links,
            vec!["/", "mailto:privacy@pakhims.com", "https://profile.pakhims.com"]
        );
        assert!(tree.text_content().ends_with(POLICY_EFFECTIVE_DATE));
    }
}
