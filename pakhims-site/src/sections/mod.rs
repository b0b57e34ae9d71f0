//! Page sections
//!
//! Each section composes the shared widgets into one rendered block of the
//! page and implements [`SectionWidget`](pakhims_widgets::SectionWidget).

pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod privacy_policy;
pub mod screenshots;
pub mod stats;
pub mod testimonials;
pub mod who_its_for;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use privacy_policy::PrivacyPolicy;
pub use screenshots::Screenshots;
pub use stats::Stats;
pub use testimonials::Testimonials;
pub use who_its_for::WhoItsFor;

use std::time::Duration;

use pakhims_widgets::layout::Position;
use pakhims_widgets::{Animator, HydrationGate, NavigationItem, Node, Transition, VisualState};

/// Fade-and-rise used by section headings and cards
pub(crate) fn fade_up(
    gate: &HydrationGate,
    animator: &dyn Animator,
    rise: f64,
) -> Option<Transition> {
    gate.motion(
        animator,
        VisualState::HIDDEN.with_offset(0.0, rise),
        VisualState::IDENTITY,
        Duration::from_millis(800),
    )
}

/// Heading block shared by every landing section
pub(crate) fn heading(badge: &str, title: &str, lead: &str, motion: Option<Transition>) -> Node {
    Node::new("header")
        .motion(motion)
        .child(Node::new("span").attr("class", "badge").text(badge))
        .child(Node::new("h2").text(title))
        .child(Node::new("p").text(lead))
}

/// In-page anchor list; `active` gets `aria-current`
pub(crate) fn anchor_links(items: &[NavigationItem], active: Option<&str>) -> Vec<Node> {
    items
        .iter()
        .map(|item| {
            let link = Node::new("a").attr("href", item.href).text(item.name);
            if active == Some(item.section_id()) {
                link.attr("aria-current", "page")
            } else {
                link
            }
        })
        .collect()
}

/// Absolutely positioned node at a percentage position
pub(crate) fn placed(tag: &'static str, position: Position) -> Node {
    let (left, top) = position.css();
    Node::new(tag).attr("left", left).attr("top", top)
}

#[cfg(test)]
mod tests {
    mod section_lifecycle_test;
}
