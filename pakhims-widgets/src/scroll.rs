//! Scroll and intersection observation
//!
//! [`ScrollObserver`] drives the fixed header: it hides the header while the
//! page scrolls down past a threshold, shows it on any upward scroll, and
//! tracks which navigation section is active. [`navigate_to`] implements
//! click-to-navigate for header and footer links. [`RevealTracker`] fires
//! "animate on view" exactly once per element.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::ScrollConfig;
use crate::env::{Environment, ListenerId, ListenerKind};

/// Anchor that always scrolls to the top of the page
pub const HOME_ANCHOR: &str = "#home";

/// In-page navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub name: &'static str,
    /// In-page anchor, `#section-id`
    pub href: &'static str,
}

impl NavigationItem {
    pub const fn new(name: &'static str, href: &'static str) -> Self {
        Self { name, href }
    }

    /// Target element id, `href` without the leading `#`
    pub fn section_id(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

/// Header slide state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HeaderVisibility {
    Visible,
    Hidden,
}

/// What changed on one scroll event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChange {
    pub visibility_changed: bool,
    pub scrolled_changed: bool,
    pub active_changed: bool,
}

impl ScrollChange {
    pub fn any(&self) -> bool {
        self.visibility_changed || self.scrolled_changed || self.active_changed
    }
}

/// Header visibility and active-section state machine
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    config: ScrollConfig,
    sections: Vec<&'static str>,
    visibility: HeaderVisibility,
    scrolled: bool,
    last_y: f64,
    active: &'static str,
    listener: Option<ListenerId>,
}

impl ScrollObserver {
    /// Observe `items`, top of document first. The first item starts active.
    pub fn new(items: &[NavigationItem], config: ScrollConfig) -> Self {
        let sections: Vec<&'static str> = items.iter().map(NavigationItem::section_id).collect();
        let active = sections.first().copied().unwrap_or_default();
        Self {
            config,
            sections,
            visibility: HeaderVisibility::Visible,
            scrolled: false,
            last_y: 0.0,
            active,
            listener: None,
        }
    }

    pub fn visibility(&self) -> HeaderVisibility {
        self.visibility
    }

    /// Whether the page is scrolled past the background threshold
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> &'static str {
        self.active
    }

    /// Register the scroll listener; no-op while attached
    pub fn attach(&mut self, env: &mut dyn Environment) {
        if self.listener.is_none() {
            self.listener = Some(env.add_listener(ListenerKind::Scroll));
            self.last_y = env.scroll_position();
        }
    }

    pub fn detach(&mut self, env: &mut dyn Environment) {
        if let Some(listener) = self.listener.take() {
            env.remove_listener(listener);
        }
    }

    /// Handle a scroll event. Ignored while detached.
    pub fn on_scroll(&mut self, env: &dyn Environment) -> ScrollChange {
        if self.listener.is_none() {
            return ScrollChange::default();
        }
        self.observe(env.scroll_position(), |id| env.element_offset(id))
    }

    /// Feed one scroll offset with an element-offset lookup
    pub fn observe<F>(&mut self, y: f64, offset_of: F) -> ScrollChange
    where
        F: Fn(&str) -> Option<f64>,
    {
        let mut change = ScrollChange::default();

        let visibility = if y > self.last_y && y > self.config.hide_threshold {
            HeaderVisibility::Hidden
        } else if y < self.last_y {
            HeaderVisibility::Visible
        } else {
            self.visibility
        };
        if visibility != self.visibility {
            self.visibility = visibility;
            change.visibility_changed = true;
        }

        let scrolled = y > self.config.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            change.scrolled_changed = true;
        }

        let probe = y + self.config.active_offset;
        if let Some(active) = active_section(&self.sections, probe, offset_of) {
            if active != self.active {
                self.active = active;
                change.active_changed = true;
            }
        }

        self.last_y = y;
        change
    }
}

/// Scan `sections` bottom-up for the first whose top offset is at or above `probe`.
///
/// Sections missing from the document are skipped. `None` when nothing qualifies.
pub fn active_section<F>(
    sections: &[&'static str],
    probe: f64,
    offset_of: F,
) -> Option<&'static str>
where
    F: Fn(&str) -> Option<f64>,
{
    sections
        .iter()
        .rev()
        .find(|id| offset_of(id).is_some_and(|top| top <= probe))
        .copied()
}

/// Smooth-scroll to the section behind `href`.
///
/// `#home` always goes to the top. Other targets land `nav_offset` pixels
/// above the element. Returns `false` when the target does not exist.
pub fn navigate_to(env: &mut dyn Environment, href: &str, nav_offset: f64) -> bool {
    if href == HOME_ANCHOR {
        env.scroll_to(0.0);
        return true;
    }
    let id = href.strip_prefix('#').unwrap_or(href);
    match env.element_offset(id) {
        Some(top) => {
            env.scroll_to(top - nav_offset);
            true
        }
        None => {
            ::log::debug!("Scroll target #{} not found", id);
            false
        }
    }
}

/// One-shot "animate on view" tracking
#[derive(Debug, Clone)]
pub struct RevealTracker {
    fraction: f64,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    /// `fraction` of the viewport height an element must clear to count as in view
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            revealed: BTreeSet::new(),
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Check `ids` against the current viewport and return those revealed for the first time
    pub fn update(&mut self, env: &dyn Environment, ids: &[&str]) -> Vec<String> {
        let line = env.scroll_position() + env.viewport_height() * (1.0 - self.fraction);
        let mut fresh = Vec::new();
        for id in ids {
            if self.revealed.contains(*id) {
                continue;
            }
            if env.element_offset(id).is_some_and(|top| top <= line) {
                self.revealed.insert((*id).to_string());
                fresh.push((*id).to_string());
            }
        }
        fresh
    }

    /// Forget everything, e.g. on unmount
    pub fn reset(&mut self) {
        self.revealed.clear();
    }
}
