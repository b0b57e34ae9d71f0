//! # SectionWidget Trait - Page Section Interface
//!
//! This module defines the standard interface for sections composed into a
//! PAKHIMS page.
//!
//! ## Architecture
//!
//! Every section follows the same lifecycle:
//!
//! - **Mount** - register listeners; render deterministically, gate closed
//! - **Hydrate** - [`Event::Hydrated`] opens the gate and starts timers
//! - **Events** - timers, scroll, keys and pointer events routed by the page
//! - **Unmount** - cancel every timer and listener the section registered
//!
//! The trait provides:
//!
//! - **Standardized metadata** - Section name, anchor id, description via [`SectionInfo`]
//! - **Timer lifecycle** - Suspension while the page is hidden via [`TimerControl`]
//! - **Runtime queries** - Anchor resolution via [`SectionRegistry`]
//!
//! ## Creating a New Section
//!
//! ```rust,ignore
//! use pakhims_widgets::{SectionInfo, SectionWidget, TimerControl};
//!
//! pub struct Banner { gate: HydrationGate }
//!
//! impl SectionWidget for Banner {
//!     fn info(&self) -> SectionInfo {
//!         SectionInfo {
//!             name: "Banner",
//!             id: "banner",
//!             description: "Announcement strip",
//!         }
//!     }
//!     // mount / handle_event / unmount / render ...
//! }
//! ```

use crate::animator::Animator;
use crate::env::Environment;
use crate::event::Event;
use crate::render::Node;

/// Metadata about a page section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionInfo {
    /// Display name
    pub name: &'static str,
    /// Anchor id of the section element
    pub id: &'static str,
    pub description: &'static str,
}

/// Trait for sections with timer-based animations that need lifecycle control
///
/// Sections stop their timers when the page is hidden and restart the ones
/// whose enabling conditions still hold when it is shown again.
pub trait TimerControl {
    /// Stop all timers (call when the page becomes hidden)
    fn stop_timers(&mut self, env: &mut dyn Environment);

    /// Start/restart timers (call when the page becomes visible)
    fn start_timers(&mut self, env: &mut dyn Environment);
}

/// Trait for every section composed into a page
pub trait SectionWidget: TimerControl {
    /// Returns metadata about this section
    fn info(&self) -> SectionInfo;

    /// Register listeners. The hydration gate stays closed.
    fn mount(&mut self, env: &mut dyn Environment);

    /// React to a host event
    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event);

    /// Cancel every timer and listener this section registered
    fn unmount(&mut self, env: &mut dyn Environment);

    /// Current render tree; motion goes through `animator`
    fn render(&self, env: &dyn Environment, animator: &dyn Animator) -> Node;
}

/// Registry of the sections on a page
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<SectionInfo>,
}

impl SectionRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Register a section; a duplicate id replaces the earlier entry
    pub fn register(&mut self, info: SectionInfo) {
        match self.sections.iter_mut().find(|s| s.id == info.id) {
            Some(existing) => {
                ::log::warn!("Section id {:?} registered twice", info.id);
                *existing = info;
            }
            None => self.sections.push(info),
        }
    }

    /// Get all registered sections
    pub fn sections(&self) -> &[SectionInfo] {
        &self.sections
    }

    /// Find a section by anchor id
    pub fn find_by_id(&self, id: &str) -> Option<&SectionInfo> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Whether an in-page `#anchor` resolves to a registered section
    pub fn resolves(&self, href: &str) -> bool {
        href.strip_prefix('#')
            .is_some_and(|id| self.find_by_id(id).is_some())
    }

    /// Number of registered sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
