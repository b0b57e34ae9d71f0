//! # PAKHIMS Widgets
//!
//! Shared view-state orchestration for the PAKHIMS landing site.
//!
//! Widgets are headless: they keep their state here, talk to the host only
//! through the [`Environment`] capability and render to a serializable
//! [`Node`] tree. Any UI technology can draw that tree, and tests drive the
//! same code on a [`VirtualEnvironment`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pakhims_widgets::{Carousel, NavSource, VirtualEnvironment};
//! use std::time::Duration;
//!
//! let mut env = VirtualEnvironment::new();
//! let mut carousel = Carousel::new(5, Duration::from_millis(5000), true);
//! carousel.sync_timer(&mut env, true);
//! carousel.next(&mut env, NavSource::User); // cancels autoplay
//! ```
//!
//! ## Modules
//!
//! - [`hydration`] - Hydration gate for SSR-safe first renders
//! - [`layout`] - Deterministic positions, waves and particle fields
//! - [`scroll`] - Header visibility, active section, click-to-navigate, reveal-on-view
//! - [`interval`] - Interval counters, typewriter and count-up loops
//! - [`carousel`] - Wrapping carousel and modal viewer state machines
//! - [`selection`] - Selected/hovered items with outside-click dismissal
//! - [`app_trait`] - Section interface (`SectionWidget`, `SectionRegistry`)
//! - [`theme`] - Color tokens and their style descriptors
//! - [`animator`] - Transitions between visual states
//! - [`env`] / [`virtual_env`] - Host capability and its virtual stand-in
//! - [`config`] / [`prefs`] - Site configuration and durable preferences
//!
//! ## Lifecycle
//!
//! Every timer-driven piece owns at most one timer handle and cancels it on
//! `stop`. Sections call `sync` whenever an enabling condition may have
//! changed, so a loop runs exactly while hydrated, visible and enabled.

pub mod animator;
pub mod app_trait;
pub mod assets;
pub mod carousel;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod hydration;
pub mod interval;
pub mod layout;
pub mod prefs;
pub mod render;
pub mod scroll;
pub mod selection;
pub mod theme;
pub mod virtual_env;

pub use animator::{Animator, EasedAnimator, Easing, StillAnimator, Transition, VisualState};
pub use app_trait::{SectionInfo, SectionRegistry, SectionWidget, TimerControl};
pub use assets::{AssetResolver, ImageSlot};
pub use carousel::{Carousel, KeyOutcome, ModalViewer, NavSource, ViewerState};
pub use config::SiteConfig;
pub use env::{Environment, ListenerId, ListenerKind, Timer};
pub use error::{SiteError, SiteResult};
pub use event::{Event, Key, Point, Rect};
pub use hydration::HydrationGate;
pub use interval::{CountUp, IntervalAnimation, Typewriter};
pub use layout::{ParticleField, Position};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use render::Node;
pub use scroll::{HeaderVisibility, NavigationItem, RevealTracker, ScrollObserver};
pub use selection::Selection;
pub use theme::{ColorToken, StyleDescriptor};
pub use virtual_env::VirtualEnvironment;
