//! # PAKHIMS Site
//!
//! The landing page and privacy policy composed from `pakhims-widgets`.
//!
//! - [`content`] - Copy, records and navigation tables
//! - [`sections`] - One [`SectionWidget`](pakhims_widgets::SectionWidget) per page block
//! - [`page`] - Routing, header guard and page lifecycle

pub mod content;
pub mod page;
pub mod sections;

pub use page::{HeaderGuard, HomeSections, Page, Route};
