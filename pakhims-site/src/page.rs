//! Page composition
//!
//! A [`Page`] owns the sections of one route, forwards host events to them
//! and renders them in document order. [`HeaderGuard`] decides whether the
//! header belongs on a route.

use serde::Serialize;

use pakhims_widgets::{
    Animator, Environment, Event, Node, SectionInfo, SectionRegistry, SectionWidget, SiteConfig,
};

use crate::content::NAVIGATION;
use crate::sections::{
    Features, Footer, Header, Hero, HowItWorks, PrivacyPolicy, Screenshots, Stats, Testimonials,
    WhoItsFor,
};

pub const PAGE_TITLE: &str =
    "PAKHIMS - Pakistan Healthcare Information Management System | Book Appointments & Manage Health Records";
pub const PAGE_DESCRIPTION: &str = "Pakistan's leading healthcare platform with 50K+ active users and 4.9★ rating. Book verified doctor appointments, manage health records, and access 24/7 support. Experience seamless healthcare management with bank-level security.";

// ============================================================================
// ROUTING
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    PrivacyPolicy,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::PrivacyPolicy => "/privacy-policy",
        }
    }

    /// Match a request path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/privacy-policy" => Some(Route::PrivacyPolicy),
            _ => None,
        }
    }
}

/// Hides the site header on routes that bring their own chrome
pub struct HeaderGuard;

impl HeaderGuard {
    pub fn shows_header(route: Route) -> bool {
        route != Route::PrivacyPolicy
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Landing page sections in document order
pub struct HomeSections {
    pub hero: Hero,
    pub features: Features,
    pub stats: Stats,
    pub screenshots: Screenshots,
    pub how_it_works: HowItWorks,
    pub who_its_for: WhoItsFor,
    pub testimonials: Testimonials,
    pub footer: Footer,
}

impl HomeSections {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            hero: Hero::new(config),
            features: Features::new(config),
            stats: Stats::new(config),
            screenshots: Screenshots::new(config),
            how_it_works: HowItWorks::new(config),
            who_its_for: WhoItsFor::new(config),
            testimonials: Testimonials::new(config),
            footer: Footer::new(config),
        }
    }

    fn widgets(&self) -> [&dyn SectionWidget; 8] {
        [
            &self.hero,
            &self.features,
            &self.stats,
            &self.screenshots,
            &self.how_it_works,
            &self.who_its_for,
            &self.testimonials,
            &self.footer,
        ]
    }

    fn widgets_mut(&mut self) -> [&mut dyn SectionWidget; 8] {
        [
            &mut self.hero,
            &mut self.features,
            &mut self.stats,
            &mut self.screenshots,
            &mut self.how_it_works,
            &mut self.who_its_for,
            &mut self.testimonials,
            &mut self.footer,
        ]
    }
}

enum PageBody {
    Home(Box<HomeSections>),
    PrivacyPolicy(PrivacyPolicy),
}

// ============================================================================
// PAGE
// ============================================================================

pub struct Page {
    route: Route,
    header: Option<Header>,
    body: PageBody,
    registry: SectionRegistry,
    mounted: bool,
    visible: bool,
}

impl Page {
    pub fn new(route: Route, config: &SiteConfig) -> Self {
        let header = HeaderGuard::shows_header(route).then(|| Header::new(config));
        let body = match route {
            Route::Home => PageBody::Home(Box::new(HomeSections::new(config))),
            Route::PrivacyPolicy => PageBody::PrivacyPolicy(PrivacyPolicy::new()),
        };
        let mut page = Self {
            route,
            header,
            body,
            registry: SectionRegistry::new(),
            mounted: false,
            visible: true,
        };
        let infos: Vec<SectionInfo> = page.widgets().iter().map(|w| w.info()).collect();
        for info in infos {
            page.registry.register(info);
        }
        page
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn header_mut(&mut self) -> Option<&mut Header> {
        self.header.as_mut()
    }

    pub fn home(&self) -> Option<&HomeSections> {
        match &self.body {
            PageBody::Home(home) => Some(home),
            PageBody::PrivacyPolicy(_) => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeSections> {
        match &mut self.body {
            PageBody::Home(home) => Some(home),
            PageBody::PrivacyPolicy(_) => None,
        }
    }

    /// Navigation anchors without a registered section on this page
    pub fn unresolved_anchors(&self) -> Vec<&'static str> {
        if self.route != Route::Home {
            return Vec::new();
        }
        NAVIGATION
            .iter()
            .map(|item| item.href)
            .filter(|href| !self.registry.resolves(href))
            .collect()
    }

    fn widgets(&self) -> Vec<&dyn SectionWidget> {
        let mut widgets: Vec<&dyn SectionWidget> = Vec::new();
        if let Some(header) = &self.header {
            widgets.push(header);
        }
        match &self.body {
            PageBody::Home(home) => widgets.extend(home.widgets()),
            PageBody::PrivacyPolicy(policy) => widgets.push(policy),
        }
        widgets
    }

    fn widgets_mut(&mut self) -> Vec<&mut dyn SectionWidget> {
        let mut widgets: Vec<&mut dyn SectionWidget> = Vec::new();
        if let Some(header) = &mut self.header {
            widgets.push(header);
        }
        match &mut self.body {
            PageBody::Home(home) => widgets.extend(home.widgets_mut()),
            PageBody::PrivacyPolicy(policy) => widgets.push(policy),
        }
        widgets
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Mount every section. Renders stay in their server form until [`Page::hydrate`].
    pub fn mount(&mut self, env: &mut dyn Environment) {
        if self.mounted {
            return;
        }
        for widget in self.widgets_mut() {
            widget.mount(env);
        }
        self.mounted = true;
        self.visible = true;
        ::log::debug!("Mounted {} ({} sections)", self.route.path(), self.registry.len());
    }

    /// First client pass finished; opens every hydration gate
    pub fn hydrate(&mut self, env: &mut dyn Environment) {
        self.dispatch(env, &Event::Hydrated);
        ::log::debug!("Hydrated {}", self.route.path());
    }

    /// Forward a host event to every section. Ignored while unmounted.
    pub fn dispatch(&mut self, env: &mut dyn Environment, event: &Event) {
        if !self.mounted {
            return;
        }
        for widget in self.widgets_mut() {
            widget.handle_event(env, event);
        }
    }

    /// Page hidden or shown again (tab switch). Hidden pages run no timers.
    pub fn set_visible(&mut self, env: &mut dyn Environment, visible: bool) {
        if !self.mounted || self.visible == visible {
            return;
        }
        self.visible = visible;
        for widget in self.widgets_mut() {
            if visible {
                widget.start_timers(env);
            } else {
                widget.stop_timers(env);
            }
        }
        ::log::debug!("{} {}", self.route.path(), if visible { "shown" } else { "hidden" });
    }

    pub fn unmount(&mut self, env: &mut dyn Environment) {
        if !self.mounted {
            return;
        }
        for widget in self.widgets_mut() {
            widget.unmount(env);
        }
        self.mounted = false;
        self.visible = true;
        ::log::debug!("Unmounted {}", self.route.path());
    }

    pub fn render(&self, env: &dyn Environment, animator: &dyn Animator) -> Node {
        let head = Node::new("head")
            .child(Node::new("title").text(PAGE_TITLE))
            .child(
                Node::new("meta")
                    .attr("name", "description")
                    .attr("content", PAGE_DESCRIPTION),
            );
        let header = self.header.as_ref().map(|h| h.render(env, animator));
        let body = match &self.body {
            PageBody::Home(home) => {
                let sections = home.widgets();
                let (footer, main) = match sections.split_last() {
                    Some((footer, main)) => (Some(footer.render(env, animator)), main),
                    None => (None, &sections[..]),
                };
                Node::new("div")
                    .maybe_child(header)
                    .child(
                        Node::new("main")
                            .children(main.iter().map(|w| w.render(env, animator))),
                    )
                    .maybe_child(footer)
            }
            PageBody::PrivacyPolicy(policy) => Node::new("div")
                .maybe_child(header)
                .child(policy.render(env, animator)),
        };
        Node::new("html")
            .attr("lang", "en")
            .attr("data-route", self.route.path())
            .child(head)
            .child(body.attr("class", "body"))
    }
}

#[cfg(test)]
mod tests {
    mod page_scenario_test;
}
