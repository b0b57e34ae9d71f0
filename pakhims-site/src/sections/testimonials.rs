//! Testimonial slider
//!
//! Autoplays once hydrated. Any manual navigation (arrows or dots) stops
//! autoplay for the rest of the visit.

use std::time::Duration;

use pakhims_widgets::{
    Animator, AssetResolver, Carousel, Environment, Event, HydrationGate, ImageSlot, NavSource,
    Node, SectionInfo, SectionWidget, SiteConfig, TimerControl, VisualState,
};

use super::{fade_up, heading};
use crate::content::{Focus, Tenure, TestimonialRecord, TESTIMONIALS, TESTIMONIAL_TRUST_STATS};

const SLIDE_MS: u64 = 500;

pub struct Testimonials {
    gate: HydrationGate,
    carousel: Carousel,
    autoplay_period: Duration,
    suspended: bool,
    images: Vec<ImageSlot>,
    resolver: AssetResolver,
}

impl Testimonials {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: HydrationGate::new(),
            carousel: Carousel::new(TESTIMONIALS.len(), config.timing.testimonial_autoplay(), true),
            autoplay_period: config.timing.testimonial_autoplay(),
            suspended: false,
            images: TESTIMONIALS.iter().map(|t| ImageSlot::new(t.image)).collect(),
            resolver: AssetResolver::new(&config.assets),
        }
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn current(&self) -> Option<&'static TestimonialRecord> {
        TESTIMONIALS.get(self.carousel.index())
    }

    pub fn is_autoplaying(&self) -> bool {
        self.carousel.is_autoplaying()
    }

    pub fn next(&mut self, env: &mut dyn Environment) {
        self.carousel.next(env, NavSource::User);
    }

    pub fn prev(&mut self, env: &mut dyn Environment) {
        self.carousel.prev(env, NavSource::User);
    }

    /// Dot click
    pub fn go_to(&mut self, env: &mut dyn Environment, index: usize) -> bool {
        self.carousel.go_to(env, index)
    }

    fn sync_autoplay(&mut self, env: &mut dyn Environment) {
        self.carousel
            .sync_timer(env, self.gate.is_open() && !self.suspended);
    }

    fn slide(
        &self,
        env: &dyn Environment,
        index: usize,
        record: &TestimonialRecord,
        animator: &dyn Animator,
    ) -> Node {
        let stars = record.rating.stars().into_iter().map(|filled| {
            Node::new("i")
                .attr("icon", "star")
                .attr("data-filled", filled.to_string())
        });
        let (tenure_value, tenure_label) = match record.tenure {
            Tenure::Experience(years) => (years, "Experience"),
            Tenure::MemberSince(year) => (year, "Member Since"),
        };
        let visits_label = if record.role == "Patient" { "Visits" } else { "Patients" };
        let specialty = match record.focus {
            Focus::Specialty(specialty) => {
                Some(Node::new("span").attr("icon", "user").text(specialty))
            }
            Focus::Condition(_) => None,
        };
        let src = self
            .images
            .get(index)
            .map(|slot| slot.current(&self.resolver, env))
            .unwrap_or_else(|| self.resolver.placeholder().to_string());

        Node::new("article")
            .id("testimonial-slide")
            .attr("data-index", index.to_string())
            .motion(self.gate.motion(
                animator,
                VisualState::HIDDEN.with_offset(100.0, 0.0),
                VisualState::IDENTITY,
                Duration::from_millis(SLIDE_MS),
            ))
            .child(
                Node::new("div")
                    .attr("class", "rating")
                    .children(stars)
                    .child(Node::new("span").text(format!("{}.0 Rating", record.rating.get()))),
            )
            .child(Node::new("blockquote").text(format!("“{}”", record.text)))
            .child(Node::new("h4").text(record.name))
            .child(Node::new("p").text(record.role))
            .child(Node::new("span").attr("icon", "map-pin").text(record.location))
            .maybe_child(specialty)
            .child(
                Node::new("img")
                    .attr("src", src)
                    .attr("alt", record.name)
                    .attr("width", "128")
                    .attr("height", "128")
                    .attr("loading", "lazy"),
            )
            .child(
                Node::new("div")
                    .attr("class", "tenure")
                    .child(Node::new("strong").text(tenure_value))
                    .child(Node::new("small").text(tenure_label)),
            )
            .child(
                Node::new("div")
                    .attr("class", "appointments")
                    .child(Node::new("strong").text(record.appointments))
                    .child(Node::new("small").text(visits_label)),
            )
    }
}

impl TimerControl for Testimonials {
    fn stop_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = true;
        self.sync_autoplay(env);
    }

    fn start_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = false;
        self.sync_autoplay(env);
    }
}

impl SectionWidget for Testimonials {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Testimonials",
            id: "testimonials",
            description: "Rotating doctor and patient testimonials",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                if self.gate.open() {
                    self.sync_autoplay(env);
                }
            }
            Event::Timer(timer) => {
                self.carousel.on_timer(env, *timer);
            }
            Event::ImageError(path) => {
                for slot in &mut self.images {
                    if slot.on_error(&self.resolver, path) {
                        ::log::warn!("Testimonial photo {} failed to load", path);
                    }
                }
            }
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.carousel.sync_timer(env, false);
        self.carousel = Carousel::new(TESTIMONIALS.len(), self.autoplay_period, true);
        self.gate.close();
        self.suspended = false;
    }

    fn render(&self, env: &dyn Environment, animator: &dyn Animator) -> Node {
        let index = self.carousel.index();
        let slide = self
            .current()
            .map(|record| self.slide(env, index, record, animator));
        let dots = (0..TESTIMONIALS.len()).map(|i| {
            Node::new("button")
                .attr("aria-label", format!("Go to testimonial {}", i + 1))
                .attr("aria-current", (i == index).to_string())
        });
        let trust = TESTIMONIAL_TRUST_STATS.iter().map(|(value, label, description)| {
            Node::new("div")
                .child(Node::new("strong").text(*value))
                .child(Node::new("span").text(*label))
                .child(Node::new("small").text(*description))
        });

        Node::new("section")
            .id("testimonials")
            .attr("data-autoplay", self.carousel.is_autoplaying().to_string())
            .child(heading(
                "💬 What Our Community Says",
                "Trusted by Healthcare Heroes",
                "Real stories from doctors and patients who've transformed their healthcare experience with PAKHIMS",
                fade_up(&self.gate, animator, 30.0),
            ))
            .maybe_child(slide)
            .child(Node::new("button").attr("aria-label", "Previous testimonial"))
            .child(Node::new("button").attr("aria-label", "Next testimonial"))
            .child(Node::new("nav").children(dots))
            .child(
                Node::new("div")
                    .attr("class", "trust")
                    .motion(fade_up(&self.gate, animator, 30.0))
                    .children(trust),
            )
            .child(
                Node::new("div")
                    .motion(fade_up(&self.gate, animator, 20.0))
                    .child(Node::new("p").text("Join thousands of satisfied users"))
                    .child(Node::new("button").text("Start Your Journey Today")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakhims_widgets::{EasedAnimator, VirtualEnvironment};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn run(slider: &mut Testimonials, env: &mut VirtualEnvironment, elapsed: Duration) {
        env.run_for(elapsed, |env, timer| slider.handle_event(env, &Event::Timer(timer)));
    }

    #[test]
    fn test_autoplay_waits_for_hydration() {
        let mut env = VirtualEnvironment::new();
        let mut slider = Testimonials::new(&SiteConfig::default());
        slider.mount(&mut env);
        assert_eq!(env.active_timer_count(), 0);

        slider.handle_event(&mut env, &Event::Hydrated);
        run(&mut slider, &mut env, ms(5000));
        assert_eq!(slider.index(), 1);
        run(&mut slider, &mut env, ms(20_000));
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_manual_navigation_stops_autoplay() {
        let mut env = VirtualEnvironment::new();
        let mut slider = Testimonials::new(&SiteConfig::default());
        slider.handle_event(&mut env, &Event::Hydrated);

        slider.prev(&mut env);
        assert_eq!(slider.index(), 4);
        assert!(!slider.is_autoplaying());
        assert_eq!(env.active_timer_count(), 0);
        run(&mut slider, &mut env, ms(15_000));
        assert_eq!(slider.index(), 4);

        assert!(slider.go_to(&mut env, 2));
        assert!(!slider.go_to(&mut env, 5));
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn test_stars_and_tenure_labels() {
        let env = VirtualEnvironment::new();
        let slider = Testimonials::new(&SiteConfig::default());
        let tree = slider.render(&env, &EasedAnimator::default());
        let slide = tree.find("testimonial-slide");
        let filled = slide
            .map(|s| {
                s.find_all("i")
                    .iter()
                    .filter(|i| i.attr_value("data-filled") == Some("true"))
                    .count()
            })
            .unwrap_or(0);
        assert_eq!(filled, usize::from(TESTIMONIALS[0].rating.get()));

        let label = match TESTIMONIALS[0].tenure {
            Tenure::Experience(_) => "Experience",
            Tenure::MemberSince(_) => "Member Since",
        };
        assert!(slide.is_some_and(|s| s.text_content().contains(label)));
    }

    #[test]
    fn test_suspend_and_unmount_stop_the_timer() {
        let mut env = VirtualEnvironment::new();
        let mut slider = Testimonials::new(&SiteConfig::default());
        slider.handle_event(&mut env, &Event::Hydrated);
        slider.stop_timers(&mut env);
        assert_eq!(env.active_timer_count(), 0);
        slider.start_timers(&mut env);
        assert_eq!(env.active_timer_count(), 1);
        slider.unmount(&mut env);
        assert_eq!(env.active_timer_count(), 0);
    }
}
