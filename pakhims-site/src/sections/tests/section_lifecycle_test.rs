use std::time::Duration;

use crate::sections::{
    Features, Footer, Header, Hero, HowItWorks, PrivacyPolicy, Screenshots, Stats, Testimonials,
    WhoItsFor,
};
use pakhims_widgets::{
    EasedAnimator, Event, Point, SectionWidget, SiteConfig, StillAnimator, VirtualEnvironment,
};

fn all_sections() -> Vec<Box<dyn SectionWidget>> {
    let config = SiteConfig::default();
    vec![
        Box::new(Header::new(&config)),
        Box::new(Hero::new(&config)),
        Box::new(Features::new(&config)),
        Box::new(Stats::new(&config)),
        Box::new(Screenshots::new(&config)),
        Box::new(HowItWorks::new(&config)),
        Box::new(WhoItsFor::new(&config)),
        Box::new(Testimonials::new(&config)),
        Box::new(Footer::new(&config)),
        Box::new(PrivacyPolicy::new()),
    ]
}

fn busy_env() -> VirtualEnvironment {
    let mut env = VirtualEnvironment::new();
    env.set_viewport(1280.0, 800.0);
    env.set_element_offset("stats-grid", 400.0);
    env
}

#[test]
fn test_server_render_has_no_motion_and_is_repeatable() {
    let env = busy_env();
    let animator = EasedAnimator::default();
    for section in all_sections() {
        let first = section.render(&env, &animator);
        let second = section.render(&env, &animator);
        assert_eq!(first, second, "{} render is not stable", section.info().id);
        assert_eq!(
            first,
            first.structure(),
            "{} animates before hydration",
            section.info().id
        );
    }
}

#[test]
fn test_unmount_releases_every_timer_and_listener() {
    for mut section in all_sections() {
        let mut env = busy_env();
        section.mount(&mut env);
        section.handle_event(&mut env, &Event::Hydrated);
        section.handle_event(&mut env, &Event::Scroll);
        section.handle_event(&mut env, &Event::PointerDown(Point::new(10.0, 10.0)));
        env.run_for(Duration::from_millis(1200), |env, timer| {
            section.handle_event(env, &Event::Timer(timer))
        });

        section.unmount(&mut env);
        assert_eq!(env.active_timer_count(), 0, "{} leaks timers", section.info().id);
        assert_eq!(env.total_listener_count(), 0, "{} leaks listeners", section.info().id);
        assert!(!env.is_scroll_locked());
    }
}

#[test]
fn test_remount_cycles_keep_listener_count_constant() {
    for mut section in all_sections() {
        let mut env = busy_env();
        let mut counts = Vec::new();
        for _ in 0..3 {
            section.mount(&mut env);
            section.handle_event(&mut env, &Event::Hydrated);
            counts.push((env.total_listener_count(), env.active_timer_count()));
            section.unmount(&mut env);
        }
        assert!(
            counts.windows(2).all(|w| w[0] == w[1]),
            "{} grows across mounts: {:?}",
            section.info().id,
            counts
        );
    }
}

#[test]
fn test_stopped_sections_fire_nothing() {
    for mut section in all_sections() {
        let mut env = busy_env();
        section.mount(&mut env);
        section.handle_event(&mut env, &Event::Hydrated);
        section.stop_timers(&mut env);
        assert_eq!(env.active_timer_count(), 0, "{} keeps ticking", section.info().id);

        section.start_timers(&mut env);
        section.unmount(&mut env);
        assert_eq!(env.active_timer_count(), 0);
    }
}

#[test]
fn test_unmounted_render_matches_server_render() {
    let animator = StillAnimator;
    for mut section in all_sections() {
        let mut env = busy_env();
        let before = section.render(&env, &animator);
        section.mount(&mut env);
        section.handle_event(&mut env, &Event::Hydrated);
        env.run_for(Duration::from_millis(3000), |env, timer| {
            section.handle_event(env, &Event::Timer(timer))
        });
        section.unmount(&mut env);
        let after = section.render(&env, &animator);
        assert_eq!(before, after, "{} keeps client state after unmount", section.info().id);
    }
}
