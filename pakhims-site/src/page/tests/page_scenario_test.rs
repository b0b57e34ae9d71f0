use std::time::Duration;

use crate::page::{HeaderGuard, Page, Route};
use pakhims_widgets::{
    EasedAnimator, Event, HeaderVisibility, Key, ListenerKind, SiteConfig, StillAnimator,
    ViewerState, VirtualEnvironment,
};

fn home() -> (Page, VirtualEnvironment) {
    let mut env = VirtualEnvironment::new();
    env.set_viewport(1280.0, 800.0);
    for (id, offset) in [
        ("home", 0.0),
        ("features", 800.0),
        ("stats", 1600.0),
        ("stats-grid", 1700.0),
        ("screenshots", 2200.0),
        ("how-it-works", 3000.0),
        ("who-its-for", 3800.0),
        ("testimonials", 4400.0),
        ("contact", 5200.0),
    ] {
        env.set_element_offset(id, offset);
    }
    (Page::new(Route::Home, &SiteConfig::default()), env)
}

fn run(page: &mut Page, env: &mut VirtualEnvironment, elapsed: Duration) {
    env.run_for(elapsed, |env, timer| page.dispatch(env, &Event::Timer(timer)));
}

#[test]
fn test_routes_round_trip_paths() {
    assert_eq!(Route::from_path("/"), Some(Route::Home));
    assert_eq!(Route::from_path(""), Some(Route::Home));
    assert_eq!(Route::from_path("/privacy-policy/"), Some(Route::PrivacyPolicy));
    assert_eq!(Route::from_path("/pricing"), None);
    assert!(HeaderGuard::shows_header(Route::Home));
    assert!(!HeaderGuard::shows_header(Route::PrivacyPolicy));
}

#[test]
fn test_every_navigation_anchor_resolves() {
    let (page, _env) = home();
    assert!(page.unresolved_anchors().is_empty());
    assert!(page.registry().resolves("#contact"));
    assert!(!page.registry().resolves("#pricing"));
}

#[test]
fn test_privacy_route_has_no_header() {
    let env = VirtualEnvironment::new();
    let page = Page::new(Route::PrivacyPolicy, &SiteConfig::default());
    assert!(page.header().is_none());
    assert!(page.home().is_none());

    let tree = page.render(&env, &StillAnimator);
    assert!(tree.find("header").is_none());
    assert!(tree.find("privacy-policy").is_some());
    assert_eq!(tree.attr_value("data-route"), Some("/privacy-policy"));
}

#[test]
fn test_snapshot_is_identical_until_hydration() {
    let (mut page, mut env) = home();
    let animator = EasedAnimator::default();
    let server = page.render(&env, &animator);
    assert_eq!(server, server.structure());

    page.mount(&mut env);
    assert_eq!(page.render(&env, &animator), server);
    assert_eq!(env.active_timer_count(), 0);

    page.hydrate(&mut env);
    assert_ne!(page.render(&env, &animator), server);
}

#[test]
fn test_testimonials_wrap_after_last() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);

    let Some(home) = page.home_mut() else {
        panic!("home route without sections");
    };
    for _ in 0..4 {
        home.testimonials.next(&mut env);
    }
    assert_eq!(home.testimonials.index(), 4);
    home.testimonials.next(&mut env);
    assert_eq!(home.testimonials.index(), 0);
    assert!(!home.testimonials.is_autoplaying());
}

#[test]
fn test_arrow_key_in_screenshot_modal_wraps_and_stops_autoplay() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);

    if let Some(home) = page.home_mut() {
        assert!(home.screenshots.open(&mut env, 1));
    }
    assert!(env.is_scroll_locked());

    page.dispatch(&mut env, &Event::KeyDown(Key::ArrowRight));
    let screenshots = page.home().map(|home| &home.screenshots);
    assert_eq!(screenshots.map(|s| s.viewer_state()), Some(ViewerState::Open(0)));
    assert_eq!(screenshots.map(|s| s.is_autoplaying()), Some(false));

    page.dispatch(&mut env, &Event::KeyDown(Key::Escape));
    assert!(!env.is_scroll_locked());
}

#[test]
fn test_scrolling_down_hides_header_once() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);

    let mut hides = 0;
    let mut last = HeaderVisibility::Visible;
    for y in [50.0, 150.0, 400.0, 900.0, 1500.0] {
        env.set_scroll_position(y);
        page.dispatch(&mut env, &Event::Scroll);
        let now = page.header().map(|h| h.visibility());
        if now == Some(HeaderVisibility::Hidden) && last == HeaderVisibility::Visible {
            hides += 1;
        }
        if let Some(now) = now {
            last = now;
        }
    }
    assert_eq!(hides, 1);
    assert_eq!(page.header().map(|h| h.active_section()), Some("stats"));

    env.set_scroll_position(1400.0);
    page.dispatch(&mut env, &Event::Scroll);
    assert_eq!(page.header().map(|h| h.visibility()), Some(HeaderVisibility::Visible));
}

#[test]
fn test_hidden_page_runs_no_timers() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);
    run(&mut page, &mut env, Duration::from_millis(500));
    assert!(env.active_timer_count() > 0);

    page.set_visible(&mut env, false);
    assert!(!page.is_visible());
    assert_eq!(env.active_timer_count(), 0);

    page.set_visible(&mut env, true);
    assert!(env.active_timer_count() > 0);
}

#[test]
fn test_unmount_tears_down_all_timers() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);
    env.set_scroll_position(1200.0);
    page.dispatch(&mut env, &Event::Scroll);
    run(&mut page, &mut env, Duration::from_millis(4000));

    page.unmount(&mut env);
    assert!(!page.is_mounted());
    assert_eq!(env.active_timer_count(), 0);
    assert_eq!(env.total_listener_count(), 0);

    let fired = env.advance(Duration::from_secs(30));
    assert!(fired.is_empty());
}

#[test]
fn test_listener_count_constant_across_mounts() {
    let (mut page, mut env) = home();
    let mut counts = Vec::new();
    for _ in 0..3 {
        page.mount(&mut env);
        page.hydrate(&mut env);
        counts.push((
            env.total_listener_count(),
            env.listener_count(ListenerKind::Scroll),
        ));
        page.unmount(&mut env);
    }
    assert!(counts.windows(2).all(|w| w[0] == w[1]), "{:?}", counts);
    assert!(counts[0].1 >= 1);
}

#[test]
fn test_events_ignored_while_unmounted() {
    let (mut page, mut env) = home();
    page.dispatch(&mut env, &Event::Hydrated);
    assert_eq!(env.total_listener_count(), 0);
    assert_eq!(env.active_timer_count(), 0);
    assert_eq!(
        page.render(&env, &StillAnimator),
        Page::new(Route::Home, &SiteConfig::default()).render(&env, &StillAnimator)
    );
}

#[test]
fn test_header_navigation_skips_missing_targets() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);
    assert!(page.home().is_some_and(|home| home.hero.is_hydrated()));

    env.remove_element("stats");
    let navigated = page.header_mut().map(|header| {
        (
            header.navigate(&mut env, "#features"),
            header.navigate(&mut env, "#stats"),
        )
    });
    assert_eq!(navigated, Some((true, false)));
    assert_eq!(env.scroll_log(), &[700.0]);
}

#[test]
fn test_page_hidden_before_hydration_stays_idle() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.set_visible(&mut env, false);
    page.hydrate(&mut env);
    run(&mut page, &mut env, Duration::from_millis(1000));
    assert_eq!(env.active_timer_count(), 0);
    assert_eq!(page.home().map(|home| home.hero.displayed_text()), Some(""));

    page.set_visible(&mut env, true);
    run(&mut page, &mut env, Duration::from_millis(700));
    assert_eq!(page.home().map(|home| home.hero.displayed_text()), Some("PAKHIMS"));
}

#[test]
fn test_hidden_page_ignores_autoplay_requests() {
    let (mut page, mut env) = home();
    page.mount(&mut env);
    page.hydrate(&mut env);
    page.set_visible(&mut env, false);

    if let Some(home) = page.home_mut() {
        assert!(home.screenshots.open(&mut env, 0));
    }
    page.dispatch(&mut env, &Event::KeyDown(Key::Space));
    assert_eq!(page.home().map(|home| home.screenshots.is_autoplaying()), Some(true));
    assert_eq!(env.active_timer_count(), 0);

    page.set_visible(&mut env, true);
    run(&mut page, &mut env, Duration::from_millis(4000));
    assert_eq!(
        page.home().map(|home| home.screenshots.viewer_state()),
        Some(ViewerState::Open(1))
    );
}
