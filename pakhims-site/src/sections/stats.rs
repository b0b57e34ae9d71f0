//! Impact numbers
//!
//! Each figure reads `0<suffix>` until the grid scrolls into view, then
//! counts up once with an ease-out curve.

use std::time::Duration;

use pakhims_widgets::{
    Animator, CountUp, Environment, Event, HydrationGate, ListenerId, ListenerKind, Node,
    RevealTracker, SectionInfo, SectionWidget, SiteConfig, Timer, TimerControl, VisualState,
};

use super::{fade_up, heading};
use crate::content::STATS;

/// Element observed for the reveal
pub const STATS_GRID_ID: &str = "stats-grid";

pub struct Stats {
    gate: HydrationGate,
    reveal: RevealTracker,
    counters: Vec<CountUp>,
    frame_period: Duration,
    frame: Option<Timer>,
    scroll_listener: Option<ListenerId>,
    suspended: bool,
}

impl Stats {
    pub fn new(config: &SiteConfig) -> Self {
        let counters = STATS
            .iter()
            .map(|stat| CountUp::new(stat.value, stat.decimals(), config.timing.count_up()))
            .collect();
        Self {
            gate: HydrationGate::new(),
            reveal: RevealTracker::new(config.layout.reveal_fraction),
            counters,
            frame_period: config.timing.frame(),
            frame: None,
            scroll_listener: None,
            suspended: false,
        }
    }

    pub fn is_counting(&self) -> bool {
        self.counters.iter().any(CountUp::is_started)
    }

    pub fn is_finished(&self) -> bool {
        self.counters.iter().all(CountUp::is_finished)
    }

    /// Figure `index` as shown, suffix included
    pub fn display(&self, index: usize) -> Option<String> {
        let stat = STATS.get(index)?;
        let counter = self.counters.get(index)?;
        if counter.is_started() {
            Some(format!("{}{}", counter.formatted(), stat.suffix))
        } else {
            Some(format!("0{}", stat.suffix))
        }
    }

    fn check_reveal(&mut self, env: &mut dyn Environment) {
        if !self.gate.is_open() {
            return;
        }
        if self.reveal.update(env, &[STATS_GRID_ID]).is_empty() {
            return;
        }
        ::log::debug!("Stats grid in view, counting up");
        for counter in &mut self.counters {
            counter.start();
        }
        self.sync_frame(env);
    }

    fn sync_frame(&mut self, env: &mut dyn Environment) {
        let run = self.is_counting() && !self.is_finished() && !self.suspended;
        match (run, self.frame) {
            (true, None) => self.frame = Some(env.start_interval(self.frame_period)),
            (false, Some(timer)) => {
                env.stop_timer(timer);
                self.frame = None;
            }
            _ => {}
        }
    }

    fn on_frame(&mut self, env: &mut dyn Environment) {
        for counter in &mut self.counters {
            counter.tick(self.frame_period);
        }
        if self.is_finished() {
            self.sync_frame(env);
        }
    }
}

impl TimerControl for Stats {
    fn stop_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = true;
        self.sync_frame(env);
    }

    fn start_timers(&mut self, env: &mut dyn Environment) {
        self.suspended = false;
        self.sync_frame(env);
    }
}

impl SectionWidget for Stats {
    fn info(&self) -> SectionInfo {
        SectionInfo {
            name: "Stats",
            id: "stats",
            description: "Animated platform figures",
        }
    }

    fn mount(&mut self, _env: &mut dyn Environment) {}

    fn handle_event(&mut self, env: &mut dyn Environment, event: &Event) {
        match event {
            Event::Hydrated => {
                if self.gate.open() {
                    if self.scroll_listener.is_none() {
                        self.scroll_listener = Some(env.add_listener(ListenerKind::Scroll));
                    }
                    self.check_reveal(env);
                }
            }
            Event::Scroll | Event::Resize => self.check_reveal(env),
            Event::Timer(timer) if self.frame == Some(*timer) => self.on_frame(env),
            _ => {}
        }
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        if let Some(listener) = self.scroll_listener.take() {
            env.remove_listener(listener);
        }
        if let Some(timer) = self.frame.take() {
            env.stop_timer(timer);
        }
        for counter in &mut self.counters {
            counter.reset();
        }
        self.reveal.reset();
        self.gate.close();
        self.suspended = false;
    }

    fn render(&self, _env: &dyn Environment, animator: &dyn Animator) -> Node {
        let cards = STATS.iter().enumerate().map(|(i, stat)| {
            let card_motion = self.gate.motion(
                animator,
                VisualState::HIDDEN.with_offset(0.0, 40.0).with_scale(0.9),
                VisualState::IDENTITY,
                Duration::from_millis(800 + 100 * i as u64),
            );
            Node::new("div")
                .attr("class", "stat")
                .style(stat.color.style())
                .motion(card_motion)
                .child(Node::new("i").attr("icon", stat.icon.name()))
                .child(
                    Node::new("strong")
                        .id(format!("stat-{}", i))
                        .text(self.display(i).unwrap_or_default()),
                )
                .child(Node::new("h3").text(stat.label))
                .child(Node::new("p").text(stat.description))
        });

        Node::new("section")
            .id("stats")
            .child(heading(
                "📊 Our Impact",
                "PAKHIMS by the Numbers",
                "Trusted by thousands of patients and healthcare providers across Pakistan",
                fade_up(&self.gate, animator, 30.0),
            ))
            .child(Node::new("div").id(STATS_GRID_ID).children(cards))
            .child(
                Node::new("div")
                    .motion(fade_up(&self.gate, animator, 20.0))
                    .child(Node::new("h3").text("Growing Every Day"))
                    .child(Node::new("p").text(
                        "Our platform continues to expand, connecting more patients with quality healthcare services across Pakistan. Join our growing community of satisfied users.",
                    )),
            )
    }
}
