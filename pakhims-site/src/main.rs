//! PAKHIMS site - snapshot exporter
//!
//! ```text
//! pakhims-site export  [--route PATH]
//! pakhims-site preview [--route PATH] [--ms N]
//! ```

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use pakhims_site::{Page, Route};
use pakhims_widgets::{
    EasedAnimator, Event, FilePreferences, SiteConfig, StillAnimator, VirtualEnvironment,
};

const DEFAULT_PREVIEW_MS: u64 = 3000;

enum Command {
    Export { route: Route },
    Preview { route: Route, elapsed: Duration },
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut route = Route::Home;
    let mut elapsed = Duration::from_millis(DEFAULT_PREVIEW_MS);

    let Some(command) = args.first() else {
        bail!("usage: pakhims-site <export|preview> [--route PATH] [--ms N]");
    };
    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let value = rest
            .next()
            .ok_or_else(|| anyhow!("{} expects a value", flag))?;
        match flag.as_str() {
            "--route" => {
                route = Route::from_path(value)
                    .ok_or_else(|| anyhow!("unknown route {:?}", value))?;
            }
            "--ms" => {
                let ms: u64 = value
                    .parse()
                    .with_context(|| format!("invalid --ms value {:?}", value))?;
                elapsed = Duration::from_millis(ms);
            }
            other => bail!("unknown flag {}", other),
        }
    }

    match command.as_str() {
        "export" => Ok(Command::Export { route }),
        "preview" => Ok(Command::Preview { route, elapsed }),
        other => bail!("unknown command {}", other),
    }
}

fn export(route: Route, config: &SiteConfig) -> Result<String> {
    let env = VirtualEnvironment::new();
    let page = Page::new(route, config);
    let tree = page.render(&env, &StillAnimator);
    serde_json::to_string_pretty(&tree).context("Failed to serialize page")
}

fn preview(route: Route, elapsed: Duration, config: &SiteConfig) -> Result<String> {
    let preferences = FilePreferences::open_default().context("Failed to open preferences")?;
    let mut env = VirtualEnvironment::with_preferences(preferences);
    let mut page = Page::new(route, config);

    page.mount(&mut env);
    page.hydrate(&mut env);
    env.run_for(elapsed, |env, timer| page.dispatch(env, &Event::Timer(timer)));
    ::log::info!(
        "Previewed {} for {}ms ({} timers started)",
        route.path(),
        elapsed.as_millis(),
        env.timers_started()
    );

    let tree = page.render(&env, &EasedAnimator::default());
    page.unmount(&mut env);
    serde_json::to_string_pretty(&tree).context("Failed to serialize page")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let config = SiteConfig::load().context("Failed to load site configuration")?;

    let json = match command {
        Command::Export { route } => export(route, &config)?,
        Command::Preview { route, elapsed } => preview(route, elapsed, &config)?,
    };
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_export_and_preview() {
        match parse_args(&args(&["export", "--route", "/privacy-policy"])) {
            Ok(Command::Export { route }) => assert_eq!(route, Route::PrivacyPolicy),
            _ => panic!("expected export"),
        }
        match parse_args(&args(&["preview", "--ms", "1500"])) {
            Ok(Command::Preview { route, elapsed }) => {
                assert_eq!(route, Route::Home);
                assert_eq!(elapsed, Duration::from_millis(1500));
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["serve"])).is_err());
        assert!(parse_args(&args(&["export", "--route", "/pricing"])).is_err());
        assert!(parse_args(&args(&["preview", "--ms"])).is_err());
        assert!(parse_args(&args(&["preview", "--ms", "soon"])).is_err());
    }

    #[test]
    fn test_export_is_pre_hydration_json() {
        let json = export(Route::Home, &SiteConfig::default());
        let json = json.unwrap_or_default();
        assert!(json.contains("\"data-route\""));
        assert!(!json.contains("\"duration_ms\""));
    }
}
