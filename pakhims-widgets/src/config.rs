//! Site configuration
//!
//! Loaded from the TOML file named by `PAKHIMS_CONFIG`. Every field has a
//! default, so an empty file (or no file at all) yields the stock site.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "PAKHIMS_CONFIG";

/// Top-level configuration for every widget on the site
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Header hide/show and active-section thresholds, in pixels
#[derive(Clone, Debug, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_hide_threshold")]
    pub hide_threshold: f64,
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: f64,
    /// Added to the scroll offset when probing for the active section
    #[serde(default = "default_active_offset")]
    pub active_offset: f64,
    /// Subtracted from a target's offset on click-to-navigate
    #[serde(default = "default_nav_offset")]
    pub nav_offset: f64,
}

fn default_hide_threshold() -> f64 { 100.0 }

fn default_scrolled_threshold() -> f64 { 20.0 }

fn default_active_offset() -> f64 { 150.0 }

fn default_nav_offset() -> f64 { 100.0 }

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            hide_threshold: default_hide_threshold(),
            scrolled_threshold: default_scrolled_threshold(),
            active_offset: default_active_offset(),
            nav_offset: default_nav_offset(),
        }
    }
}

/// Timer periods, all in milliseconds
#[derive(Clone, Debug, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_heartbeat_ms")]
    pub heartbeat_ms: u64,
    #[serde(default = "default_typewriter_ms")]
    pub typewriter_ms: u64,
    #[serde(default = "default_wave_tick_ms")]
    pub wave_tick_ms: u64,
    #[serde(default = "default_heart_message_ms")]
    pub heart_message_ms: u64,
    #[serde(default = "default_screenshot_autoplay_ms")]
    pub screenshot_autoplay_ms: u64,
    #[serde(default = "default_testimonial_autoplay_ms")]
    pub testimonial_autoplay_ms: u64,
    #[serde(default = "default_hotspot_zoom_delay_ms")]
    pub hotspot_zoom_delay_ms: u64,
    #[serde(default = "default_count_up_ms")]
    pub count_up_ms: u64,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_heartbeat_ms() -> u64 { 500 }

fn default_typewriter_ms() -> u64 { 100 }

fn default_wave_tick_ms() -> u64 { 50 }

fn default_heart_message_ms() -> u64 { 2500 }

fn default_screenshot_autoplay_ms() -> u64 { 4000 }

fn default_testimonial_autoplay_ms() -> u64 { 5000 }

fn default_hotspot_zoom_delay_ms() -> u64 { 500 }

fn default_count_up_ms() -> u64 { 2500 }

fn default_frame_ms() -> u64 { 16 }

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            heartbeat_ms: default_heartbeat_ms(),
            typewriter_ms: default_typewriter_ms(),
            wave_tick_ms: default_wave_tick_ms(),
            heart_message_ms: default_heart_message_ms(),
            screenshot_autoplay_ms: default_screenshot_autoplay_ms(),
            testimonial_autoplay_ms: default_testimonial_autoplay_ms(),
            hotspot_zoom_delay_ms: default_hotspot_zoom_delay_ms(),
            count_up_ms: default_count_up_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl TimingConfig {
    pub fn heartbeat(&self) -> Duration {
        Duration::from_millis(self.heartbeat_ms)
    }

    pub fn typewriter(&self) -> Duration {
        Duration::from_millis(self.typewriter_ms)
    }

    pub fn wave_tick(&self) -> Duration {
        Duration::from_millis(self.wave_tick_ms)
    }

    pub fn heart_message(&self) -> Duration {
        Duration::from_millis(self.heart_message_ms)
    }

    pub fn screenshot_autoplay(&self) -> Duration {
        Duration::from_millis(self.screenshot_autoplay_ms)
    }

    pub fn testimonial_autoplay(&self) -> Duration {
        Duration::from_millis(self.testimonial_autoplay_ms)
    }

    pub fn hotspot_zoom_delay(&self) -> Duration {
        Duration::from_millis(self.hotspot_zoom_delay_ms)
    }

    pub fn count_up(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Static asset resolution
#[derive(Clone, Debug, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_placeholder() -> String {
    "/images/placeholder.png".to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            placeholder: default_placeholder(),
        }
    }
}

/// Outbound links to the booking and signup sub-domains
#[derive(Clone, Debug, Deserialize)]
pub struct LinkConfig {
    #[serde(default = "default_booking_login")]
    pub booking_login: String,
    #[serde(default = "default_signup")]
    pub signup: String,
}

fn default_booking_login() -> String {
    "https://patient.pakhims.com/login".to_string()
}

fn default_signup() -> String {
    "https://pakhims.com/sign-up".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            booking_login: default_booking_login(),
            signup: default_signup(),
        }
    }
}

/// Responsive layout switches
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,
    /// Fraction of the viewport an element must clear before it counts as revealed
    #[serde(default = "default_reveal_fraction")]
    pub reveal_fraction: f64,
}

fn default_mobile_breakpoint() -> f64 { 768.0 }

fn default_reveal_fraction() -> f64 { 0.3 }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            reveal_fraction: default_reveal_fraction(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the file named by `PAKHIMS_CONFIG`.
    ///
    /// Falls back to defaults when the variable is unset.
    pub fn load() -> SiteResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                ::log::debug!("{} not set, using default site config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        ::log::info!("Loaded site config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> SiteResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.scroll.hide_threshold, 100.0);
        assert_eq!(config.scroll.active_offset, 150.0);
        assert_eq!(config.timing.heartbeat(), Duration::from_millis(500));
        assert_eq!(config.timing.typewriter(), Duration::from_millis(100));
        assert_eq!(config.assets.placeholder, "/images/placeholder.png");
        assert_eq!(config.layout.mobile_breakpoint, 768.0);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
            [timing]
            testimonial_autoplay_ms = 3000

            [links]
            signup = "https://profile.pakhims.com/signup"
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.testimonial_autoplay_ms, 3000);
        assert_eq!(config.timing.screenshot_autoplay_ms, 4000);
        assert_eq!(config.links.signup, "https://profile.pakhims.com/signup");
        assert_eq!(config.links.booking_login, "https://patient.pakhims.com/login");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = SiteConfig::from_toml_str("[scroll]\nhide_threshold = \"far\"").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = SiteConfig::from_file("/nonexistent/pakhims.toml").unwrap_err();
        assert!(matches!(err, SiteError::ConfigRead { .. }));
    }
}
