//! Static asset resolution
//!
//! Image references resolve under the configured base path. Absolute URLs
//! pass through untouched. Anything the host cannot resolve, and any image
//! that later reports a load error, renders the placeholder instead.

use crate::config::AssetConfig;
use crate::env::Environment;

#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_path: String,
    placeholder: String,
}

impl AssetResolver {
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            base_path: config.base_path.trim_end_matches('/').to_string(),
            placeholder: config.placeholder.clone(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Public path of `src`, without checking that it exists
    pub fn public_path(&self, src: &str) -> String {
        if is_absolute_url(src) {
            return src.to_string();
        }
        format!("{}/{}", self.base_path, src.trim_start_matches('/'))
    }

    /// Public path of `src`, or the placeholder when the host cannot resolve it
    pub fn resolve(&self, env: &dyn Environment, src: &str) -> String {
        let path = self.public_path(src);
        if is_absolute_url(&path) || env.asset_exists(&path) {
            path
        } else {
            ::log::debug!("Asset {} missing, using placeholder", path);
            self.placeholder.clone()
        }
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(&AssetConfig::default())
    }
}

fn is_absolute_url(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
}

/// One rendered image that falls back to the placeholder after a load error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    src: String,
    failed: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Record a load error reported for `path`. Returns whether it was this image.
    pub fn on_error(&mut self, resolver: &AssetResolver, path: &str) -> bool {
        if self.failed || (path != self.src && path != resolver.public_path(&self.src)) {
            return false;
        }
        self.failed = true;
        true
    }

    /// Path to render right now
    pub fn current(&self, resolver: &AssetResolver, env: &dyn Environment) -> String {
        if self.failed {
            resolver.placeholder().to_string()
        } else {
            resolver.resolve(env, &self.src)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::virtual_env::VirtualEnvironment;

    #[test]
    fn test_resolution_rules() {
        let resolver = AssetResolver::new(&AssetConfig {
            base_path: "/static/".to_string(),
            placeholder: "/static/placeholder.png".to_string(),
        });
        let mut env = VirtualEnvironment::new();
        env.set_known_assets(["/static/images/1.png"]);

        assert_eq!(resolver.resolve(&env, "/images/1.png"), "/static/images/1.png");
        assert_eq!(resolver.resolve(&env, "images/1.png"), "/static/images/1.png");
        assert_eq!(resolver.resolve(&env, "/images/9.png"), "/static/placeholder.png");
        assert_eq!(
            resolver.resolve(&env, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_image_slot_falls_back_after_error() {
        let resolver = AssetResolver::default();
        let env = VirtualEnvironment::new();
        let mut slot = ImageSlot::new("/images/2.png");
        assert_eq!(slot.current(&resolver, &env), "/images/2.png");

        assert!(!slot.on_error(&resolver, "/images/1.png"));
        assert!(slot.on_error(&resolver, "/images/2.png"));
        assert!(!slot.on_error(&resolver, "/images/2.png"));
        assert_eq!(slot.current(&resolver, &env), "/images/placeholder.png");
    }
}
