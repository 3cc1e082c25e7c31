//! Emerald Shaker: a Zellij plugin for browsing classic cocktail recipes.
//!
//! Emerald Shaker provides:
//! - A bundled, read-only catalog of cocktail recipes
//! - Substring search by cocktail name or by alcohol type
//! - A detail screen with glass, ingredients, instructions and food pairings
//! - Optional banner and interstitial ads served from a worker thread, which
//!   can never block navigation

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Splash / Listing / Detail navigation             │
//! │  - Pending selection behind interstitials           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Recipes     │   │ - Ad network  │
//! │ - Theming     │   │ - Filtering   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ads (ads/)                                         │
//! │  - Unit configuration, gateway, banner, network     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`ads`]: Ad placements, readiness state machine and ad network
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Recipe store and filter engine
//! - [`domain`]: Core domain types (Recipe, errors)
//! - [`infrastructure`]: Sandbox paths
//! - [`worker`]: Background worker hosting the ad network
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/emerald-shaker.wasm" {
//!         splash_seconds "2.5"
//!         interstitial_ad_unit_id "ca-app-pub-1234567890123456/1234567890"
//!         banner_ad_unit_id "ca-app-pub-1234567890123456/0987654321"
//!         ads_test_mode "false"
//!         theme "emerald"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use emerald_shaker::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::Started, Event::SplashElapsed, Event::KeyDown, Event::SelectRecipe] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.detail_recipe().is_some());
//! # Ok::<(), emerald_shaker::ShakerError>(())
//! ```

pub mod ads;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, NavigationState};
pub use catalog::{Catalog, FilterMode, QueryState};
pub use domain::{Recipe, RecipeId, Result, ShakerError};
pub use ui::Theme;

use ads::AdConfig;
use app::DEFAULT_SPLASH_SECONDS;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seconds the splash screen stays up. Default: 2.5
    pub splash_seconds: f64,

    /// Banner placement; falls back to the build environment when unset.
    pub banner_ad_unit_id: Option<String>,

    /// Interstitial placement; falls back to the build environment when unset.
    pub interstitial_ad_unit_id: Option<String>,

    /// Use the ad network's public test units. Default: `false`
    pub ads_test_mode: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splash_seconds: DEFAULT_SPLASH_SECONDS,
            banner_ad_unit_id: None,
            interstitial_ad_unit_id: None,
            ads_test_mode: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparsable values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use emerald_shaker::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("splash_seconds".to_string(), "1".to_string());
    /// map.insert("ads_test_mode".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.splash_seconds, 1.0);
    /// assert!(config.ads_test_mode);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let splash_seconds = config
            .get("splash_seconds")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .unwrap_or(DEFAULT_SPLASH_SECONDS);

        let ads_test_mode = config
            .get("ads_test_mode")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            splash_seconds,
            banner_ad_unit_id: config.get("banner_ad_unit_id").cloned(),
            interstitial_ad_unit_id: config.get("interstitial_ad_unit_id").cloned(),
            ads_test_mode,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolved ad placements.
    #[must_use]
    pub fn ad_config(&self) -> AdConfig {
        AdConfig::resolve(
            self.banner_ad_unit_id.as_deref(),
            self.interstitial_ad_unit_id.as_deref(),
            self.ads_test_mode,
        )
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state.
///
/// A bundled catalog that fails to load is logged and replaced by an empty
/// one, so the plugin still starts and shows its empty state.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing emerald shaker plugin");

    let catalog = Catalog::bundled().unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled catalog failed to load");
        Catalog::default()
    });

    let ads = config.ad_config();
    tracing::debug!(
        recipes = catalog.len(),
        banner = ads.banner_unit().is_some(),
        interstitial = ads.interstitial_unit().is_some(),
        "catalog and ad placements resolved"
    );

    let mut state = AppState::new(Arc::new(catalog), &ads, config.load_theme());
    state.splash_seconds = config.splash_seconds;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let map: BTreeMap<String, String> = [
            ("splash_seconds", "soon"),
            ("ads_test_mode", "yes please"),
            ("theme", "emerald-night"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_zellij(&map);
        assert!((config.splash_seconds - DEFAULT_SPLASH_SECONDS).abs() < f64::EPSILON);
        assert!(!config.ads_test_mode);
        assert_eq!(config.theme_name.as_deref(), Some("emerald-night"));
    }

    #[test]
    fn negative_splash_is_rejected() {
        let map = BTreeMap::from([("splash_seconds".to_string(), "-1".to_string())]);
        assert!((Config::from_zellij(&map).splash_seconds - DEFAULT_SPLASH_SECONDS).abs() < f64::EPSILON);
    }

    #[test]
    fn initialize_applies_theme_and_splash() {
        let config = Config {
            splash_seconds: 0.5,
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert!((state.splash_seconds - 0.5).abs() < f64::EPSILON);
        assert_eq!(state.navigation, NavigationState::Splash);
        assert!(!state.catalog.is_empty());
    }

    #[test]
    fn test_mode_enables_both_placements() {
        let config = Config {
            ads_test_mode: true,
            ..Config::default()
        };
        let ads = config.ad_config();
        assert_eq!(ads.banner_unit(), Some(ads::TEST_BANNER_UNIT_ID));
        assert_eq!(ads.interstitial_unit(), Some(ads::TEST_INTERSTITIAL_UNIT_ID));
    }
}
