//! Ad unit configuration.
//!
//! Both placements are optional. A missing or blank identifier disables the
//! placement: the banner is never requested and the interstitial gateway stays
//! permanently not-ready, which routes every selection straight to the detail
//! view.
//!
//! Identifiers are resolved from, highest priority first:
//!
//! 1. plugin configuration (`banner_ad_unit_id`, `interstitial_ad_unit_id`)
//! 2. the build environment (`ADMOB_BANNER_AD_UNIT_ID`,
//!    `ADMOB_INTERSTITIAL_AD_UNIT_ID`), captured at compile time
//!
//! With `ads_test_mode` enabled the network's public test units are used
//! instead, so development builds never request live inventory.

/// Public test unit for banners.
pub const TEST_BANNER_UNIT_ID: &str = "ca-app-pub-3940256099942544/6300978111";

/// Public test unit for interstitials.
pub const TEST_INTERSTITIAL_UNIT_ID: &str = "ca-app-pub-3940256099942544/1033173712";

const BUILD_BANNER_UNIT_ID: Option<&str> = option_env!("ADMOB_BANNER_AD_UNIT_ID");
const BUILD_INTERSTITIAL_UNIT_ID: Option<&str> = option_env!("ADMOB_INTERSTITIAL_AD_UNIT_ID");

/// Trims an ad unit identifier; blank input means "not configured".
///
/// # Examples
///
/// ```
/// use emerald_shaker::ads::normalize_unit_id;
///
/// assert_eq!(normalize_unit_id(Some("  ca-app-pub-1/2 ")), Some("ca-app-pub-1/2".to_string()));
/// assert_eq!(normalize_unit_id(Some("   ")), None);
/// assert_eq!(normalize_unit_id(None), None);
/// ```
#[must_use]
pub fn normalize_unit_id(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
}

/// Whether `unit_id` is one of the network's public test units.
#[must_use]
pub fn is_test_unit(unit_id: &str) -> bool {
    unit_id == TEST_BANNER_UNIT_ID || unit_id == TEST_INTERSTITIAL_UNIT_ID
}

/// Resolved ad placements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdConfig {
    pub banner_unit_id: Option<String>,
    pub interstitial_unit_id: Option<String>,
    pub test_mode: bool,
}

impl AdConfig {
    /// Resolves placements from plugin configuration, falling back to the
    /// identifiers captured from the build environment.
    #[must_use]
    pub fn resolve(banner: Option<&str>, interstitial: Option<&str>, test_mode: bool) -> Self {
        Self {
            banner_unit_id: normalize_unit_id(banner)
                .or_else(|| normalize_unit_id(BUILD_BANNER_UNIT_ID)),
            interstitial_unit_id: normalize_unit_id(interstitial)
                .or_else(|| normalize_unit_id(BUILD_INTERSTITIAL_UNIT_ID)),
            test_mode,
        }
    }

    /// Configuration with both placements disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Banner unit to request, if any.
    #[must_use]
    pub fn banner_unit(&self) -> Option<&str> {
        if self.test_mode {
            return Some(TEST_BANNER_UNIT_ID);
        }
        self.banner_unit_id.as_deref()
    }

    /// Interstitial unit to request, if any.
    #[must_use]
    pub fn interstitial_unit(&self) -> Option<&str> {
        if self.test_mode {
            return Some(TEST_INTERSTITIAL_UNIT_ID);
        }
        self.interstitial_unit_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_configuration_wins_and_is_trimmed() {
        let config = AdConfig::resolve(Some(" ca-app-pub-1/2 "), Some("ca-app-pub-1/3"), false);
        assert_eq!(config.banner_unit(), Some("ca-app-pub-1/2"));
        assert_eq!(config.interstitial_unit(), Some("ca-app-pub-1/3"));
    }

    #[test]
    fn test_mode_substitutes_public_test_units() {
        let config = AdConfig::resolve(Some("ca-app-pub-1/2"), None, true);
        assert_eq!(config.banner_unit(), Some(TEST_BANNER_UNIT_ID));
        assert_eq!(config.interstitial_unit(), Some(TEST_INTERSTITIAL_UNIT_ID));
    }

    #[test]
    fn disabled_config_has_no_units() {
        let config = AdConfig::disabled();
        assert!(config.banner_unit().is_none());
        assert!(config.interstitial_unit().is_none());
    }

    #[test]
    fn test_units_are_recognized() {
        assert!(is_test_unit(TEST_BANNER_UNIT_ID));
        assert!(!is_test_unit("ca-app-pub-1/2"));
    }
}
