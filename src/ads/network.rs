//! Ad network abstraction.
//!
//! The plugin never talks to an ad network directly. Requests are built on the
//! plugin thread, shipped to the worker thread, and answered there by an
//! [`AdNetwork`] implementation. Everything crossing that boundary is plain
//! serde data.

use crate::domain::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormat {
    Banner,
    Interstitial,
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Banner => f.write_str("banner"),
            Self::Interstitial => f.write_str("interstitial"),
        }
    }
}

/// A single request for one ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRequest {
    pub format: AdFormat,
    pub unit_id: String,
    /// Restricts fill to creatives that do not rely on user profiling.
    pub non_personalized_only: bool,
}

impl AdRequest {
    /// Builds a request for `unit_id`.
    ///
    /// Every request the plugin issues is non-personalized.
    pub fn new(format: AdFormat, unit_id: impl Into<String>) -> Self {
        Self {
            format,
            unit_id: unit_id.into(),
            non_personalized_only: true,
        }
    }
}

/// A filled ad, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCreative {
    pub id: String,
    pub format: AdFormat,
    pub headline: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub call_to_action: String,
    pub advertiser: String,
    /// Whether the creative is targeted using a user profile.
    #[serde(default)]
    pub personalized: bool,
}

/// An external ad-serving network.
///
/// Implementations run on the worker thread. Calls block that thread only,
/// never the plugin UI.
pub trait AdNetwork: Send {
    /// Prepares the network for serving.
    ///
    /// # Errors
    ///
    /// Returns [`ShakerError::AdNetwork`](crate::ShakerError::AdNetwork) when
    /// the network cannot serve at all. Callers treat this as non-fatal.
    fn initialize(&mut self) -> Result<()>;

    /// Requests one ad.
    ///
    /// # Errors
    ///
    /// Returns [`ShakerError::AdNetwork`](crate::ShakerError::AdNetwork) for a
    /// malformed unit identifier, an uninitialized network, or no fill.
    fn load(&mut self, request: &AdRequest) -> Result<AdCreative>;

    /// Number of creatives available after initialization.
    fn inventory_len(&self) -> usize {
        0
    }
}
