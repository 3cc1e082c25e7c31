//! House ad network backed by a bundled inventory.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "creatives": [
//!     {
//!       "id": "house-banner-1",
//!       "format": "banner",
//!       "headline": "Emerald Shaker Pro",
//!       "body": "Unlock seasonal menus.",
//!       "call_to_action": "Learn more",
//!       "advertiser": "Emerald Shaker",
//!       "personalized": false
//!     }
//!   ]
//! }
//! ```

use super::config::is_test_unit;
use super::network::{AdCreative, AdFormat, AdNetwork, AdRequest};
use crate::domain::error::{Result, ShakerError};
use serde::Deserialize;
use std::collections::HashMap;

const BUNDLED_INVENTORY: &str = include_str!("../../assets/house_ads.json");

const UNIT_ID_PREFIX: &str = "ca-app-pub-";

#[derive(Debug, Deserialize)]
struct InventoryData {
    #[allow(dead_code)]
    version: u32,

    #[serde(default)]
    creatives: Vec<AdCreative>,
}

/// Checks the `ca-app-pub-<publisher>/<slot>` shape of a unit identifier.
///
/// # Examples
///
/// ```
/// use emerald_shaker::ads::is_valid_unit_id;
///
/// assert!(is_valid_unit_id("ca-app-pub-3940256099942544/1033173712"));
/// assert!(!is_valid_unit_id("ca-app-pub-3940256099942544~1033173712"));
/// assert!(!is_valid_unit_id("banner"));
/// ```
#[must_use]
pub fn is_valid_unit_id(unit_id: &str) -> bool {
    let Some(rest) = unit_id.strip_prefix(UNIT_ID_PREFIX) else {
        return false;
    };
    let Some((publisher, slot)) = rest.split_once('/') else {
        return false;
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(publisher) && all_digits(slot)
}

/// Serves creatives from a JSON inventory, rotating round-robin per format.
///
/// The inventory is parsed on [`initialize`](AdNetwork::initialize), not at
/// construction, so a corrupt inventory surfaces as an initialization
/// failure the plugin can shrug off.
#[derive(Debug)]
pub struct HouseAdNetwork {
    source: String,
    creatives: Vec<AdCreative>,
    initialized: bool,
    cursors: HashMap<AdFormat, usize>,
}

impl HouseAdNetwork {
    /// Network over the inventory bundled with the plugin.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_INVENTORY)
    }

    /// Network over a custom inventory document.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            source: json.into(),
            creatives: Vec::new(),
            initialized: false,
            cursors: HashMap::new(),
        }
    }

    fn test_creative(format: AdFormat) -> AdCreative {
        AdCreative {
            id: format!("test-{format}"),
            format,
            headline: "Test Ad".to_string(),
            body: "This is a test ad served for development builds.".to_string(),
            call_to_action: "Dismiss".to_string(),
            advertiser: "Test Ads".to_string(),
            personalized: false,
        }
    }

    fn next_fill(&mut self, request: &AdRequest) -> Option<AdCreative> {
        let eligible: Vec<&AdCreative> = self
            .creatives
            .iter()
            .filter(|c| c.format == request.format)
            .filter(|c| !(request.non_personalized_only && c.personalized))
            .collect();

        if eligible.is_empty() {
            return None;
        }

        let cursor = self.cursors.entry(request.format).or_insert(0);
        let creative = eligible[*cursor % eligible.len()].clone();
        *cursor = cursor.wrapping_add(1);
        Some(creative)
    }
}

impl AdNetwork for HouseAdNetwork {
    fn initialize(&mut self) -> Result<()> {
        let data: InventoryData = serde_json::from_str(&self.source)
            .map_err(|e| ShakerError::AdNetwork(format!("invalid ad inventory: {e}")))?;

        if data.creatives.is_empty() {
            return Err(ShakerError::AdNetwork("ad inventory is empty".to_string()));
        }

        tracing::debug!(creative_count = data.creatives.len(), "house ad inventory loaded");

        self.creatives = data.creatives;
        self.cursors.clear();
        self.initialized = true;
        Ok(())
    }

    fn load(&mut self, request: &AdRequest) -> Result<AdCreative> {
        let _span = tracing::debug_span!(
            "house_ad_load",
            format = %request.format,
            unit_id = %request.unit_id
        )
        .entered();

        if !self.initialized {
            return Err(ShakerError::AdNetwork("ad network is not initialized".to_string()));
        }

        if !is_valid_unit_id(&request.unit_id) {
            return Err(ShakerError::AdNetwork(format!(
                "malformed ad unit id: {}",
                request.unit_id
            )));
        }

        if is_test_unit(&request.unit_id) {
            return Ok(Self::test_creative(request.format));
        }

        self.next_fill(request).ok_or_else(|| {
            ShakerError::AdNetwork(format!("no fill for {} request", request.format))
        })
    }

    fn inventory_len(&self) -> usize {
        self.creatives.len()
    }
}
