//! Banner placement shown under the recipe list.
//!
//! The banner is requested once, when the listing is first shown. A failed
//! load hides the slot for the rest of the session; there is no retry.

use super::network::{AdCreative, AdFormat, AdRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum BannerState {
    #[default]
    Idle,
    Loading,
    Visible(AdCreative),
    Hidden,
}

/// Non-blocking banner ad unit.
#[derive(Debug, Clone, Default)]
pub struct BannerSlot {
    unit_id: Option<String>,
    state: BannerState,
}

impl BannerSlot {
    /// Slot for `unit_id`; `None` yields a slot that never shows anything.
    #[must_use]
    pub fn new(unit_id: Option<String>) -> Self {
        Self {
            unit_id,
            state: BannerState::Idle,
        }
    }

    /// Request for the first load. Later calls return `None`.
    pub fn request(&mut self) -> Option<AdRequest> {
        if self.state != BannerState::Idle {
            return None;
        }
        let unit_id = self.unit_id.clone()?;
        self.state = BannerState::Loading;
        Some(AdRequest::new(AdFormat::Banner, unit_id))
    }

    pub fn on_loaded(&mut self, creative: AdCreative) {
        if self.state == BannerState::Loading {
            self.state = BannerState::Visible(creative);
        }
    }

    /// Hides the slot for good.
    pub fn on_ad_failed_to_load(&mut self, message: &str) {
        tracing::debug!(error = %message, "banner failed to load, hiding slot");
        self.state = BannerState::Hidden;
    }

    #[must_use]
    pub fn visible_creative(&self) -> Option<&AdCreative> {
        match &self.state {
            BannerState::Visible(creative) => Some(creative),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creative() -> AdCreative {
        AdCreative {
            id: "b1".to_string(),
            format: AdFormat::Banner,
            headline: "Fresh citrus".to_string(),
            body: String::new(),
            call_to_action: "Order".to_string(),
            advertiser: "Citrus Club".to_string(),
            personalized: false,
        }
    }

    #[test]
    fn requests_once_then_shows() {
        let mut slot = BannerSlot::new(Some("ca-app-pub-1/2".to_string()));
        let request = slot.request().unwrap();
        assert_eq!(request.format, AdFormat::Banner);
        assert!(slot.request().is_none());
        assert!(slot.visible_creative().is_none());

        slot.on_loaded(creative());
        assert_eq!(slot.visible_creative().map(|c| c.id.as_str()), Some("b1"));
    }

    #[test]
    fn failure_hides_without_retry() {
        let mut slot = BannerSlot::new(Some("ca-app-pub-1/2".to_string()));
        slot.request();
        slot.on_ad_failed_to_load("no fill");
        assert!(slot.visible_creative().is_none());
        assert!(slot.request().is_none());
        slot.on_loaded(creative());
        assert!(slot.visible_creative().is_none());
    }

    #[test]
    fn unconfigured_slot_never_requests() {
        let mut slot = BannerSlot::new(None);
        assert!(slot.request().is_none());
    }
}
