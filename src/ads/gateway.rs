//! Interstitial readiness state machine.
//!
//! The gateway never performs I/O. Every transition that needs the network
//! hands back an [`AdRequest`] for the caller to ship to the worker, and every
//! network answer comes back in through [`InterstitialGateway::on_event`].
//!
//! ```text
//!   NotLoaded ──prepare──▶ Loading ──Loaded──▶ Ready ──present──▶ Presenting
//!       ▲                   │  ▲                                   │
//!       │   3rd failure     │  │ Dismissed / Failed (one request)  │
//!       └───────────────────┘  └───────────────────────────────────┘
//! ```
//!
//! A ready ad expires one hour after it was loaded. An expired ad is not
//! ready, and the next `prepare` discards it and requests a fresh one.

use super::network::{AdCreative, AdFormat, AdRequest};
use crate::domain::error::{Result, ShakerError};
use chrono::{DateTime, Duration, Utc};

/// Consecutive load failures tolerated before the gateway stops retrying on
/// its own.
pub const MAX_CONSECUTIVE_LOAD_FAILURES: u32 = 3;

const AD_TTL_SECONDS: i64 = 60 * 60;

/// Readiness of the interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdReadiness {
    #[default]
    NotLoaded,
    Loading,
    Ready,
    Presenting,
}

/// Network or user outcome fed back into the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdEvent {
    /// A load finished with a creative.
    Loaded {
        creative: AdCreative,
        loaded_at: DateTime<Utc>,
    },
    /// The user closed a presented ad.
    Dismissed,
    /// A load or a presentation failed.
    Failed { message: String },
}

/// What the caller must do after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdOutcome {
    /// Request to send to the network, if any.
    pub request: Option<AdRequest>,
    /// A presentation cycle just finished, by dismissal or by failure.
    pub presentation_ended: bool,
}

/// Interstitial placement.
#[derive(Debug, Clone, Default)]
pub struct InterstitialGateway {
    unit_id: Option<String>,
    readiness: AdReadiness,
    creative: Option<AdCreative>,
    loaded_at: Option<DateTime<Utc>>,
    consecutive_failures: u32,
}

impl InterstitialGateway {
    /// Gateway for `unit_id`; `None` yields a gateway that is never ready.
    #[must_use]
    pub fn new(unit_id: Option<String>) -> Self {
        Self {
            unit_id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.unit_id.is_some()
    }

    #[must_use]
    pub fn readiness(&self) -> AdReadiness {
        self.readiness
    }

    /// The creative being presented, if any.
    #[must_use]
    pub fn presenting(&self) -> Option<&AdCreative> {
        match self.readiness {
            AdReadiness::Presenting => self.creative.as_ref(),
            _ => None,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.loaded_at
            .is_some_and(|loaded| now - loaded >= Duration::seconds(AD_TTL_SECONDS))
    }

    /// Whether an ad can be presented right now.
    #[must_use]
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        self.readiness == AdReadiness::Ready && !self.is_expired(now)
    }

    fn request(&mut self) -> Option<AdRequest> {
        let unit_id = self.unit_id.clone()?;
        self.readiness = AdReadiness::Loading;
        self.creative = None;
        self.loaded_at = None;
        Some(AdRequest::new(AdFormat::Interstitial, unit_id))
    }

    /// Asks for an ad if none is loaded or in flight.
    ///
    /// Returns the request to send, or `None` when the gateway is
    /// unconfigured, already loading, presenting, or holding a fresh ad.
    pub fn prepare(&mut self, now: DateTime<Utc>) -> Option<AdRequest> {
        if !self.is_configured() {
            return None;
        }

        match self.readiness {
            AdReadiness::Loading | AdReadiness::Presenting => None,
            AdReadiness::Ready if !self.is_expired(now) => None,
            AdReadiness::Ready => {
                tracing::debug!("loaded interstitial expired, requesting a fresh one");
                self.consecutive_failures = 0;
                self.request()
            }
            AdReadiness::NotLoaded => {
                self.consecutive_failures = 0;
                self.request()
            }
        }
    }

    /// Starts presenting the loaded ad.
    ///
    /// # Errors
    ///
    /// Returns [`ShakerError::AdNetwork`] unless the gateway is `Ready`.
    pub fn present(&mut self) -> Result<AdCreative> {
        if self.readiness != AdReadiness::Ready {
            return Err(ShakerError::AdNetwork(format!(
                "interstitial is not ready (state: {:?})",
                self.readiness
            )));
        }
        let creative = self
            .creative
            .clone()
            .ok_or_else(|| ShakerError::AdNetwork("ready interstitial has no creative".to_string()))?;
        self.readiness = AdReadiness::Presenting;
        Ok(creative)
    }

    /// Applies a network or user event.
    ///
    /// Events that do not fit the current readiness are stale and ignored.
    pub fn on_event(&mut self, event: AdEvent) -> AdOutcome {
        match (self.readiness, event) {
            (AdReadiness::Loading, AdEvent::Loaded { creative, loaded_at }) => {
                tracing::debug!(creative_id = %creative.id, "interstitial loaded");
                self.readiness = AdReadiness::Ready;
                self.creative = Some(creative);
                self.loaded_at = Some(loaded_at);
                self.consecutive_failures = 0;
                AdOutcome::default()
            }
            (AdReadiness::Loading, AdEvent::Failed { message }) => {
                self.consecutive_failures += 1;
                if self.consecutive_failures >= MAX_CONSECUTIVE_LOAD_FAILURES {
                    tracing::warn!(
                        error = %message,
                        failures = self.consecutive_failures,
                        "interstitial load failed repeatedly, waiting for next prepare"
                    );
                    self.readiness = AdReadiness::NotLoaded;
                    return AdOutcome::default();
                }
                tracing::debug!(
                    error = %message,
                    failures = self.consecutive_failures,
                    "interstitial load failed, retrying"
                );
                AdOutcome {
                    request: self.request(),
                    presentation_ended: false,
                }
            }
            (AdReadiness::Presenting, AdEvent::Dismissed | AdEvent::Failed { .. }) => {
                tracing::debug!("interstitial presentation ended");
                self.consecutive_failures = 0;
                AdOutcome {
                    request: self.request(),
                    presentation_ended: true,
                }
            }
            (readiness, event) => {
                tracing::debug!(?readiness, ?event, "ignoring stale interstitial event");
                AdOutcome::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const UNIT: &str = "ca-app-pub-1111/2222";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
    }

    fn creative() -> AdCreative {
        AdCreative {
            id: "i1".to_string(),
            format: AdFormat::Interstitial,
            headline: "Master the classics".to_string(),
            body: String::new(),
            call_to_action: String::new(),
            advertiser: "Bar School".to_string(),
            personalized: false,
        }
    }

    fn loaded_at(at: DateTime<Utc>) -> AdEvent {
        AdEvent::Loaded {
            creative: creative(),
            loaded_at: at,
        }
    }

    fn ready_gateway() -> InterstitialGateway {
        let mut gateway = InterstitialGateway::new(Some(UNIT.to_string()));
        assert!(gateway.prepare(t0()).is_some());
        gateway.on_event(loaded_at(t0()));
        gateway
    }

    #[test]
    fn unconfigured_gateway_is_never_ready() {
        let mut gateway = InterstitialGateway::new(None);
        assert!(gateway.prepare(t0()).is_none());
        assert_eq!(gateway.readiness(), AdReadiness::NotLoaded);
        assert!(!gateway.is_ready(t0()));
        assert!(gateway.present().is_err());
    }

    #[test]
    fn prepare_is_idempotent_while_loading() {
        let mut gateway = InterstitialGateway::new(Some(UNIT.to_string()));
        let request = gateway.prepare(t0()).unwrap();
        assert_eq!(request.format, AdFormat::Interstitial);
        assert!(request.non_personalized_only);
        assert!(gateway.prepare(t0()).is_none());
        assert_eq!(gateway.readiness(), AdReadiness::Loading);
    }

    #[test]
    fn full_cycle_requests_exactly_once_after_dismissal() {
        let mut gateway = ready_gateway();
        assert!(gateway.is_ready(t0()));

        let shown = gateway.present().unwrap();
        assert_eq!(gateway.presenting(), Some(&shown));
        assert!(gateway.present().is_err());

        let outcome = gateway.on_event(AdEvent::Dismissed);
        assert!(outcome.presentation_ended);
        assert!(outcome.request.is_some());
        assert_eq!(gateway.readiness(), AdReadiness::Loading);

        let again = gateway.on_event(AdEvent::Dismissed);
        assert_eq!(again, AdOutcome::default());
    }

    #[test]
    fn presentation_failure_ends_presentation_like_dismissal() {
        let mut gateway = ready_gateway();
        gateway.present().unwrap();
        let outcome = gateway.on_event(AdEvent::Failed {
            message: "renderer crashed".to_string(),
        });
        assert!(outcome.presentation_ended);
        assert!(outcome.request.is_some());
    }

    #[test]
    fn load_failures_retry_then_rest() {
        let mut gateway = InterstitialGateway::new(Some(UNIT.to_string()));
        gateway.prepare(t0());
        let fail = || AdEvent::Failed {
            message: "no fill".to_string(),
        };

        for _ in 1..MAX_CONSECUTIVE_LOAD_FAILURES {
            let outcome = gateway.on_event(fail());
            assert!(outcome.request.is_some());
            assert!(!outcome.presentation_ended);
        }
        let last = gateway.on_event(fail());
        assert!(last.request.is_none());
        assert_eq!(gateway.readiness(), AdReadiness::NotLoaded);

        assert!(gateway.prepare(t0()).is_some());
    }

    #[test]
    fn expired_ad_is_not_ready_and_is_replaced() {
        let mut gateway = ready_gateway();
        let later = t0() + Duration::minutes(61);
        assert!(!gateway.is_ready(later));

        let request = gateway.prepare(later);
        assert!(request.is_some());
        assert_eq!(gateway.readiness(), AdReadiness::Loading);
    }

    #[test]
    fn fresh_ready_ad_is_kept_by_prepare() {
        let mut gateway = ready_gateway();
        assert!(gateway.prepare(t0() + Duration::minutes(5)).is_none());
        assert_eq!(gateway.readiness(), AdReadiness::Ready);
    }

    #[test]
    fn stale_load_event_is_ignored() {
        let mut gateway = InterstitialGateway::new(Some(UNIT.to_string()));
        let outcome = gateway.on_event(loaded_at(t0()));
        assert_eq!(outcome, AdOutcome::default());
        assert_eq!(gateway.readiness(), AdReadiness::NotLoaded);
    }
}
