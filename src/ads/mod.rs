//! Advertising: placement configuration, the interstitial gateway, the banner
//! slot and the network they talk to.
//!
//! Ads are strictly optional. An unconfigured placement, a network that fails
//! to initialize and a load that never fills all degrade to "no ad", and none
//! of them can hold up navigation.
//!
//! # Modules
//!
//! - `config`: [`AdConfig`] and unit identifier normalization
//! - `network`: [`AdNetwork`] trait and the request/creative types
//! - `house`: [`HouseAdNetwork`], the bundled inventory network
//! - `gateway`: [`InterstitialGateway`] readiness state machine
//! - `banner`: [`BannerSlot`]

pub mod banner;
pub mod config;
pub mod gateway;
pub mod house;
pub mod network;

pub use banner::BannerSlot;
pub use config::{
    is_test_unit, normalize_unit_id, AdConfig, TEST_BANNER_UNIT_ID, TEST_INTERSTITIAL_UNIT_ID,
};
pub use gateway::{AdEvent, AdOutcome, AdReadiness, InterstitialGateway, MAX_CONSECUTIVE_LOAD_FAILURES};
pub use house::{is_valid_unit_id, HouseAdNetwork};
pub use network::{AdCreative, AdFormat, AdNetwork, AdRequest};
