//! Application layer: the navigation state machine.
//!
//! Sits between the plugin shim (`main.rs`) and the catalog, ads and worker
//! layers. Data flows one way:
//!
//! ```text
//! Keys / Timer / Worker replies → Event → handle_event → AppState → Actions
//!                                      ↑                                │
//!                                      └────────── Worker replies ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and gating rules
//! - [`modes`]: Screen and input mode types
//! - [`splash`]: Single-shot, cancellable splash timer
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod splash;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, NavigationState};
pub use splash::{SplashTimer, DEFAULT_SPLASH_SECONDS};
pub use state::AppState;
