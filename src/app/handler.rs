//! Event handling and state transitions.
//!
//! [`handle_event`] is the navigation state machine. It mutates [`AppState`]
//! and returns the side effects for the plugin shim to execute, so it runs
//! unchanged under unit tests.
//!
//! # Gating
//!
//! Two rules apply before any event is dispatched:
//!
//! 1. On the splash screen every user intent is dropped. Only the splash
//!    timer leaves the splash screen.
//! 2. While an interstitial is presenting (and a selection is pending) the
//!    only accepted intent is closing the interstitial.
//!
//! Ad network answers are never gated, and no ad outcome can produce an
//! error: loads that fail and presentations that end both release the
//! pending selection.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use emerald_shaker::ads::AdConfig;
//! use emerald_shaker::app::{handle_event, AppState, Event};
//! use emerald_shaker::catalog::Catalog;
//! use emerald_shaker::ui::theme::Theme;
//!
//! let catalog = Arc::new(Catalog::bundled()?);
//! let mut state = AppState::new(catalog, &AdConfig::disabled(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Started)?;
//! assert!(!actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{InputMode, NavigationState};
use crate::ads::{AdEvent, AdFormat, AdOutcome};
use crate::app::{Action, AppState};
use crate::catalog::FilterMode;
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events from user input, the plugin runtime or the ad worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin finished loading.
    Started,
    /// The splash timer fired.
    SplashElapsed,
    /// The plugin is about to close.
    Teardown,

    /// Cursor down in the listing, scroll down in the detail screen.
    KeyDown,
    /// Cursor up in the listing, scroll up in the detail screen.
    KeyUp,
    /// Opens the highlighted recipe.
    SelectRecipe,
    /// Leaves the detail screen.
    Back,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode. The query is kept.
    SearchMode,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Clears the query and returns to normal mode.
    Escape,

    /// Selects the filter mode; clears the query.
    SetFilterMode(FilterMode),
    /// Switches between name and alcohol-type filtering; clears the query.
    ToggleFilterMode,
    /// Sets the query to the next alcohol type.
    NextAlcoholType,
    /// Sets the query to the previous alcohol type.
    PrevAlcoholType,

    /// The user closed the interstitial on screen.
    InterstitialClosed,

    /// A response from the ad worker.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Whether the event comes from the keyboard.
    #[must_use]
    pub const fn is_user_intent(&self) -> bool {
        !matches!(
            self,
            Self::Started | Self::SplashElapsed | Self::Teardown | Self::WorkerResponse(_)
        )
    }
}

/// Processes an event, mutates state, and returns `(render, actions)`.
///
/// # Errors
///
/// None of the current transitions fail; the `Result` is kept so new
/// transitions can propagate errors without changing the signature.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if event.is_user_intent() {
        if state.navigation == NavigationState::Splash {
            tracing::debug!("ignoring input on splash screen");
            return Ok((false, vec![]));
        }
        if state.is_gated() && *event != Event::InterstitialClosed {
            tracing::debug!(pending = ?state.pending, "ignoring input while interstitial is up");
            return Ok((false, vec![]));
        }
    }

    match event {
        Event::Started => {
            if !state.splash.arm() {
                return Ok((false, vec![]));
            }
            let mut actions = vec![
                Action::StartTimer {
                    seconds: state.splash_seconds,
                },
                Action::PostToWorker(WorkerMessage::initialize_network()),
            ];
            let now = state.now();
            if let Some(request) = state.interstitial.prepare(now) {
                actions.push(Action::PostToWorker(WorkerMessage::load_ad(request)));
            }
            Ok((true, actions))
        }
        Event::SplashElapsed => {
            if !state.splash.fire() {
                return Ok((false, vec![]));
            }
            tracing::debug!(recipes = state.catalog.len(), "splash finished, showing listing");
            state.navigation = NavigationState::Listing;
            state.apply_filter();

            let actions = state
                .banner
                .request()
                .map(|request| Action::PostToWorker(WorkerMessage::load_ad(request)))
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::Teardown => {
            state.splash.cancel();
            Ok((false, vec![]))
        }
        Event::KeyDown | Event::KeyUp => {
            let down = *event == Event::KeyDown;
            match state.navigation {
                NavigationState::Detail(_) => Ok((state.scroll_detail(down), vec![])),
                NavigationState::Listing => {
                    if down {
                        state.move_selection_down();
                    } else {
                        state.move_selection_up();
                    }
                    Ok((true, vec![]))
                }
                NavigationState::Splash => Ok((false, vec![])),
            }
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectRecipe => select_recipe(state),
        Event::Back => Ok((state.back_to_listing(), vec![])),
        Event::InterstitialClosed => {
            let outcome = state.interstitial.on_event(AdEvent::Dismissed);
            let mut actions = vec![];
            let render = apply_ad_outcome(state, outcome, &mut actions);
            Ok((render, actions))
        }
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
        _ if state.navigation != NavigationState::Listing => Ok((false, vec![])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.query.text, "leaving search");
            state.input_mode = InputMode::Normal;
            state.query.text.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search) {
                return Ok((false, vec![]));
            }
            state.query.text.push(*c);
            tracing::trace!(query = %state.query.text, char = %c, "search query updated");
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search) {
                return Ok((false, vec![]));
            }
            state.query.text.pop();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::SetFilterMode(mode) => {
            state.query.set_mode(*mode);
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ToggleFilterMode => {
            state.query.set_mode(state.query.mode.toggled());
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::NextAlcoholType => Ok((state.cycle_alcohol_type(true), vec![])),
        Event::PrevAlcoholType => Ok((state.cycle_alcohol_type(false), vec![])),
    }
}

fn select_recipe(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.navigation != NavigationState::Listing {
        return Ok((false, vec![]));
    }

    let Some(recipe) = state.selected_recipe() else {
        tracing::debug!("no recipe selected");
        return Ok((false, vec![]));
    };
    let id = recipe.id.clone();
    tracing::debug!(recipe_id = %id, recipe_name = %recipe.name, "recipe selected");

    let now = state.now();
    if state.interstitial.is_ready(now) {
        match state.interstitial.present() {
            Ok(creative) => {
                tracing::debug!(creative_id = %creative.id, "holding selection behind interstitial");
                state.pending = Some(id);
                return Ok((true, vec![]));
            }
            Err(e) => tracing::warn!(error = %e, "could not present interstitial"),
        }
    }

    state.open_detail(id);
    let actions = state
        .interstitial
        .prepare(now)
        .map(|request| Action::PostToWorker(WorkerMessage::load_ad(request)))
        .into_iter()
        .collect();
    Ok((true, actions))
}

/// Applies a gateway outcome: releases the pending selection when a
/// presentation ended and forwards any new load request.
///
/// Returns whether the screen changed.
fn apply_ad_outcome(state: &mut AppState, outcome: AdOutcome, actions: &mut Vec<Action>) -> bool {
    let mut render = false;
    if outcome.presentation_ended {
        render = true;
        if let Some(id) = state.pending.take() {
            state.open_detail(id);
        }
    }
    if let Some(request) = outcome.request {
        actions.push(Action::PostToWorker(WorkerMessage::load_ad(request)));
    }
    render
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    let mut actions = vec![];
    let render = match response {
        WorkerResponse::AdLoaded {
            format: AdFormat::Interstitial,
            creative,
            loaded_at,
        } => {
            let outcome = state.interstitial.on_event(AdEvent::Loaded {
                creative: creative.clone(),
                loaded_at: *loaded_at,
            });
            apply_ad_outcome(state, outcome, &mut actions)
        }
        WorkerResponse::AdFailedToLoad {
            format: AdFormat::Interstitial,
            message,
        } => {
            let outcome = state.interstitial.on_event(AdEvent::Failed {
                message: message.clone(),
            });
            apply_ad_outcome(state, outcome, &mut actions)
        }
        WorkerResponse::AdLoaded {
            format: AdFormat::Banner,
            creative,
            ..
        } => {
            state.banner.on_loaded(creative.clone());
            state.navigation == NavigationState::Listing
        }
        WorkerResponse::AdFailedToLoad {
            format: AdFormat::Banner,
            message,
        } => {
            state.banner.on_ad_failed_to_load(message);
            state.navigation == NavigationState::Listing
        }
        WorkerResponse::NetworkInitialized { creatives } => {
            tracing::debug!(creatives = creatives, "ad network initialized");
            false
        }
        WorkerResponse::NetworkInitFailed { message } => {
            tracing::warn!(error = %message, "ad network failed to initialize, ads disabled");
            false
        }
        WorkerResponse::Error { message } => {
            tracing::error!("Worker error: {}", message);
            false
        }
    };
    (render, actions)
}
