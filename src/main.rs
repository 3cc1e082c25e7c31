//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Emerald Shaker library and the Zellij
//! plugin system: it maps Zellij events to library events, runs the event
//! handler and executes the returned actions.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Plugin Thread  │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, navigation
//! │  └──────────────────┘   │
//! │          │ IPC (JSON)   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  ShakerWorker    │   │  ← Ad network
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`, dispatch
//!    `Started` (arms the splash timer, initializes the ad network)
//! 2. **Timer**: The splash timer fires and the listing appears
//! 3. **Update**: Keys and worker replies become library events
//! 4. **Render**: Record the pane size and call the library renderer
//! 5. **BeforeClose**: Cancel the splash timer

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use emerald_shaker::worker::{ShakerWorker, WorkerMessage, WorkerResponse};
use emerald_shaker::{handle_event, Action, Config, Event, FilterMode, InputMode, NavigationState};

register_plugin!(State);
register_worker!(ShakerWorker, shaker_worker, SHAKER_WORKER);

/// Name shared by the worker registration and its IPC messages.
const WORKER_NAME: &str = "shaker";

struct State {
    app: emerald_shaker::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: emerald_shaker::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        emerald_shaker::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = emerald_shaker::initialize(&config);
        tracing::debug!(splash_seconds = config.splash_seconds, "app state initialized");

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::Timer,
            EventType::BeforeClose,
        ]);

        self.dispatch(&Event::Started);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::SplashElapsed,
            zellij_tile::prelude::Event::BeforeClose => Event::Teardown,
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        emerald_shaker::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs the event handler and executes its actions. Returns whether to
    /// re-render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.is_gated() {
            return Some(Event::InterstitialClosed);
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if matches!(self.app.navigation, NavigationState::Detail(_)) {
            return match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Esc | BareKey::Backspace | BareKey::Left | BareKey::Char('b') => {
                    Some(Event::Back)
                }
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        let searching = self.app.input_mode == InputMode::Search;
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') if !searching => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') if !searching => Event::KeyUp,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Esc if searching => Event::ExitSearch,
            BareKey::Esc => Event::Escape,
            BareKey::Tab => Event::ToggleFilterMode,
            BareKey::Enter => Event::SelectRecipe,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') if !searching => Event::CloseFocus,
            BareKey::Char('n') if !searching => Event::SetFilterMode(FilterMode::ByName),
            BareKey::Char('a') if !searching => Event::SetFilterMode(FilterMode::ByAlcoholType),
            BareKey::Char(']') if !searching => Event::NextAlcoholType,
            BareKey::Char('[') if !searching => Event::PrevAlcoholType,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::StartTimer { seconds } => set_timeout(*seconds),
            Action::PostToWorker(message) => Self::post_worker_message(message),
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
