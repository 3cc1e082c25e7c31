//! Side effects requested by the event handler.
//!
//! The handler stays free of Zellij calls; it returns a `Vec<Action>` and the
//! plugin shim executes them in order.

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Schedules a `Timer` event after `seconds`.
    StartTimer { seconds: f64 },

    /// Posts a message to the ad network worker.
    PostToWorker(WorkerMessage),

    /// Hides the plugin pane.
    CloseFocus,
}
