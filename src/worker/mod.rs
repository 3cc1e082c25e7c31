//! Background worker thread hosting the ad network.
//!
//! Ad initialization and loading run here so the plugin thread never waits
//! on them. Communication uses Zellij's worker IPC with JSON payloads and
//! carries trace context across the thread boundary.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: [`ShakerWorker`] and message processing

pub mod handler;
pub mod messages;

pub use handler::ShakerWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
