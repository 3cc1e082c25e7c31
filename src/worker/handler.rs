//! Worker thread implementation: the off-thread ad network.
//!
//! The worker owns the [`AdNetwork`] and is the only place network calls
//! happen. Each incoming [`WorkerMessage`] produces exactly one
//! [`WorkerResponse`], posted back to the plugin thread where it is applied
//! in arrival order.

use crate::ads::{AdNetwork, AdRequest, HouseAdNetwork};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The network is created lazily on the first message, so the worker can be
/// default-constructed by the Zellij runtime.
#[derive(Serialize, Deserialize, Default)]
pub struct ShakerWorker {
    #[serde(skip)]
    network: Option<Box<dyn AdNetwork>>,
}

impl ShakerWorker {
    /// Worker over a specific network.
    #[must_use]
    pub fn with_network(network: Box<dyn AdNetwork>) -> Self {
        Self {
            network: Some(network),
        }
    }

    fn network(&mut self) -> &mut dyn AdNetwork {
        &mut **self
            .network
            .get_or_insert_with(|| Box::new(HouseAdNetwork::bundled()))
    }

    /// Turns a network result into a response with consistent logging.
    fn handle_network_result<T, S, F>(
        operation: &str,
        result: Result<T>,
        on_success: S,
        on_failure: F,
    ) -> WorkerResponse
    where
        S: FnOnce(T) -> WorkerResponse,
        F: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "ad network operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "ad network operation failed");
                on_failure(e.to_string())
            }
        }
    }

    fn handle_initialize(&mut self) -> WorkerResponse {
        let network = self.network();
        let result = network.initialize().map(|()| network.inventory_len());
        Self::handle_network_result(
            "initialize network",
            result,
            |creatives| WorkerResponse::NetworkInitialized { creatives },
            |message| WorkerResponse::NetworkInitFailed { message },
        )
    }

    fn handle_load_ad(&mut self, request: &AdRequest) -> WorkerResponse {
        let format = request.format;
        Self::handle_network_result(
            "load ad",
            self.network().load(request),
            |creative| WorkerResponse::AdLoaded {
                format,
                creative,
                loaded_at: chrono::Utc::now(),
            },
            |message| WorkerResponse::AdFailedToLoad { format, message },
        )
    }

    /// Links the current thread's context to the sender's span.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::InitializeNetwork { .. } => self.handle_initialize(),
            WorkerMessage::LoadAd { request, .. } => self.handle_load_ad(&request),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::Once = std::sync::Once::new();

fn reply(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for ShakerWorker {
    /// Deserializes the payload, handles it, and posts the response back
    /// under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        WORKER_TRACING_INITIALIZED.call_once(|| {
            crate::observability::init_tracing(&crate::Config::default());
        });

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                reply(
                    message,
                    &WorkerResponse::Error {
                        message: format!("unreadable worker message: {e}"),
                    },
                );
                return;
            }
        };

        let response = self.handle_message(worker_message);
        reply(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::{AdCreative, AdFormat};
    use crate::ShakerError;

    struct ScriptedNetwork {
        init_ok: bool,
        fill: bool,
    }

    impl AdNetwork for ScriptedNetwork {
        fn initialize(&mut self) -> Result<()> {
            if self.init_ok {
                Ok(())
            } else {
                Err(ShakerError::AdNetwork("sdk unavailable".to_string()))
            }
        }

        fn load(&mut self, request: &AdRequest) -> Result<AdCreative> {
            if !self.fill {
                return Err(ShakerError::AdNetwork("no fill".to_string()));
            }
            Ok(AdCreative {
                id: "scripted".to_string(),
                format: request.format,
                headline: "Scripted".to_string(),
                body: String::new(),
                call_to_action: String::new(),
                advertiser: "Tests".to_string(),
                personalized: false,
            })
        }

        fn inventory_len(&self) -> usize {
            1
        }
    }

    fn worker(init_ok: bool, fill: bool) -> ShakerWorker {
        ShakerWorker::with_network(Box::new(ScriptedNetwork { init_ok, fill }))
    }

    #[test]
    fn initialization_reports_inventory() {
        let response = worker(true, true).handle_message(WorkerMessage::initialize_network());
        assert_eq!(response, WorkerResponse::NetworkInitialized { creatives: 1 });
    }

    #[test]
    fn initialization_failure_is_a_response_not_a_panic() {
        let response = worker(false, true).handle_message(WorkerMessage::initialize_network());
        assert!(matches!(
            response,
            WorkerResponse::NetworkInitFailed { message } if message.contains("sdk unavailable")
        ));
    }

    #[test]
    fn load_reports_format_on_success_and_failure() {
        let request = AdRequest::new(AdFormat::Interstitial, "ca-app-pub-1/2");

        let ok = worker(true, true).handle_message(WorkerMessage::load_ad(request.clone()));
        assert!(matches!(
            ok,
            WorkerResponse::AdLoaded { format: AdFormat::Interstitial, ref creative, .. }
                if creative.id == "scripted"
        ));

        let failed = worker(true, false).handle_message(WorkerMessage::load_ad(request));
        assert!(matches!(
            failed,
            WorkerResponse::AdFailedToLoad { format: AdFormat::Interstitial, .. }
        ));
    }

    #[test]
    fn default_worker_uses_bundled_house_network() {
        let mut worker = ShakerWorker::default();
        assert!(matches!(
            worker.handle_message(WorkerMessage::initialize_network()),
            WorkerResponse::NetworkInitialized { creatives } if creatives > 0
        ));
    }
}
