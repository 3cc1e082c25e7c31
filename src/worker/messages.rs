//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread asks the worker to initialize the ad network and to load
//! ads; the worker answers with the outcome. Requests carry the caller's trace
//! context so worker spans join the plugin's trace.

use crate::ads::{AdCreative, AdFormat, AdRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current span.
    ///
    /// Returns `None` when there is no valid OpenTelemetry context, which is
    /// the case whenever tracing was not initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a `", stringify!($variant), "` message with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    initialize_network(InitializeNetwork {}),
    load_ad(LoadAd { request: AdRequest }),
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Initialize the ad network. Sent once at startup.
    InitializeNetwork {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load one ad.
    LoadAd {
        request: AdRequest,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::InitializeNetwork { trace_context } | Self::LoadAd { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The ad network is ready to serve.
    NetworkInitialized {
        /// Size of the network's inventory.
        creatives: usize,
    },

    /// The ad network could not be initialized. Ads stay unavailable.
    NetworkInitFailed { message: String },

    /// An ad was filled.
    AdLoaded {
        format: AdFormat,
        creative: AdCreative,
        loaded_at: DateTime<Utc>,
    },

    /// An ad request failed.
    AdFailedToLoad { format: AdFormat, message: String },

    /// The worker could not process a message.
    Error { message: String },
}
