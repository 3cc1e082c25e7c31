//! Tracing with file-based OTLP export.
//!
//! The plugin runs in a WASI sandbox without network access, so spans are
//! serialized as OTLP JSON and appended to a rotating file in the plugin data
//! directory (`~/.local/share/zellij/emerald-shaker/` on the host):
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → SpanFormatter → FileWriter
//! ```
//!
//! One JSON document per exported batch, one batch per line. The file rotates
//! at 10 MB and keeps three numbered backups.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`. Key handling, catalog filtering and ad lifecycle transitions log
//! at `debug`; ad failures log at `warn`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{FileWriter, RotationPolicy};
pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
