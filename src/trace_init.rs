//! Optional JSON trace output for debugging sessions.

use std::path::Path;

/// Environment variable overriding the trace filter.
pub const TRACE_FILTER_ENV: &str = "KANATYPE_LOG";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kanatype=debug,kanatype_core=debug,kanatype_session=debug";

/// Flushes buffered trace lines when dropped. Hold it until the program exits.
#[must_use = "trace output stops when the guard is dropped"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: tracing_appender::non_blocking::WorkerGuard,
}

/// Write spans and events as JSON lines to `<log_dir>/kanatype-trace.jsonl`.
///
/// Returns `None` when built without the `trace` feature or when another
/// subscriber is already installed.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(TRACE_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_appender = tracing_appender::rolling::never(log_dir, "kanatype-trace.jsonl");
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .ok()?;
    Some(TraceGuard { _worker: worker })
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}
