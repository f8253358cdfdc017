use std::path::Path;

/// JSON trace file written under the host-supplied log directory.
const TRACE_FILE: &str = "romheb-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "romheb_core=debug,romheb_engine=debug";

/// Install the JSON file subscriber. Only the first call has any effect, and
/// without the `trace` feature this does nothing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // The subscriber lives as long as the host process.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        if installed.is_ok() {
            tracing::debug!(dir = %log_dir.display(), "tracing initialized");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: &Path) {
    let _ = (log_dir, TRACE_FILE, DEFAULT_FILTER);
}
