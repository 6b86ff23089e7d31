use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "namae_core=debug,namae_cli=debug";

/// Initialise the global subscriber.
///
/// With `trace_dir`, spans and events are written as JSON lines to
/// `namedict-trace.jsonl` in that directory; otherwise human-readable output
/// goes to stderr. `RUST_LOG` overrides the level filter. The returned guard
/// must be held until exit so buffered lines are flushed.
pub fn init_tracing(trace_dir: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match trace_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "namedict-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_env_filter(filter)
                .init();
            None
        }
    }
}
