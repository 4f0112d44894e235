use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory for daily rolling log files. Logs go to stderr when unset.
pub const LOG_DIR_ENV: &str = "LOOPMAZE_LOG_DIR";

const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber for the binaries.
///
/// The returned guard flushes buffered log lines when dropped, so keep it alive
/// for the whole run. Filtering follows `RUST_LOG`.
pub fn init_tracing() -> WorkerGuard {
    let to_file = std::env::var_os(LOG_DIR_ENV);
    let ansi = to_file.is_none();
    let (writer, guard) = match to_file {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "loopmaze.log"))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (e.g. by a test harness); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init();

    guard
}
