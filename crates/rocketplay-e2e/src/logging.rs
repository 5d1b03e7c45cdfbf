// Process-wide logging.
//
// Console plus a file artifact under logs/, through tracing. Initialization
// is idempotent: every test binary (and every test within one) may call
// `init`, only the first call installs the subscriber. The non-blocking
// writer guard is parked for the process lifetime so the file is flushed on
// exit.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "test-execution.log";

static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Installs the global subscriber: console output plus `logs/test-execution.log`.
///
/// `RUST_LOG` overrides the configured level. Safe to call more than once.
pub fn init(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env.log_level.clone()));

    let file_appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .is_ok();

    if installed {
        let _ = FILE_GUARD.set(guard);
    }
}

/// Logs a scenario step boundary.
pub fn log_step(step: &str) {
    tracing::info!("STEP: {step}");
}
