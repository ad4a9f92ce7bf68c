//! Logging bootstrap shared by binaries and tests.

use std::str::FromStr;
use std::sync::Once;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

static INIT_LOG: Once = Once::new();

/// Idempotent setup for tests
pub fn init_testing() {
    INIT_LOG.call_once(|| setup_logging("logs", "fhevm-sdk.log"));
}

/// Installs the global subscriber: JSON events to a daily-rolling file under
/// `log_dir` and to stdout. The level comes from `RUST_LOG`, defaulting to
/// INFO.
pub fn setup_logging(log_dir: &str, file_name: &str) {
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
    let file_and_stdout = file_appender.and(std::io::stdout);

    // read the RUST_LOG environment variable to set the logging level, or set to INFO as default
    let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
    let log_level = tracing::Level::from_str(&log_level_str).unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_and_stdout)
        .with_ansi(false)
        .with_max_level(log_level)
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set logging subscriber");
}
