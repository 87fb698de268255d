pub mod domain;
pub mod infra;

use infra::Settings;
use tracing_appender::non_blocking::WorkerGuard;

/// Routes tracing output to a daily-rolling log file. The returned guard
/// must be held for the lifetime of the process so buffered events are
/// flushed on shutdown.
pub fn configure_tracing(settings: &Settings) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(
        settings.application.logs_directory.clone(),
        "cart_engine.log",
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();
    guard
}
